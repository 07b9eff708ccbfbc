//! Simulation side of the game: the physics world and the small amount of
//! arithmetic the slingshot needs on top of it.

pub mod coords;
pub mod launch;
pub mod stepper;
pub mod trajectory;
pub mod window;
pub mod world;

pub use stepper::FixedStepper;
pub use trajectory::TrajectoryLog;
pub use world::{GameWorld, RecycleReason, Shape, ShotPhase};
