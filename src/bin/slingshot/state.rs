use macroquad::prelude::*;
use slingshot_blocks::config::GameConfig;
use slingshot_blocks::sim::{FixedStepper, GameWorld, ShotPhase};

/// Snapshot of a trajectory shown in the graph panel.
pub(crate) struct GraphPanel {
    pub(crate) open: bool,
    pub(crate) points: Vec<Vec2>,
}

pub(crate) struct AppRuntime {
    pub(crate) config: GameConfig,
    pub(crate) world: GameWorld,
    pub(crate) stepper: FixedStepper,
    pub(crate) dragging: bool,
    pub(crate) show_options: bool,
    pub(crate) graph: GraphPanel,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: GameConfig) -> Self {
        let world = GameWorld::new(&config);
        let stepper = FixedStepper::new(config.world.fixed_step_s, config.world.max_frame_s);
        Self {
            config,
            world,
            stepper,
            dragging: false,
            show_options: false,
            graph: GraphPanel {
                open: false,
                points: Vec::new(),
            },
            status_line: "Drag the ball back and let go".to_string(),
        }
    }

    pub(crate) fn reload(&mut self) {
        self.world.reset_projectile();
        self.dragging = false;
        self.status_line = "Reloaded".to_string();
    }

    pub(crate) fn refresh_graph(&mut self) {
        self.graph.points = self.world.trajectory().latest().to_vec();
    }

    /// Band endpoints in world space; the second point only while dragging.
    pub(crate) fn slingshot_band(&self) -> (Vec2, Option<Vec2>) {
        let origin = self.world.slingshot_origin();
        if self.dragging && self.world.phase() == ShotPhase::Loaded {
            (origin, Some(self.world.projectile_position()))
        } else {
            (origin, None)
        }
    }
}
