use std::f32::consts::PI;

use macroquad::math::{Vec2, vec2};
use rapier2d::prelude::*;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::sim::launch::{clamp_drag, launch_impulse, launch_velocity};
use crate::sim::trajectory::TrajectoryLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotPhase {
    /// Sitting in the slingshot; can be dragged.
    Loaded,
    Flying,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecycleReason {
    FellOut,
    PassedRightEdge,
}

/// Render snapshot of one collider, in world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    Polygon(Vec<Vec2>),
    Segment { a: Vec2, b: Vec2, half_thickness: f32 },
}

#[derive(Clone, Copy)]
struct Projectile {
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

/// The slingshot scene on top of a rapier pipeline: a static ground, a stack
/// of dynamic blocks and one projectile.
pub struct GameWorld {
    config: GameConfig,
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    ground: ColliderHandle,
    blocks: Vec<ColliderHandle>,
    projectile: Projectile,
    pinned_at: Vec2,
    phase: ShotPhase,
    trajectory: TrajectoryLog,
}

impl GameWorld {
    pub fn new(config: &GameConfig) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let ground = build_ground(config, &mut bodies, &mut colliders);
        let blocks = build_block_stack(config, &mut bodies, &mut colliders);
        let projectile = spawn_projectile(config, &mut bodies, &mut colliders);
        info!(blocks = blocks.len(), "World built");

        Self {
            config: config.clone(),
            gravity: vector![0.0, config.world.gravity_y],
            params: IntegrationParameters {
                dt: config.world.fixed_step_s,
                ..Default::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            ground,
            blocks,
            projectile,
            pinned_at: config.slingshot.origin(),
            phase: ShotPhase::Loaded,
            trajectory: TrajectoryLog::new(),
        }
    }

    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    pub fn trajectory(&self) -> &TrajectoryLog {
        &self.trajectory
    }

    pub fn slingshot_origin(&self) -> Vec2 {
        self.config.slingshot.origin()
    }

    pub fn projectile_radius(&self) -> f32 {
        self.config.projectile.radius
    }

    pub fn projectile_position(&self) -> Vec2 {
        let t = self.bodies[self.projectile.body].translation();
        vec2(t.x, t.y)
    }

    pub fn projectile_velocity(&self) -> Vec2 {
        let v = self.bodies[self.projectile.body].linvel();
        vec2(v.x, v.y)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Replaces the projectile with a fresh one sitting at the slingshot origin.
    pub fn reset_projectile(&mut self) {
        self.bodies.remove(
            self.projectile.body,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        self.projectile = spawn_projectile(&self.config, &mut self.bodies, &mut self.colliders);
        self.pinned_at = self.slingshot_origin();
        self.phase = ShotPhase::Loaded;
        self.trajectory.finish();
        debug!("Projectile reloaded");
    }

    /// Moves the loaded projectile toward `pointer`, no farther than the
    /// maximum drag distance. Ignored once the projectile has been released.
    pub fn drag_to(&mut self, pointer: Vec2) {
        if self.phase != ShotPhase::Loaded {
            return;
        }
        self.pinned_at = clamp_drag(
            self.slingshot_origin(),
            pointer,
            self.config.slingshot.max_drag_distance,
        );
        self.pin_projectile();
    }

    /// Releases the projectile. The impulse follows the band tension between
    /// the origin and `release` (the pointer at release time).
    pub fn launch(&mut self, release: Vec2) -> Option<Vec2> {
        if self.phase != ShotPhase::Loaded {
            return None;
        }

        let impulse = launch_impulse(
            self.slingshot_origin(),
            release,
            self.config.slingshot.launch_gain,
        );
        let velocity = launch_velocity(impulse, self.config.projectile.mass);
        let body = &mut self.bodies[self.projectile.body];
        body.set_gravity_scale(1.0, true);
        body.set_linvel(vector![velocity.x, velocity.y], true);
        body.set_angvel(0.0, true);

        self.trajectory.begin(self.pinned_at);
        self.phase = ShotPhase::Flying;
        info!(
            impulse_x = impulse.x,
            impulse_y = impulse.y,
            speed = velocity.length(),
            "Projectile launched"
        );
        Some(velocity)
    }

    /// Advances the simulation by one step of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );

        match self.phase {
            ShotPhase::Loaded => self.pin_projectile(),
            ShotPhase::Flying => {
                let position = self.projectile_position();
                self.trajectory.record(position);
            }
        }
    }

    /// Reloads the slingshot when a flying projectile has left the play area.
    pub fn recycle_if_outside(&mut self) -> Option<RecycleReason> {
        if self.phase != ShotPhase::Flying {
            return None;
        }

        let position = self.projectile_position();
        let world = &self.config.world;
        let reason = if position.y < world.recycle_min_y {
            RecycleReason::FellOut
        } else if position.x > world.width * world.recycle_max_x_factor {
            RecycleReason::PassedRightEdge
        } else {
            return None;
        };

        info!(
            ?reason,
            samples = self.trajectory.current().len(),
            "Projectile left the play area"
        );
        self.reset_projectile();
        Some(reason)
    }

    /// Projectile first, then blocks, then the ground.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(self.blocks.len() + 2);
        if let Some(ball) = self.colliders[self.projectile.collider].shape().as_ball() {
            shapes.push(Shape::Circle {
                center: self.projectile_position(),
                radius: ball.radius,
            });
        }

        for handle in &self.blocks {
            let collider = &self.colliders[*handle];
            if let Some(cuboid) = collider.shape().as_cuboid() {
                let he = cuboid.half_extents;
                let corners = [
                    point![-he.x, -he.y],
                    point![he.x, -he.y],
                    point![he.x, he.y],
                    point![-he.x, he.y],
                ];
                shapes.push(Shape::Polygon(
                    corners
                        .iter()
                        .map(|corner| {
                            let p = collider.position() * corner;
                            vec2(p.x, p.y)
                        })
                        .collect(),
                ));
            }
        }

        let ground = &self.colliders[self.ground];
        if let Some(cuboid) = ground.shape().as_cuboid() {
            let center = ground.translation();
            let he = cuboid.half_extents;
            shapes.push(Shape::Segment {
                a: vec2(center.x - he.x, center.y),
                b: vec2(center.x + he.x, center.y),
                half_thickness: he.y,
            });
        }

        shapes
    }

    fn pin_projectile(&mut self) {
        let at = self.pinned_at;
        let body = &mut self.bodies[self.projectile.body];
        body.set_translation(vector![at.x, at.y], true);
        body.set_linvel(vector![0.0, 0.0], true);
        body.set_angvel(0.0, true);
    }
}

fn build_ground(
    config: &GameConfig,
    bodies: &mut RigidBodySet,
    colliders: &mut ColliderSet,
) -> ColliderHandle {
    let world = &config.world;
    let body = RigidBodyBuilder::fixed()
        .translation(vector![world.width / 2.0, world.ground_y])
        .build();
    let collider = ColliderBuilder::cuboid(world.width / 2.0, world.ground_half_thickness)
        .friction(world.ground_friction)
        .build();

    let handle = bodies.insert(body);
    colliders.insert_with_parent(collider, handle, bodies)
}

/// Rows stack upward from the ground top, columns extend to the right of `start_x`.
fn build_block_stack(
    config: &GameConfig,
    bodies: &mut RigidBodySet,
    colliders: &mut ColliderSet,
) -> Vec<ColliderHandle> {
    let blocks = &config.blocks;
    let ground_top = config.world.ground_y + config.world.ground_half_thickness;
    let start_y = ground_top + blocks.height / 2.0;
    let density = blocks.mass / (blocks.width * blocks.height);

    let mut handles = Vec::with_capacity(blocks.rows * blocks.cols);
    for row in 0..blocks.rows {
        for col in 0..blocks.cols {
            let x = blocks.start_x + col as f32 * (blocks.width + blocks.gap_x);
            let y = start_y + row as f32 * (blocks.height + blocks.gap_y);

            let body = RigidBodyBuilder::dynamic()
                .translation(vector![x, y])
                .build();
            let collider = ColliderBuilder::cuboid(blocks.width / 2.0, blocks.height / 2.0)
                .density(density)
                .restitution(blocks.elasticity)
                .friction(blocks.friction)
                .build();

            let handle = bodies.insert(body);
            handles.push(colliders.insert_with_parent(collider, handle, bodies));
        }
    }
    handles
}

/// Loaded projectiles ignore gravity until launched.
fn spawn_projectile(
    config: &GameConfig,
    bodies: &mut RigidBodySet,
    colliders: &mut ColliderSet,
) -> Projectile {
    let ball = &config.projectile;
    let origin = config.slingshot.origin();
    let body = RigidBodyBuilder::dynamic()
        .translation(vector![origin.x, origin.y])
        .gravity_scale(0.0)
        .ccd_enabled(true)
        .build();
    let collider = ColliderBuilder::ball(ball.radius)
        .density(ball.mass / (PI * ball.radius * ball.radius))
        .restitution(ball.elasticity)
        .friction(ball.friction)
        .build();

    let body = bodies.insert(body);
    let collider = colliders.insert_with_parent(collider, body, bodies);
    Projectile { body, collider }
}
