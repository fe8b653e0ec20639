//! Simulation - the single owner of all mutable game state.
//!
//! Composes the build registry, projectiles, actor, look controller and
//! placement planner. [`Simulation::tick`] is the one entry point for the
//! per-tick game logic and [`Simulation::frame`] the one exit to the
//! renderer. **No render imports** - this module is GPU-agnostic.

use glam::{Vec2, Vec3};

use crate::camera::LookController;
use crate::game::actor::{Actor, StepReport};
use crate::game::builder::PlacementPlanner;
use crate::game::building::{BuildRegistry, StructureId, StructureKind};
use crate::game::config::{ConfigError, SimConfig};
use crate::game::frame::{
    ActorView, CameraView, GhostView, ProjectileView, RenderFrame, StructureView,
};
use crate::game::systems::{ProjectileEvent, ProjectileSystem};
use crate::input::TickInput;
use crate::world::{FlatGround, GridConfig, Ground};

/// What one tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Tick number this report belongs to (0-based)
    pub tick: u64,
    /// New build-mode state if it was toggled this tick
    pub build_mode: Option<bool>,
    /// Archetype switched to this tick
    pub selected: Option<StructureKind>,
    pub rotated: bool,
    /// Structure committed from the ghost this tick
    pub placed: Option<StructureId>,
    pub fired: bool,
    pub jumped: bool,
    pub step: StepReport,
    pub projectile_events: Vec<ProjectileEvent>,
}

impl TickReport {
    /// Structures destroyed by projectiles this tick.
    pub fn destroyed(&self) -> impl Iterator<Item = StructureId> + '_ {
        self.projectile_events.iter().filter_map(|e| match e {
            ProjectileEvent::StructureDestroyed { structure, .. } => Some(*structure),
            ProjectileEvent::Expired { .. } => None,
        })
    }
}

/// The whole sandbox.
pub struct Simulation<G: Ground = FlatGround> {
    config: SimConfig,
    ground: G,
    registry: BuildRegistry,
    projectiles: ProjectileSystem,
    actor: Actor,
    look: LookController,
    planner: PlacementPlanner,
    tick: u64,
}

impl Simulation<FlatGround> {
    /// Sandbox on a flat ground plane at y = 0.
    ///
    /// Bounded when `config.ground_half_extent` is set.
    pub fn new(config: SimConfig) -> Self {
        let ground = match config.ground_half_extent {
            Some(extent) => FlatGround::bounded(0.0, extent),
            None => FlatGround::default(),
        };
        Self::with_ground(config, ground)
    }

    /// Like [`Simulation::new`] but rejects an invalid config.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<G: Ground> Simulation<G> {
    pub fn with_ground(config: SimConfig, ground: G) -> Self {
        let grid = GridConfig::new(config.grid_size);
        let look = LookController::new(
            config.look_sensitivity,
            config.pitch_limit,
            config.camera_distance,
            config.camera_height,
        );
        log::debug!(
            "[Sim] New simulation: grid {}, spawn ({:.1}, {:.1}, {:.1})",
            config.grid_size,
            config.spawn_position.x,
            config.spawn_position.y,
            config.spawn_position.z,
        );
        Self {
            registry: BuildRegistry::new(grid),
            projectiles: ProjectileSystem::new(&config),
            actor: Actor::new(config.spawn_position),
            look,
            planner: PlacementPlanner::new(grid, config.ghost_fallback_distance),
            ground,
            config,
            tick: 0,
        }
    }

    /// Run one fixed step.
    ///
    /// # Order of operations
    /// 1. Look delta
    /// 2. Build-mode toggle
    /// 3. Archetype select
    /// 4. Ghost rotate
    /// 5. Primary: commit the ghost in build mode, fire otherwise
    /// 6. Jump
    /// 7. Actor step (planar move with sliding, gravity, ground snap)
    /// 8. Projectiles
    /// 9. Ghost refresh while build mode is on
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        // 1. Look
        if input.look_delta != Vec2::ZERO {
            self.look.apply_delta(input.look_delta.x, input.look_delta.y);
        }

        // 2. Toggle build mode; entering it snaps the ghost right away
        let build_mode = if input.toggle_build {
            let on = self.planner.toggle_build_mode();
            if on {
                self.refresh_ghost();
            }
            Some(on)
        } else {
            None
        };

        // 3. Select
        let selected = match input.select {
            Some(slot) => match StructureKind::from_index(slot) {
                Some(kind) if self.planner.select(kind) => Some(kind),
                Some(_) => None,
                None => {
                    log::debug!("[Sim] Ignored unknown archetype slot {slot}");
                    None
                }
            },
            None => None,
        };

        // 4. Rotate
        let rotated = input.rotate && self.planner.rotate();

        // 5. Primary
        let mut placed = None;
        let mut fired = false;
        if input.primary {
            if self.planner.is_active() {
                // Pose from this tick's look and rotation
                self.refresh_ghost();
                placed = self.planner.commit(&mut self.registry);
            } else {
                let origin = self.eye();
                fired = self.projectiles.fire(origin, self.look.aim_direction());
            }
        }

        // 6. Jump
        let jumped = input.jump && self.actor.jump(&self.config);

        // 7. Actor
        let step = self.actor.step(
            &input.movement,
            self.look.yaw,
            &self.registry,
            &self.ground,
            &self.config,
        );

        // 8. Projectiles
        let projectile_events = self.projectiles.tick(&mut self.registry);

        // 9. Ghost
        if self.planner.is_active() {
            self.refresh_ghost();
        }

        let report = TickReport {
            tick: self.tick,
            build_mode,
            selected,
            rotated,
            placed,
            fired,
            jumped,
            step,
            projectile_events,
        };
        self.tick += 1;

        log::trace!(
            "[Sim] tick {} actor ({:.2}, {:.2}, {:.2}) {:?} structures {} projectiles {}",
            report.tick,
            self.actor.position.x,
            self.actor.position.y,
            self.actor.position.z,
            self.actor.state,
            self.registry.len(),
            self.projectiles.len(),
        );

        report
    }

    /// Read-only snapshot for the renderer.
    pub fn frame(&self) -> RenderFrame {
        let grid_size = self.config.grid_size;
        let ghost = self.planner.ghost();
        RenderFrame {
            tick: self.tick,
            actor: ActorView {
                position: self.actor.position,
                yaw: self.look.yaw,
                pitch: self.look.pitch,
                grounded: self.actor.is_grounded(),
            },
            camera: CameraView {
                eye: self.eye(),
                direction: self.look.aim_direction(),
            },
            structures: self
                .registry
                .iter()
                .map(|s| StructureView {
                    id: s.id,
                    kind: s.kind,
                    position: s.position,
                    rotation: s.rotation(grid_size),
                    bounds: *s.bounds(),
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    position: p.position,
                })
                .collect(),
            ghost: GhostView {
                kind: ghost.kind,
                position: ghost.position,
                rotation: ghost.rotation(),
                half_extents: ghost.shape.half_extents,
                visible: ghost.visible,
                revision: ghost.revision,
            },
        }
    }

    /// Drop every structure and projectile, respawn the actor and leave
    /// build mode with the look reset. The tick counter keeps running.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.projectiles.clear();
        self.actor = Actor::new(self.config.spawn_position);
        self.look = LookController::new(
            self.config.look_sensitivity,
            self.config.pitch_limit,
            self.config.camera_distance,
            self.config.camera_height,
        );
        self.planner = PlacementPlanner::new(
            GridConfig::new(self.config.grid_size),
            self.config.ghost_fallback_distance,
        );
        log::info!("[Sim] Reset");
    }

    fn eye(&self) -> Vec3 {
        self.look.eye_position(self.actor.position)
    }

    fn refresh_ghost(&mut self) {
        let origin = self.eye();
        let direction = self.look.aim_direction();
        self.planner
            .refresh(origin, direction, self.look.yaw, &self.ground);
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ground(&self) -> &G {
        &self.ground
    }

    pub fn registry(&self) -> &BuildRegistry {
        &self.registry
    }

    /// Direct registry access, e.g. for scripted scenes.
    pub fn registry_mut(&mut self) -> &mut BuildRegistry {
        &mut self.registry
    }

    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    pub fn look_mut(&mut self) -> &mut LookController {
        &mut self.look
    }

    pub fn planner(&self) -> &PlacementPlanner {
        &self.planner
    }

    /// Ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}
