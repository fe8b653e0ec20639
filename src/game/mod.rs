//! Game Module
//!
//! Gameplay built on top of the engine primitives: build pieces and their
//! registry, collision and projectile systems, the actor, the placement
//! planner, and the simulation that ties them together.

pub mod actor;
pub mod builder;
pub mod building;
pub mod config;
pub mod frame;
pub mod game_loop;
pub mod simulation;
pub mod systems;

pub use actor::{Actor, LocomotionState, StepReport};
pub use builder::{Ghost, GhostPose, PlacementPlanner};
pub use building::{
    BuildRegistry, PlaceError, Structure, StructureId, StructureKind, StructureShape, TileIndex,
    TileSlots,
};
pub use config::{ConfigError, SimConfig};
pub use frame::{
    ActorView, CameraView, FrameSink, GhostView, NullSink, ProjectileView, RenderFrame,
    StructureInstance, StructureView,
};
pub use game_loop::{FixedStepLoop, MAX_FRAME_DELTA_S};
pub use simulation::{Simulation, TickReport};
pub use systems::{CollisionSystem, ProjectileEvent, ProjectileSystem};
