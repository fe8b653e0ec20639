//! Buildfight Engine Library
//!
//! Simulation core for a third-person sandbox where the player builds
//! walls, floors, ramps and cones on a snapped grid and shoots them down.
//! Nothing in this crate touches a GPU or a window; rendering, raw input
//! capture and terrain are collaborators reached through narrow boundaries.
//!
//! # Modules
//!
//! - [`physics`] - AABB math and the linear projectile body
//! - [`world`] - Grid snapping, tile keys and the ground query boundary
//! - [`input`] - Device-agnostic per-tick input intents
//! - [`camera`] - Yaw/pitch look controller and third-person aim ray
//! - [`game`] - Build registry, collision/projectile systems, actor
//!   locomotion, placement planner, simulation context and render snapshot
//!
//! # Example
//!
//! ```ignore
//! use buildfight_engine::game::{Simulation, SimConfig};
//! use buildfight_engine::input::TickInput;
//!
//! let mut sim = Simulation::new(SimConfig::default());
//! let mut input = TickInput::default();
//! input.movement.forward = true;
//!
//! let report = sim.tick(&input);
//! let frame = sim.frame();
//! println!("actor at {:?}, {} structures", frame.actor.position, frame.structures.len());
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export world types for convenience
pub use world::{FlatGround, Ground, GridConfig, TileKey, snap_to_grid};
// Re-export commonly used input types
pub use input::{InputAction, MovementKeys, TickInput};
// Re-export the top-level simulation entry points
pub use game::{
    Actor, FixedStepLoop, FrameSink, LocomotionState, RenderFrame, SimConfig, Simulation,
};
