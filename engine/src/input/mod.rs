//! Input Module
//!
//! Device-agnostic input intents. This module is decoupled from any
//! windowing system; an adapter on the host side maps its key and mouse
//! events to [`InputAction`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use buildfight_engine::input::{InputAction, MovementKey, TickInput};
//!
//! let mut input = TickInput::new();
//! input.apply(InputAction::Movement(MovementKey::Forward, true));
//! input.apply(InputAction::Look(12.0, -3.0));
//!
//! sim.tick(&input);
//! input.clear_edges();
//! ```

pub mod intents;

pub use intents::{InputAction, MovementKey, MovementKeys, TickInput};
