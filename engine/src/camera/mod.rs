//! Camera Module
//!
//! Look control and aim rays for the third-person boom camera.

pub mod look;

pub use look::{
    DEFAULT_PITCH_LIMIT, DEFAULT_SENSITIVITY, LookController, planar_forward, planar_right,
};
