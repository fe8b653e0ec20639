//! Config Module
//!
//! Centralized tuning for physics, building, projectiles and the loop.

pub mod sim_config;

pub use sim_config::{ConfigError, SimConfig};
