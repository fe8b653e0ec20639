//! Builder Module
//!
//! Build mode and the ghost placement preview.

pub mod planner;

pub use planner::{Ghost, GhostPose, PlacementPlanner};
