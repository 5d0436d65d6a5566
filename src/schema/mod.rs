//! Schema module - Configuration and seeding types for the simulation.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
