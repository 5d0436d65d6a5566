//! Gridlife - Conway's Game of Life on a fixed-size grid.
//!
//! This crate implements the simulation engine behind a click-to-toggle
//! Game of Life board: a bounded boolean grid, the fixed B3/S23 rule, and
//! a double-buffered generation stepper. Rendering, input mapping, and
//! tick scheduling stay with the caller.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and seeding for the grid
//! - `engine`: Grid state, rule evaluation, and generation stepping
//!
//! # Example
//!
//! ```rust
//! use gridlife::{
//!     engine::{LifeGrid, Stepper},
//!     schema::GridConfig,
//! };
//!
//! // The default configuration is the original 50x30 board.
//! let config = GridConfig::default();
//! let mut grid = LifeGrid::from_config(&config)?;
//!
//! // Toggle a blinker, then advance one generation.
//! grid.toggle(2, 1);
//! grid.toggle(2, 2);
//! grid.toggle(2, 3);
//!
//! let mut stepper = Stepper::new(&config)?;
//! stepper.step(&mut grid);
//!
//! assert!(grid.is_alive(1, 2).unwrap());
//! # Ok::<(), gridlife::ConfigError>(())
//! ```

pub mod engine;
pub mod schema;

// Re-export commonly used types
pub use engine::{GridError, GridStats, LifeGrid, Stepper};
pub use schema::{ConfigError, GridConfig, Pattern, Seed};
