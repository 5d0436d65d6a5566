//! Engine module - Grid state and generation stepping.

mod grid;
mod rule;
mod stats;
mod stepper;

pub use grid::*;
pub use rule::*;
pub use stats::*;
pub use stepper::*;
