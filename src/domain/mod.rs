mod cell;
mod grid;
mod simulator;
mod patterns;

pub use cell::{Cell, Transition};
pub use grid::Grid;
pub use simulator::Simulator;
pub use patterns::{Pattern, presets};
