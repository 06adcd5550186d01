//! Interactive console boundary layer

pub mod runner;

pub use runner::{parse_grid_size, ConsoleRunner};
