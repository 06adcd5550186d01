//! Sparse Game of Life engine and pattern I/O

pub mod cell;
pub mod io;
pub mod life_engine;

pub use cell::Cell;
pub use life_engine::{LifeEngine, MAX_GRID};

pub(crate) use life_engine::validate_grid_size;
