//! Sparse Game of Life Simulator
//!
//! This library simulates Conway's Game of Life (B3/S23) on a bounded grid
//! using a sparse representation: instead of materializing the full grid, the
//! engine tracks the set of alive cells plus the "potential" cells worth
//! re-evaluating on the next generation. The console boundary, configuration,
//! and pattern I/O live in their own modules around that core.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod utils;

pub use config::Settings;
pub use engine::{Cell, LifeEngine};
pub use error::LifeError;
