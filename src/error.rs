//! Error types for the sparse Game of Life simulator

use thiserror::Error;

/// Errors raised by the engine and the console boundary layer.
///
/// All of these are fatal: grid-size errors abort engine construction, and
/// the parsing/position errors abort the whole run before the simulation
/// starts. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Grid dimensions are zero or exceed the safe maximum.
    #[error("invalid grid size: {cols}x{rows} (both dimensions must be at least 1 and below u32::MAX)")]
    InvalidGridSize { cols: u32, rows: u32 },

    /// The grid-size line did not parse as `cols,rows`.
    #[error("invalid grid format: expected `cols,rows`, got `{input}`")]
    InvalidGridFormat { input: String },

    /// A cell line did not parse as `x,y`.
    #[error("invalid cell format: expected `x,y`, got `{input}`")]
    InvalidCellFormat { input: String },

    /// A parsed cell lies outside the grid.
    #[error("invalid cell position: ({x}, {y}) is outside the {cols}x{rows} grid")]
    InvalidCellPosition { x: u32, y: u32, cols: u32, rows: u32 },
}
