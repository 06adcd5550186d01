//! Grid coordinates used as set keys by the engine

use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single grid coordinate.
///
/// Pure value type: equality, hashing, and ordering are structural over
/// (x, y). The engine stores these in hash sets, so equal coordinates must
/// always hash identically, which the derived implementations guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = LifeError;

    /// Parses the `x,y` wire format used by the console and pattern files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidCellFormat {
            input: s.trim().to_string(),
        };

        let mut parts = s.trim().split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => {
                let x = x.trim().parse().map_err(|_| invalid())?;
                let y = y.trim().parse().map_err(|_| invalid())?;
                Ok(Cell::new(x, y))
            }
            _ => Err(invalid()),
        }
    }
}
