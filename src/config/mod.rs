//! Configuration management for the Game of Life console simulator

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
