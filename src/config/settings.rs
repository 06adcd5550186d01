//! Configuration settings for the Game of Life console simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: u32,
    pub rows: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations to run without prompting. Zero means interactive mode.
    pub steps: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Seed cells file. When unset, cells are read interactively.
    pub cells_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Where to write the final alive set. When unset, it is printed.
    pub dump_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                cols: 1000,
                rows: 1000,
            },
            simulation: SimulationConfig { steps: 0 },
            input: InputConfig { cells_file: None },
            output: OutputConfig {
                format: OutputFormat::Text,
                dump_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        crate::engine::validate_grid_size(self.grid.cols, self.grid.rows)?;

        if let Some(ref cells_file) = self.input.cells_file {
            if !cells_file.exists() {
                anyhow::bail!("Cells file does not exist: {}", cells_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(steps) = cli_overrides.steps {
            self.simulation.steps = steps;
        }
        if let Some(ref cells_file) = cli_overrides.cells_file {
            self.input.cells_file = Some(cells_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref dump_file) = cli_overrides.dump_file {
            self.output.dump_file = Some(dump_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub cols: Option<u32>,
    pub rows: Option<u32>,
    pub steps: Option<usize>,
    pub cells_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub dump_file: Option<PathBuf>,
}
