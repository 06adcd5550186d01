//! File I/O for cell-list patterns
//!
//! Pattern files hold one `x,y` pair per line. Blank lines and lines
//! starting with `#` are skipped, and a trailing `END` sentinel is accepted
//! so interactive session transcripts can be replayed as files.

use super::{Cell, LifeEngine};
use crate::config::OutputFormat;
use crate::error::LifeError;
use crate::utils::CellFormatter;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load seed cells from a pattern file, validating each against the grid.
pub fn load_cells_from_file<P: AsRef<Path>>(
    path: P,
    cols: u32,
    rows: u32,
) -> Result<HashSet<Cell>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read cells file: {}", path.as_ref().display()))?;

    parse_cells(&content, cols, rows)
        .with_context(|| format!("Failed to parse cells file: {}", path.as_ref().display()))
}

/// Parse a cell list from a string, validating each cell against the grid.
pub fn parse_cells(content: &str, cols: u32, rows: u32) -> Result<HashSet<Cell>> {
    let mut cells = HashSet::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("end") {
            break;
        }

        let cell: Cell = line.parse()?;
        if cell.x >= cols || cell.y >= rows {
            return Err(LifeError::InvalidCellPosition {
                x: cell.x,
                y: cell.y,
                cols,
                rows,
            }
            .into());
        }
        cells.insert(cell);
    }

    Ok(cells)
}

/// Write the engine's current alive set to a file in the given format.
pub fn save_alive_cells<P: AsRef<Path>>(
    engine: &LifeEngine,
    path: P,
    format: OutputFormat,
) -> Result<()> {
    let content = match format {
        OutputFormat::Text => {
            let mut text = CellFormatter::format_cells(engine.alive_cells());
            text.push('\n');
            text
        }
        OutputFormat::Json => CellFormatter::format_cells_json(engine.alive_cells())?,
    };

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write cells to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example pattern files for seeding a session.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider = "# glider (needs at least a 5x5 grid)\n1,0\n2,1\n0,2\n1,2\n2,2\n";
    std::fs::write(dir.join("glider.txt"), glider).context("Failed to write glider.txt")?;

    let blinker = "# blinker, period-2 oscillator\n0,1\n1,1\n2,1\n";
    std::fs::write(dir.join("blinker.txt"), blinker).context("Failed to write blinker.txt")?;

    let block = "# block, still life\n1,1\n2,1\n1,2\n2,2\n";
    std::fs::write(dir.join("block.txt"), block).context("Failed to write block.txt")?;

    let beacon = "# beacon, period-2 oscillator\n1,1\n2,1\n1,2\n2,2\n3,3\n4,3\n3,4\n4,4\n";
    std::fs::write(dir.join("beacon.txt"), beacon).context("Failed to write beacon.txt")?;

    Ok(())
}
