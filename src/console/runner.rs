//! Interactive console boundary for the sparse engine
//!
//! Reads grid dimensions and seed cells from its input, then runs a command
//! loop where `N` advances the simulation one generation and any other line
//! ends the session. All validation happens here; the engine assumes the
//! coordinates it receives are in bounds.

use crate::engine::{Cell, LifeEngine};
use crate::error::LifeError;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Parse the `cols,rows` grid-size line.
pub fn parse_grid_size(line: &str) -> Result<(u32, u32), LifeError> {
    let invalid = || LifeError::InvalidGridFormat {
        input: line.trim().to_string(),
    };

    let mut parts = line.trim().split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(cols), Some(rows), None) => {
            let cols = cols.trim().parse().map_err(|_| invalid())?;
            let rows = rows.trim().parse().map_err(|_| invalid())?;
            Ok((cols, rows))
        }
        _ => Err(invalid()),
    }
}

/// Runs an interactive Game of Life session over arbitrary input/output
/// streams. Generic so tests can drive it with in-memory buffers.
pub struct ConsoleRunner<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleRunner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run a full session: read the grid size and seed cells, then enter the
    /// command loop. Returns the engine in its final state so the caller can
    /// dump the alive set.
    pub fn run(&mut self) -> Result<LifeEngine> {
        writeln!(self.output, "Running Game of Life in console...")?;
        writeln!(
            self.output,
            "Enter the size of the grid (columns and rows) using the following format: cols,rows"
        )?;
        let (cols, rows) = self.read_grid_size()?;
        let mut engine = LifeEngine::create(cols, rows)?;

        writeln!(
            self.output,
            "Enter the initial cell configuration using the following format:"
        )?;
        writeln!(
            self.output,
            "- Each line should contain one cell position as x,y coordinates"
        )?;
        writeln!(
            self.output,
            "- Type 'END' on a new line when you have finished entering all cells"
        )?;
        let initial_cells = self.read_initial_cells(cols, rows)?;
        engine.activate_cells(initial_cells);

        writeln!(
            self.output,
            "Initial alive cells: {}",
            engine.alive_count()
        )?;
        writeln!(
            self.output,
            "Press 'N' to run the next generation, anything else to quit"
        )?;
        self.command_loop(&mut engine)?;

        writeln!(self.output, "Game of Life finished")?;
        Ok(engine)
    }

    /// The generation loop: `N` (case-insensitive) advances one generation
    /// and reports the alive count with the elapsed wall-clock time; any
    /// other line, or end of input, ends the run.
    pub fn command_loop(&mut self, engine: &mut LifeEngine) -> Result<()> {
        loop {
            let Some(line) = self.read_line()? else {
                break;
            };
            if !line.trim().eq_ignore_ascii_case("n") {
                break;
            }

            let started = Instant::now();
            engine.advance();
            writeln!(
                self.output,
                "Next generation is ready. Alive cells: {}. Elapsed time: {} ms",
                engine.alive_count(),
                started.elapsed().as_millis()
            )?;
        }
        Ok(())
    }

    fn read_grid_size(&mut self) -> Result<(u32, u32)> {
        let line = self
            .read_line()?
            .context("input ended before the grid size was entered")?;
        Ok(parse_grid_size(&line)?)
    }

    fn read_initial_cells(&mut self, cols: u32, rows: u32) -> Result<HashSet<Cell>> {
        let mut cells = HashSet::new();
        loop {
            let line = self
                .read_line()?
                .context("input ended before the END sentinel")?;
            let line = line.trim();
            if line.is_empty() {
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

    /// Read one line, or `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
