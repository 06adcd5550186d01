//! Sparse Game of Life engine
//!
//! The engine tracks two sets of cells instead of the full grid: the cells
//! that are alive, and the "potential" cells that have to be re-evaluated on
//! the next generation (the neighbourhood of the alive set). Everything
//! outside the potential set is dead with all-dead neighbours and cannot
//! change, so the cost of a generation scales with the size of the active
//! region rather than with cols * rows.

use super::Cell;
use crate::error::LifeError;
use rand::Rng;
use std::collections::hash_set;
use std::collections::HashSet;

/// Largest accepted grid dimension, one below `u32::MAX` so that signed
/// neighbour offsets can never overflow a coordinate.
pub const MAX_GRID: u32 = u32::MAX - 1;

pub(crate) fn validate_grid_size(cols: u32, rows: u32) -> Result<(), LifeError> {
    if cols < 1 || rows < 1 || cols > MAX_GRID || rows > MAX_GRID {
        return Err(LifeError::InvalidGridSize { cols, rows });
    }
    Ok(())
}

/// Game of Life simulation over a bounded, non-toroidal grid using the
/// standard B3/S23 rule.
#[derive(Debug)]
pub struct LifeEngine {
    cols: u32,
    rows: u32,
    alive: HashSet<Cell>,
    potential: HashSet<Cell>,
}

impl LifeEngine {
    /// Create an empty engine for a `cols` x `rows` grid.
    pub fn create(cols: u32, rows: u32) -> Result<Self, LifeError> {
        validate_grid_size(cols, rows)?;
        Ok(Self {
            cols,
            rows,
            alive: HashSet::new(),
            potential: HashSet::new(),
        })
    }

    /// Create an engine and activate a batch of seed cells in one go.
    pub fn with_initial_cells<I>(cols: u32, rows: u32, cells: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut engine = Self::create(cols, rows)?;
        engine.activate_cells(cells);
        Ok(engine)
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Mark (x, y) alive and flag its in-bounds neighbours for evaluation on
    /// the next generation. The cell itself is not added to the potential
    /// set; it only gets there through a neighbour's activation.
    ///
    /// Coordinates must already be validated against the grid. The console
    /// boundary rejects out-of-range cells before they reach the engine.
    pub fn activate_cell(&mut self, x: u32, y: u32) {
        let cell = Cell::new(x, y);
        self.alive.insert(cell);

        let mut neighbours = Vec::with_capacity(8);
        self.neighbours(cell, &mut neighbours);
        self.potential.extend(neighbours);
    }

    /// Batch activation of seed cells.
    pub fn activate_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in cells {
            self.activate_cell(cell.x, cell.y);
        }
    }

    /// Advance the simulation one generation.
    ///
    /// Only members of the current potential set are evaluated. Reads go
    /// against the current generation's sets and writes against fresh ones,
    /// which replace the current pair at the end of the pass, so evaluation
    /// order cannot affect the result.
    ///
    /// A dying cell re-seeds itself and its neighbours into the next
    /// potential set (the emptied region stays monitored one more step); a
    /// newborn cell does the same. A dead cell that stays dead is dropped
    /// unless some other cell's expansion re-adds it. Skipping either
    /// re-seed would stop the engine from seeing births more than one step
    /// away from the current frontier.
    pub fn advance(&mut self) {
        let mut alive_next = HashSet::with_capacity(self.alive.len());
        let mut potential_next = HashSet::with_capacity(self.potential.len());
        let mut neighbours = Vec::with_capacity(8);

        for &cell in &self.potential {
            let is_alive = self.alive.contains(&cell);
            self.neighbours(cell, &mut neighbours);
            let alive_neighbours = neighbours
                .iter()
                .filter(|n| self.alive.contains(n))
                .count();

            if is_alive {
                if alive_neighbours == 2 || alive_neighbours == 3 {
                    alive_next.insert(cell);
                } else {
                    potential_next.insert(cell);
                    potential_next.extend(neighbours.iter().copied());
                }
            } else if alive_neighbours == 3 {
                alive_next.insert(cell);
                potential_next.insert(cell);
                potential_next.extend(neighbours.iter().copied());
            }
        }

        self.alive = alive_next;
        self.potential = potential_next;
    }

    pub fn is_cell_alive(&self, x: u32, y: u32) -> bool {
        self.alive.contains(&Cell::new(x, y))
    }

    /// Iterate the current alive set. Order is unspecified.
    pub fn alive_cells(&self) -> hash_set::Iter<'_, Cell> {
        self.alive.iter()
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Activate a random number of cells inside the square of the given size
    /// anchored at `top_left`, clamped to the grid. Degenerate regions (an
    /// out-of-bounds anchor, or a clamped square thinner than 2 cells) are
    /// ignored.
    pub fn randomize_square(&mut self, top_left: Cell, size: u32) {
        if size < 2 || top_left.x >= self.cols || top_left.y >= self.rows {
            return;
        }
        let right = top_left.x.saturating_add(size).min(self.cols) - 1;
        let bottom = top_left.y.saturating_add(size).min(self.rows) - 1;
        if top_left.x >= right || top_left.y >= bottom {
            return;
        }

        let area = (right - top_left.x) as usize * (bottom - top_left.y) as usize;
        let mut rng = rand::rng();
        let amount = rng.random_range(0..area);
        for _ in 0..amount {
            let x = rng.random_range(top_left.x..=right);
            let y = rng.random_range(top_left.y..=bottom);
            self.activate_cell(x, y);
        }
    }

    /// Collect the in-bounds 8-neighbourhood of `cell` into `buffer`.
    ///
    /// Offsets are signed, and the results are filtered to
    /// 0 <= nx < cols and 0 <= ny < rows. Cells on the grid edge simply
    /// have fewer than 8 neighbours; there is no wraparound.
    fn neighbours(&self, cell: Cell, buffer: &mut Vec<Cell>) {
        buffer.clear();
        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = match cell.x.checked_add_signed(dx) {
                    Some(nx) if nx < self.cols => nx,
                    _ => continue,
                };
                let ny = match cell.y.checked_add_signed(dy) {
                    Some(ny) if ny < self.rows => ny,
                    _ => continue,
                };
                buffer.push(Cell::new(nx, ny));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(u32, u32)]) -> HashSet<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn alive_set(engine: &LifeEngine) -> HashSet<Cell> {
        engine.alive_cells().copied().collect()
    }

    #[test]
    fn test_create_empty_engine() {
        let engine = LifeEngine::create(5, 8).unwrap();
        assert_eq!(engine.cols(), 5);
        assert_eq!(engine.rows(), 8);
        assert_eq!(engine.alive_count(), 0);
    }

    #[test]
    fn test_create_rejects_invalid_sizes() {
        for (cols, rows) in [(0, 5), (5, 0), (0, 0), (u32::MAX, 5), (5, u32::MAX)] {
            let result = LifeEngine::create(cols, rows);
            assert!(
                matches!(result, Err(LifeError::InvalidGridSize { .. })),
                "expected InvalidGridSize for {}x{}",
                cols,
                rows
            );
        }
    }

    #[test]
    fn test_create_accepts_max_grid() {
        assert!(LifeEngine::create(MAX_GRID, 1).is_ok());
        assert!(LifeEngine::create(1, MAX_GRID).is_ok());
    }

    #[test]
    fn test_activate_single_cell() {
        let mut engine = LifeEngine::create(10, 10).unwrap();
        engine.activate_cell(3, 4);

        assert_eq!(engine.alive_count(), 1);
        assert!(engine.is_cell_alive(3, 4));
        assert_eq!(alive_set(&engine), cells(&[(3, 4)]));
    }

    #[test]
    fn test_activate_flags_neighbours_but_not_self() {
        let mut engine = LifeEngine::create(10, 10).unwrap();
        engine.activate_cell(3, 3);

        let expected = cells(&[
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 2),
            (3, 4),
            (4, 2),
            (4, 3),
            (4, 4),
        ]);
        assert_eq!(engine.potential, expected);
    }

    #[test]
    fn test_activation_is_idempotent() {
        let mut engine = LifeEngine::create(10, 10).unwrap();
        engine.activate_cell(3, 4);
        engine.activate_cell(3, 4);
        assert_eq!(engine.alive_count(), 1);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = LifeEngine::create(10, 10).unwrap();
        engine.activate_cell(5, 5);
        engine.advance();
        assert_eq!(engine.alive_count(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = cells(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut engine = LifeEngine::with_initial_cells(6, 6, block.clone()).unwrap();

        engine.advance();
        assert_eq!(alive_set(&engine), block);
    }

    #[test]
    fn test_quiescent_pattern_vanishes_once_frontier_drains() {
        // Survivors go into the next alive set but not the next potential
        // set. A pattern with no deaths and no births therefore drains the
        // frontier, and with nothing left to evaluate the alive set empties
        // on the following advance.
        let block = cells(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut engine = LifeEngine::with_initial_cells(6, 6, block.clone()).unwrap();

        engine.advance();
        assert_eq!(alive_set(&engine), block);
        assert!(engine.potential.is_empty());

        engine.advance();
        assert_eq!(engine.alive_count(), 0);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = cells(&[(0, 1), (1, 1), (2, 1)]);
        let vertical = cells(&[(1, 0), (1, 1), (1, 2)]);
        let mut engine = LifeEngine::with_initial_cells(5, 5, horizontal.clone()).unwrap();

        engine.advance();
        assert_eq!(alive_set(&engine), vertical);

        engine.advance();
        assert_eq!(alive_set(&engine), horizontal);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let glider = [(1u32, 0u32), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut engine =
            LifeEngine::with_initial_cells(10, 10, glider.iter().map(|&(x, y)| Cell::new(x, y)))
                .unwrap();

        for _ in 0..4 {
            engine.advance();
        }

        let translated = glider.iter().map(|&(x, y)| (x + 1, y + 1));
        assert_eq!(alive_set(&engine), cells(&translated.collect::<Vec<_>>()));
    }

    #[test]
    fn test_corner_cell_has_three_neighbours() {
        let engine = LifeEngine::create(4, 4).unwrap();
        let mut buffer = Vec::new();
        engine.neighbours(Cell::new(0, 0), &mut buffer);

        let got: HashSet<Cell> = buffer.into_iter().collect();
        assert_eq!(got, cells(&[(1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_neighbours_never_leave_the_grid() {
        let engine = LifeEngine::create(3, 3).unwrap();
        let mut buffer = Vec::new();

        for x in 0..3 {
            for y in 0..3 {
                engine.neighbours(Cell::new(x, y), &mut buffer);
                assert!(buffer.iter().all(|c| c.x < 3 && c.y < 3));
            }
        }
    }

    #[test]
    fn test_no_wraparound_on_one_by_one_grid() {
        let mut engine = LifeEngine::create(1, 1).unwrap();
        engine.activate_cell(0, 0);

        assert!(engine.potential.is_empty());
        engine.advance();
        assert_eq!(engine.alive_count(), 0);
    }

    #[test]
    fn test_block_in_corner_survives() {
        let block = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let mut engine = LifeEngine::with_initial_cells(3, 3, block.clone()).unwrap();

        engine.advance();
        assert_eq!(alive_set(&engine), block);
    }

    #[test]
    fn test_birth_reaches_beyond_the_initial_frontier() {
        // A blinker's newly born cells must re-seed their own neighbourhood,
        // otherwise the second flip would go unnoticed.
        let mut engine =
            LifeEngine::with_initial_cells(7, 7, cells(&[(2, 3), (3, 3), (4, 3)])).unwrap();

        for _ in 0..6 {
            engine.advance();
        }
        assert_eq!(alive_set(&engine), cells(&[(2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut engine = LifeEngine::create(10, 10).unwrap();
        engine.activate_cells(cells(&[(1, 1), (2, 2), (3, 3)]));

        let first = alive_set(&engine);
        let count = engine.alive_count();
        assert_eq!(alive_set(&engine), first);
        assert_eq!(engine.alive_count(), count);
    }

    #[test]
    fn test_alive_cells_stay_within_bounds() {
        let mut engine =
            LifeEngine::with_initial_cells(4, 4, cells(&[(2, 2), (3, 2), (2, 3), (3, 3), (3, 1)]))
                .unwrap();

        for _ in 0..8 {
            engine.advance();
            assert!(engine.alive_cells().all(|c| c.x < 4 && c.y < 4));
        }
    }

    #[test]
    fn test_randomize_square_stays_within_region() {
        let mut engine = LifeEngine::create(20, 20).unwrap();
        engine.randomize_square(Cell::new(5, 5), 4);

        assert!(engine
            .alive_cells()
            .all(|c| (5..9).contains(&c.x) && (5..9).contains(&c.y)));
    }

    #[test]
    fn test_randomize_square_ignores_degenerate_regions() {
        let mut engine = LifeEngine::create(10, 10).unwrap();
        engine.randomize_square(Cell::new(10, 10), 4);
        engine.randomize_square(Cell::new(9, 9), 4);
        engine.randomize_square(Cell::new(0, 0), 1);

        assert_eq!(engine.alive_count(), 0);
    }
}
