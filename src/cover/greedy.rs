//! Greedy rectangle decomposition.
//!
//! Cells are visited in row-major order. Each cell still `On` at visit time
//! seeds a rectangle that is grown first along its row, then downwards:
//!
//! - Row extension walks right from the seed. `Off` stops the walk, `On`
//!   moves the right edge, `Claimed` is passed over without moving it.
//! - Column extension walks down one sub-row (`col ..= max_col`) at a time.
//!   A sub-row containing `Off` stops the walk, a sub-row with at least one
//!   `On` moves the bottom edge, and an all-`Claimed` sub-row is passed over.
//!
//! The footprint is then claimed and emitted as a point, line or rectangle.
//! Passing over claimed ground means a later primitive may redraw cells an
//! earlier one already covered; it never draws an `Off` cell and every `On`
//! cell ends up covered.
use super::grid::{CellState, Grid};
use super::primitive::Primitive;

/// Lazy iterator over the primitives covering a grid.
///
/// Owns its working grid; each `next` resumes the row-major scan after the
/// previous seed. Use [`Decompose::grid`] or [`Decompose::into_grid`] to
/// inspect cell states after (or during) the run.
#[derive(Clone, Debug)]
pub struct Decompose {
    grid: Grid,
    cursor: usize,
}

impl Decompose {
    pub fn new(grid: Grid) -> Self {
        Self { grid, cursor: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Rightmost `On` column reachable from `(row, col)` before the first
    /// `Off` cell.
    fn extend_row(&self, row: usize, col: usize) -> usize {
        let mut max_col = col;
        for (ny, &cell) in self.grid.row(row).iter().enumerate().skip(col) {
            match cell {
                CellState::Off => break,
                CellState::On => max_col = ny,
                CellState::Claimed => {}
            }
        }
        max_col
    }

    /// Lowest row whose `col ..= max_col` span holds an `On` cell, scanning
    /// down from `row` until a span containing `Off`.
    fn extend_column(&self, row: usize, col: usize, max_col: usize) -> usize {
        let mut max_row = row;
        for nx in row..self.grid.height() {
            let span = &self.grid.row(nx)[col..=max_col];
            if span.contains(&CellState::Off) {
                break;
            }
            if span.contains(&CellState::On) {
                max_row = nx;
            }
        }
        max_row
    }

    fn cover_from(&mut self, row: usize, col: usize) -> Primitive {
        let max_col = self.extend_row(row, col);
        let max_row = self.extend_column(row, col, max_col);
        self.grid.claim(row, col, max_row, max_col);
        Primitive::from_span(row, col, max_row, max_col)
    }
}

impl Iterator for Decompose {
    type Item = Primitive;

    fn next(&mut self) -> Option<Primitive> {
        let width = self.grid.width();
        let total = width * self.grid.height();
        while self.cursor < total {
            let (row, col) = (self.cursor / width, self.cursor % width);
            self.cursor += 1;
            if self.grid.get(row, col).is_on() {
                return Some(self.cover_from(row, col));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Decompose {}

/// Decompose `grid` into points, lines and rectangles.
pub fn decompose(grid: Grid) -> Decompose {
    Decompose::new(grid)
}

/// One [`Primitive::Point`] per `On` cell, row-major, without grouping.
pub fn pixels(grid: &Grid) -> impl Iterator<Item = Primitive> + '_ {
    grid.on_cells().map(|(row, col)| Primitive::Point { row, col })
}
