//! Tri-state cell grid consumed (and mutated) by the rectangle cover.
//!
//! Cells start as [`CellState::On`] or [`CellState::Off`] and only ever move to
//! [`CellState::Claimed`]. Accesses outside `[0, height) × [0, width)` panic:
//! the scan derives every index from the grid dimensions, so an out-of-range
//! access is a defect rather than a data condition.
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellState {
    /// Part of the image; may seed or extend a rectangle.
    On,
    /// Background; always stops rectangle growth.
    Off,
    /// Already absorbed into an emitted primitive. Cannot seed, but growth
    /// passes over it.
    Claimed,
}

impl CellState {
    #[inline]
    pub fn from_bool(on: bool) -> Self {
        if on {
            CellState::On
        } else {
            CellState::Off
        }
    }

    #[inline]
    pub fn is_on(self) -> bool {
        self == CellState::On
    }
}

/// Row-major grid of [`CellState`] with fixed dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Grid of `width` columns by `height` rows, every cell `Off`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Off; width * height],
        }
    }

    /// Build a grid by evaluating `on(row, col)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut on: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(CellState::from_bool(on(row, col)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from equally long rows of booleans (`true` = on).
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        Some(Self::from_fn(width, height, |row, col| rows[row].as_ref()[col]))
    }

    /// Parse a picture such as `"#.#\n###"`: `#` is on, `.` is off.
    ///
    /// Blank lines and surrounding whitespace are ignored. Returns `None` on
    /// ragged rows or unknown characters.
    pub fn from_ascii(picture: &str) -> Option<Self> {
        let mut rows = Vec::new();
        for line in picture.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = line
                .chars()
                .map(|c| match c {
                    '#' => Some(true),
                    '.' => Some(false),
                    _ => None,
                })
                .collect::<Option<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[self.idx(row, col)]
    }

    /// Overwrite a cell.
    ///
    /// Panics when asked to move a `Claimed` cell back to `On` or `Off`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        let i = self.idx(row, col);
        assert!(
            self.cells[i] != CellState::Claimed || state == CellState::Claimed,
            "cell ({row}, {col}) is claimed and cannot become {state:?}"
        );
        self.cells[i] = state;
    }

    /// Mark every cell of `[row0, row1] × [col0, col1]` as claimed, whatever
    /// its previous state.
    pub fn claim(&mut self, row0: usize, col0: usize, row1: usize, col1: usize) {
        for row in row0..=row1 {
            let start = self.idx(row, col0);
            let end = self.idx(row, col1);
            self.cells[start..=end].fill(CellState::Claimed);
        }
    }

    /// Slice of one row; empty when the grid has no columns.
    #[inline]
    pub fn row(&self, row: usize) -> &[CellState] {
        assert!(
            row < self.height,
            "row {row} outside {}x{} grid",
            self.height,
            self.width
        );
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Coordinates `(row, col)` of every `On` cell in row-major order.
    pub fn on_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_on())
            .map(move |(i, _)| (i / width, i % width))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.height, self.width)?;
        for row in 0..self.height {
            for &cell in self.row(row) {
                let c = match cell {
                    CellState::On => '#',
                    CellState::Off => '.',
                    CellState::Claimed => 'x',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_picture_round_trips_through_debug() {
        let grid = Grid::from_ascii("#.#\n.##").expect("valid picture");
        assert_eq!((grid.height(), grid.width()), (2, 3));
        assert_eq!(grid.get(0, 1), CellState::Off);
        assert_eq!(grid.get(1, 2), CellState::On);
        assert_eq!(format!("{grid:?}"), "Grid 2x3\n#.#\n.##\n");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Grid::from_rows(&[vec![true, false], vec![true]]).is_none());
        assert!(Grid::from_ascii("##\n#").is_none());
        assert!(Grid::from_ascii("#?").is_none());
    }

    #[test]
    fn claim_overwrites_any_state() {
        let mut grid = Grid::from_ascii("#.\n##").unwrap();
        grid.claim(0, 0, 1, 1);
        assert_eq!(grid.count(CellState::Claimed), 4);
        assert_eq!(grid.count(CellState::Off), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_access_panics() {
        let grid = Grid::new(2, 2);
        grid.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "is claimed")]
    fn claimed_cells_never_revert() {
        let mut grid = Grid::from_ascii("#").unwrap();
        grid.set(0, 0, CellState::Claimed);
        grid.set(0, 0, CellState::On);
    }

    #[test]
    fn zero_width_grid_formats_empty_rows() {
        let grid = Grid::from_rows(&[Vec::<bool>::new(), Vec::new()]).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 0));
        assert!(grid.row(1).is_empty());
        assert_eq!(format!("{grid:?}"), "Grid 2x0\n\n\n");
    }

    #[test]
    #[should_panic(expected = "row 2 outside")]
    fn row_past_the_end_panics() {
        Grid::new(3, 2).row(2);
    }

    #[test]
    fn on_cells_are_row_major() {
        let grid = Grid::from_ascii(".#\n#.").unwrap();
        assert_eq!(grid.on_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    }
}
