#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod cover;
pub mod error;
pub mod jack;
pub mod pipeline;
pub mod report;

// Building blocks of the grid builder; public for tools and tests.
pub mod image;
pub mod prep;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{load_config, ConvertConfig};
pub use crate::cover::{cover, decompose, pixels, CellState, Grid, Grouping, Primitive};
pub use crate::error::{Error, Result};
pub use crate::jack::{render_statement, write_program, Offset, Offsets};
pub use crate::pipeline::{convert, convert_grid, Conversion};
pub use crate::report::ConversionReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use img2jack::prelude::*;
///
/// let grid = Grid::from_ascii("###\n###").unwrap();
/// let prims: Vec<Primitive> = decompose(grid).collect();
/// assert_eq!(
///     render_statement(&prims[0], &Offsets::default()),
///     "do Screen.drawRectangle(0, 0, 2, 1);"
/// );
/// ```
pub mod prelude {
    pub use crate::cover::{decompose, pixels, Grid, Grouping, Primitive};
    pub use crate::jack::{render_statement, Offset, Offsets};
    pub use crate::{convert, ConvertConfig};
}
