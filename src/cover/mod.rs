//! Cover the `On` cells of a binary grid with draw primitives.
//!
//! - [`grid`] – tri-state [`Grid`] with panicking bounds checks.
//! - [`primitive`] – the emitted [`Primitive`] values.
//! - `greedy` – the greedy row-major cover ([`decompose()`]) and the
//!   ungrouped per-pixel fallback ([`pixels`]).

mod greedy;
pub mod grid;
pub mod primitive;

pub use greedy::{decompose, pixels, Decompose};
pub use grid::{CellState, Grid};
pub use primitive::{Primitive, PrimitiveKind};

use serde::{Deserialize, Serialize};

/// How `On` cells are turned into primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    /// One point per `On` cell.
    #[default]
    Pixels,
    /// Greedy grouping into lines and rectangles.
    Rectangles,
}

/// Run the selected cover over `grid` and collect the primitives.
pub fn cover(grid: Grid, grouping: Grouping) -> Vec<Primitive> {
    match grouping {
        Grouping::Pixels => pixels(&grid).collect(),
        Grouping::Rectangles => decompose(grid).collect(),
    }
}
