//! Random single-cell growth around `On` cells, applied in place.
use crate::cover::{CellState, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoiseConfig {
    /// Fixed seed for reproducible output; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NoiseConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Neighbour picked for one noise step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..4u8) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }

    fn step(self, row: usize, col: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Up => row.checked_sub(1).map(|r| (r, col)),
            Direction::Down => (row + 1 < height).then_some((row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => (col + 1 < width).then_some((row, col + 1)),
        }
    }
}

/// Walk `grid` in row-major order and, for each `On` cell, turn on one
/// random 4-neighbour if it lies inside the grid.
pub fn add_noise<R: Rng>(grid: &Grid, rng: &mut R) -> Grid {
    add_noise_with(grid, || Direction::random(rng))
}

/// [`add_noise`] with the neighbour choice supplied by `pick`.
///
/// The pass mutates its working copy in place: a cell turned on to the right
/// of or below the current one is visited later and spreads in turn.
pub fn add_noise_with(grid: &Grid, mut pick: impl FnMut() -> Direction) -> Grid {
    let mut out = grid.clone();
    let (w, h) = (grid.width(), grid.height());
    for row in 0..h {
        for col in 0..w {
            if !out.get(row, col).is_on() {
                continue;
            }
            if let Some((r, c)) = pick().step(row, col, w, h) {
                if out.get(r, c) == CellState::Off {
                    out.set(r, c, CellState::On);
                }
            }
        }
    }
    out
}
