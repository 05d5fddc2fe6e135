//! Property-based invariant tests for the rectangle cover.
//!
//! Verifies:
//! 1. Coverage: the union of emitted cells equals the `On` set; no `Off` cell
//!    is ever drawn.
//! 2. Determinism: the same grid yields the same sequence.
//! 3. Pixel mode: one point per `On` cell, row-major.
//! 4. Shape classification of every emitted primitive.
//! 5. Seeds appear in row-major order and each seed was `On` when emitted.
//! 6. After a full run no cell is left `On`.

use img2jack::cover::{decompose, pixels, CellState, Grid, Primitive};
use proptest::prelude::*;
use std::collections::HashSet;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=12)
        .prop_flat_map(|(w, h)| (Just(w), Just(h), prop::collection::vec(any::<bool>(), w * h)))
        .prop_map(|(w, h, bits)| Grid::from_fn(w, h, |r, c| bits[r * w + c]))
}

fn on_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.on_cells().collect()
}

fn seed(p: &Primitive) -> (usize, usize) {
    let (row, col, _, _) = p.span();
    (row, col)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Coverage
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cover_matches_on_set(grid in arb_grid()) {
        let expected = on_set(&grid);
        let prims: Vec<Primitive> = decompose(grid.clone()).collect();
        let mut drawn = HashSet::new();
        for p in &prims {
            for (r, c) in p.cells() {
                prop_assert!(r < grid.height() && c < grid.width());
                prop_assert_ne!(grid.get(r, c), CellState::Off, "{:?} draws an off cell", p);
                drawn.insert((r, c));
            }
        }
        prop_assert_eq!(drawn, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cover_is_deterministic(grid in arb_grid()) {
        let a: Vec<Primitive> = decompose(grid.clone()).collect();
        let b: Vec<Primitive> = decompose(grid).collect();
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Pixel mode
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pixel_mode_is_one_point_per_on_cell(grid in arb_grid()) {
        let points: Vec<Primitive> = pixels(&grid).collect();
        let expected: Vec<Primitive> = grid
            .on_cells()
            .map(|(row, col)| Primitive::Point { row, col })
            .collect();
        prop_assert_eq!(&points, &expected);
        let drawn: HashSet<_> = points.iter().flat_map(|p| p.cells()).collect();
        prop_assert_eq!(drawn, on_set(&grid));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Shape classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn primitives_are_well_formed(grid in arb_grid()) {
        for p in decompose(grid) {
            match p {
                Primitive::Point { .. } => prop_assert_eq!(p.area(), 1),
                Primitive::Line { from_col, from_row, to_col, to_row } => {
                    prop_assert!((from_row == to_row) != (from_col == to_col), "{:?}", p);
                    prop_assert!(from_row <= to_row && from_col <= to_col);
                }
                Primitive::Rectangle { from_col, from_row, to_col, to_row } => {
                    prop_assert!(to_row > from_row && to_col > from_col, "{:?}", p);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Row-major seeds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seeds_follow_row_major_order(grid in arb_grid()) {
        let original = grid.clone();
        let seeds: Vec<(usize, usize)> = decompose(grid).map(|p| seed(&p)).collect();
        for pair in seeds.windows(2) {
            prop_assert!(pair[0] < pair[1], "seeds out of order: {:?}", pair);
        }
        for &(r, c) in &seeds {
            prop_assert_eq!(original.get(r, c), CellState::On);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Exhaustion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn no_cell_left_on(grid in arb_grid()) {
        let off_before = grid.count(CellState::Off);
        let mut run = decompose(grid);
        run.by_ref().for_each(drop);
        let after = run.into_grid();
        prop_assert_eq!(after.count(CellState::On), 0);
        prop_assert_eq!(after.count(CellState::Off), off_before);
    }
}

#[test]
fn all_off_grids_are_empty() {
    for (w, h) in [(1, 1), (5, 3), (13, 13)] {
        assert_eq!(decompose(Grid::new(w, h)).count(), 0);
    }
}

#[test]
fn all_on_grid_is_one_primitive() {
    let prims: Vec<_> = decompose(Grid::from_fn(7, 4, |_, _| true)).collect();
    assert_eq!(
        prims,
        vec![Primitive::Rectangle {
            from_col: 0,
            from_row: 0,
            to_col: 6,
            to_row: 3
        }]
    );
}
