//! Luminance to on/off cells.
use crate::cover::Grid;
use crate::image::{GrayImageU8, ImageView};
use serde::{Deserialize, Serialize};

/// Error-diffusion cut: a pixel stays white only when strictly above it.
const DITHER_LEVEL: f32 = 128.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode", content = "threshold")]
pub enum Binarize {
    /// Floyd–Steinberg error diffusion.
    #[default]
    Dither,
    /// Pixels brighter than the threshold are background.
    Fixed(u8),
}

impl Binarize {
    /// Negative values select dithering; values above 255 saturate.
    pub fn from_threshold(threshold: i32) -> Self {
        if threshold < 0 {
            Binarize::Dither
        } else {
            Binarize::Fixed(threshold.min(255) as u8)
        }
    }

    /// Binarize `gray` into a grid whose black pixels are `On`.
    pub fn apply(self, gray: &GrayImageU8) -> Grid {
        match self {
            Binarize::Fixed(t) => Grid::from_fn(gray.width(), gray.height(), |row, col| {
                gray.get(col, row) <= t
            }),
            Binarize::Dither => dither(gray),
        }
    }
}

fn dither(gray: &GrayImageU8) -> Grid {
    let (w, h) = (gray.width(), gray.height());
    let mut err: Vec<f32> = gray.as_slice().iter().map(|&v| v as f32).collect();
    let mut black = vec![false; w * h];
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let old = err[i];
            let new = if old <= DITHER_LEVEL { 0.0 } else { 255.0 };
            black[i] = new == 0.0;
            let e = old - new;
            if x + 1 < w {
                err[i + 1] += e * 7.0 / 16.0;
            }
            if y + 1 < h {
                if x > 0 {
                    err[i + w - 1] += e * 3.0 / 16.0;
                }
                err[i + w] += e * 5.0 / 16.0;
                if x + 1 < w {
                    err[i + w + 1] += e * 1.0 / 16.0;
                }
            }
        }
    }
    Grid::from_fn(w, h, |row, col| black[row * w + col])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::CellState;

    #[test]
    fn threshold_mapping() {
        assert_eq!(Binarize::from_threshold(-1), Binarize::Dither);
        assert_eq!(Binarize::from_threshold(0), Binarize::Fixed(0));
        assert_eq!(Binarize::from_threshold(300), Binarize::Fixed(255));
    }

    #[test]
    fn fixed_threshold_is_inclusive_for_black() {
        let gray = GrayImageU8::new(3, 1, vec![99, 100, 101]);
        let grid = Binarize::Fixed(100).apply(&gray);
        assert_eq!(grid.get(0, 0), CellState::On);
        assert_eq!(grid.get(0, 1), CellState::On);
        assert_eq!(grid.get(0, 2), CellState::Off);
    }

    #[test]
    fn dither_keeps_pure_black_and_white() {
        let gray = GrayImageU8::new(2, 2, vec![0, 255, 255, 0]);
        let grid = Binarize::Dither.apply(&gray);
        assert_eq!(grid, Grid::from_ascii("#.\n.#").unwrap());
    }

    #[test]
    fn dither_level_itself_is_black() {
        let grid = Binarize::Dither.apply(&GrayImageU8::new(2, 1, vec![128, 129]));
        assert_eq!(grid, Grid::from_ascii("#.").unwrap());
    }

    #[test]
    fn dither_mid_gray_is_roughly_half_on() {
        let gray = GrayImageU8::filled(16, 16, 128);
        let on = Binarize::Dither.apply(&gray).count(CellState::On);
        assert!((96..=160).contains(&on), "on={on}");
    }

    #[test]
    fn binarize_serializes_with_mode_tag() {
        let json = serde_json::to_string(&Binarize::Fixed(90)).unwrap();
        assert_eq!(json, r#"{"mode":"fixed","threshold":90}"#);
        let back: Binarize = serde_json::from_str(r#"{"mode":"dither"}"#).unwrap();
        assert_eq!(back, Binarize::Dither);
    }
}
