//! Grid builder: grayscale image to a binary cell grid.
//!
//! Stages, in order:
//! - optional [`filters::smooth_more`] softening at source resolution;
//! - Lanczos3 [`resize::resize_gray`] to the target grid size;
//! - [`Binarize`] by error diffusion or a fixed threshold;
//! - optional [`noise::add_noise`] growth of the `On` set.
//!
//! Every stage is a pure function of its input; [`GridBuilder::build`] keeps
//! the intermediate results so callers can dump them for inspection.

pub mod binarize;
pub mod filters;
pub mod noise;
pub mod resize;

pub use binarize::Binarize;
pub use noise::NoiseConfig;

use crate::cover::{CellState, Grid};
use crate::error::{Error, Result};
use crate::image::GrayImageU8;
use crate::report::TimingBreakdown;
use log::{debug, warn};
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct GridBuilder {
    pub width: usize,
    pub height: usize,
    pub smooth: bool,
    pub binarize: Binarize,
    pub noise: Option<NoiseConfig>,
}

/// Result of [`GridBuilder::build`] with the intermediate stages.
#[derive(Clone, Debug)]
pub struct BuiltGrid {
    /// Gray image after smoothing and resizing.
    pub resized: GrayImageU8,
    /// Grid straight out of binarization.
    pub binarized: Grid,
    /// Grid after noise injection; equal to `binarized` without noise.
    pub grid: Grid,
    pub timings: TimingBreakdown,
}

impl GridBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            smooth: false,
            binarize: Binarize::default(),
            noise: None,
        }
    }

    pub fn with_smoothing(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_binarize(mut self, binarize: Binarize) -> Self {
        self.binarize = binarize;
        self
    }

    pub fn with_noise(mut self, noise: Option<NoiseConfig>) -> Self {
        self.noise = noise;
        self
    }

    pub fn build(&self, gray: &GrayImageU8) -> Result<BuiltGrid> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let resize_start = Instant::now();
        let resized = if self.smooth {
            let smoothed = filters::smooth_more(gray);
            resize::resize_gray(&smoothed, self.width, self.height)?
        } else {
            resize::resize_gray(gray, self.width, self.height)?
        };
        timings.push("resize", elapsed_ms(resize_start));

        let binarize_start = Instant::now();
        let binarized = self.binarize.apply(&resized);
        timings.push("binarize", elapsed_ms(binarize_start));

        let grid = match &self.noise {
            Some(noise) => {
                let noise_start = Instant::now();
                let noised = noise::add_noise(&binarized, &mut noise.rng());
                timings.push("noise", elapsed_ms(noise_start));
                noised
            }
            None => binarized.clone(),
        };

        timings.total_ms = elapsed_ms(total_start);
        let on = grid.count(CellState::On);
        debug!(
            "grid built: {}x{} on={} smooth={} binarize={:?} elapsed_ms={:.3}",
            self.width, self.height, on, self.smooth, self.binarize, timings.total_ms
        );
        if on == 0 {
            warn!("binarized grid has no dark cells; output will be empty");
        }

        Ok(BuiltGrid {
            resized,
            binarized,
            grid,
            timings,
        })
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
