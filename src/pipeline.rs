//! End-to-end conversion: image file to ordered primitives.
use crate::config::ConvertConfig;
use crate::cover::{self, CellState, Grid, Grouping, Primitive};
use crate::error::Result;
use crate::image::io::{load_composited_gray, save_cell_grid, save_gray_u8};
use crate::image::ImageView;
use crate::prep::elapsed_ms;
use crate::report::{ConversionReport, PrimitiveCounts, TimingBreakdown};
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

/// Primitives in emission order plus a summary of the run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub primitives: Vec<Primitive>,
    pub report: ConversionReport,
}

/// Load, preprocess and cover the image described by `config`.
pub fn convert(config: &ConvertConfig) -> Result<Conversion> {
    config.validate()?;
    let total_start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let load_start = Instant::now();
    let gray = load_composited_gray(&config.input)?;
    timings.push("load", elapsed_ms(load_start));
    debug!(
        "loaded {} ({}x{})",
        config.input.display(),
        gray.width(),
        gray.height()
    );

    let built = config.grid_builder().build(&gray)?;
    timings.extend(built.timings);

    if let Some(path) = config.debug_path("_resized_") {
        save_gray_u8(&built.resized, &path)?;
    }
    if let Some(path) = config.debug_path("_binarized_") {
        save_cell_grid(&built.binarized, &path)?;
    }
    if config.noise.is_some() {
        if let Some(path) = config.debug_path("_noised_") {
            save_cell_grid(&built.grid, &path)?;
        }
    }

    let mut conversion = convert_grid(built.grid, config.grouping);
    timings.extend(std::mem::take(&mut conversion.report.timings));
    timings.total_ms = elapsed_ms(total_start);
    conversion.report.timings = timings;
    Ok(conversion)
}

/// Cover an in-memory grid without touching the filesystem.
pub fn convert_grid(grid: Grid, grouping: Grouping) -> Conversion {
    let (width, height) = (grid.width(), grid.height());
    let on_cells = grid.count(CellState::On);

    let start = Instant::now();
    let primitives = cover::cover(grid, grouping);
    let cover_ms = elapsed_ms(start);

    let counts = PrimitiveCounts::tally(&primitives);
    info!(
        "covered {on_cells} cells of a {width}x{height} grid with {} statements \
         (points={} lines={} rectangles={}) grouping={grouping:?}",
        counts.total(),
        counts.points,
        counts.lines,
        counts.rectangles
    );

    let mut timings = TimingBreakdown {
        total_ms: cover_ms,
        stages: Vec::new(),
    };
    timings.push("cover", cover_ms);

    Conversion {
        primitives,
        report: ConversionReport {
            width,
            height,
            on_cells,
            counts,
            timings,
        },
    }
}
