//! Serializable summary of one conversion.
use crate::cover::{Primitive, PrimitiveKind};
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for a run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Append another breakdown's stages (its total is not added).
    pub fn extend(&mut self, other: TimingBreakdown) {
        self.stages.extend(other.stages);
    }
}

/// Number of emitted primitives per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveCounts {
    pub points: usize,
    pub lines: usize,
    pub rectangles: usize,
}

impl PrimitiveCounts {
    pub fn tally<'a>(primitives: impl IntoIterator<Item = &'a Primitive>) -> Self {
        let mut counts = Self::default();
        for p in primitives {
            match p.kind() {
                PrimitiveKind::Point => counts.points += 1,
                PrimitiveKind::Line => counts.lines += 1,
                PrimitiveKind::Rectangle => counts.rectangles += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.points + self.lines + self.rectangles
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub width: usize,
    pub height: usize,
    /// `On` cells in the grid handed to the cover.
    pub on_cells: usize,
    pub counts: PrimitiveCounts,
    pub timings: TimingBreakdown,
}

impl ConversionReport {
    /// Statements saved relative to drawing every cell as a pixel.
    pub fn statements_saved(&self) -> usize {
        self.on_cells.saturating_sub(self.counts.total())
    }
}
