use crate::cover::Grouping;
use crate::error::{Error, Result};
use crate::jack::{Offset, Offsets};
use crate::prep::{Binarize, GridBuilder, NoiseConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_GRID_SIZE: usize = 13;

/// Everything one conversion needs, passed explicitly to [`crate::convert`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertConfig {
    pub input: PathBuf,
    #[serde(default = "default_grid_size")]
    pub width: usize,
    #[serde(default = "default_grid_size")]
    pub height: usize,
    #[serde(default)]
    pub row_offset: Offset,
    #[serde(default)]
    pub col_offset: Offset,
    #[serde(default)]
    pub binarize: Binarize,
    #[serde(default)]
    pub smooth: bool,
    #[serde(default)]
    pub grouping: Grouping,
    #[serde(default)]
    pub noise: Option<NoiseConfig>,
    /// Directory receiving intermediate images; nothing is written when unset.
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            row_offset: Offset::default(),
            col_offset: Offset::default(),
            binarize: Binarize::default(),
            smooth: false,
            grouping: Grouping::default(),
            noise: None,
            debug_dir: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn offsets(&self) -> Offsets {
        Offsets::new(self.row_offset.clone(), self.col_offset.clone())
    }

    pub fn grid_builder(&self) -> GridBuilder {
        GridBuilder::new(self.width, self.height)
            .with_smoothing(self.smooth)
            .with_binarize(self.binarize)
            .with_noise(self.noise)
    }

    /// Path for a debug artifact named `<prefix><input file name>.png`.
    pub fn debug_path(&self, prefix: &str) -> Option<PathBuf> {
        let dir = self.debug_dir.as_ref()?;
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Some(dir.join(format!("{prefix}{stem}.png")))
    }
}

pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConvertConfig = serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
