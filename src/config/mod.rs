pub mod convert;

pub use convert::{load_config, ConvertConfig, DEFAULT_GRID_SIZE};
