use clap::Parser;
use img2jack::config::{load_config, ConvertConfig};
use img2jack::cover::Grouping;
use img2jack::image::io::write_json_file;
use img2jack::prep::{Binarize, NoiseConfig};
use img2jack::{convert, write_program, Error, Offset, Result};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Convert a black/white image into Jack Screen drawing statements.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image to convert (overrides `input` from --config)
    #[arg(required_unless_present = "config")]
    input: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'y', long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'x', long)]
    height: Option<usize>,

    /// Row offset: an integer to add or a symbol to prefix
    #[arg(short = 'u', long, allow_hyphen_values = true)]
    row_offset: Option<Offset>,

    /// Column offset: an integer to add or a symbol to prefix
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    col_offset: Option<Offset>,

    /// Luminance threshold; negative values select dithering
    #[arg(short = 't', long, allow_negative_numbers = true)]
    threshold: Option<i32>,

    /// Smooth the image before resizing
    #[arg(short = 's', long)]
    smooth: bool,

    /// Group cells into lines and rectangles
    #[arg(short = 'o', long)]
    optimized: bool,

    /// Add random neighbour noise
    #[arg(short = 'n', long)]
    noise: bool,

    /// Seed for --noise
    #[arg(long, requires = "noise")]
    seed: Option<u64>,

    /// Save intermediate images next to the input
    #[arg(short = 'D', long)]
    debug: bool,

    /// Directory for intermediate images (implies -D)
    #[arg(long)]
    debug_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report of the run
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<(ConvertConfig, Option<PathBuf>)> {
        let mut config = match (&self.config, &self.input) {
            (Some(path), _) => load_config(path)?,
            (None, Some(input)) => ConvertConfig::new(input.clone()),
            (None, None) => {
                return Err(Error::Usage(
                    "an input image or --config is required".to_string(),
                ))
            }
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        if let Some(offset) = self.row_offset {
            config.row_offset = offset;
        }
        if let Some(offset) = self.col_offset {
            config.col_offset = offset;
        }
        if let Some(t) = self.threshold {
            config.binarize = Binarize::from_threshold(t);
        }
        config.smooth |= self.smooth;
        if self.optimized {
            config.grouping = Grouping::Rectangles;
        }
        if self.noise {
            config.noise = Some(NoiseConfig { seed: self.seed });
        }
        if let Some(dir) = self.debug_dir {
            config.debug_dir = Some(dir);
        } else if self.debug && config.debug_dir.is_none() {
            let dir = config
                .input
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default();
            config.debug_dir = Some(dir);
        }
        config.validate()?;
        Ok((config, self.report))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, report_path) = Args::parse().into_config()?;
    let conversion = convert(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_program(&mut out, &conversion.primitives, &config.offsets())?;
    out.flush()?;

    if let Some(path) = report_path {
        write_json_file(&path, &conversion)?;
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}
