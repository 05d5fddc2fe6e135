//! I/O helpers for grayscale images, cell grids and JSON.
//!
//! - `load_composited_gray`: read a PNG/JPEG/etc., flatten alpha onto white
//!   and reduce to an owned 8-bit luma buffer.
//! - `save_gray_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `save_cell_grid`: write a cell grid as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, ImageViewMut};
use crate::cover::Grid;
use crate::error::{Error, Result};
use image::{GrayImage, Luma, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer, row-major (0 = black, 255 = white).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "buffer size mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer of the given size filled with `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(width, height, vec![value; width * height])
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn from_gray_image(img: GrayImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self::new(width, height, img.into_raw())
    }

    pub fn to_gray_image(&self) -> Result<GrayImage> {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.data.clone()).ok_or(
            Error::ImageBuffer {
                width: self.width,
                height: self.height,
            },
        )
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}

/// ITU-R 601-2 luma in 16.16 fixed point, rounded.
#[inline]
pub fn luma601(r: u8, g: u8, b: u8) -> u8 {
    let l = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Alpha-composite onto opaque white and reduce to luma.
pub fn composite_over_white(rgba: &RgbaImage) -> GrayImageU8 {
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    let mut data = Vec::with_capacity(width * height);
    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        let a = a as u32;
        let blend = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
        data.push(luma601(blend(r), blend(g), blend(b)));
    }
    GrayImageU8::new(width, height, data)
}

/// Load an image from disk, drop its alpha onto white and convert to gray.
pub fn load_composited_gray(path: &Path) -> Result<GrayImageU8> {
    let img = image::open(path).map_err(|source| Error::ImageOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(composite_over_white(&img.into_rgba8()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_gray_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    buffer.to_gray_image()?.save(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a cell grid: `On` cells black, every other cell white.
pub fn save_cell_grid(grid: &Grid, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for row in 0..grid.height() {
        for (col, cell) in grid.row(row).iter().enumerate() {
            let v = if cell.is_on() { 0 } else { 255 };
            out.put_pixel(col as u32, row as u32, Luma([v]));
        }
    }
    out.save(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
