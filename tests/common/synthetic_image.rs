use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Generates a black/white checkerboard, `cell` pixels per square, black at the
/// top-left corner.
pub fn checkerboard_rgba(width: u32, height: u32, cell: u32) -> RgbaImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    RgbaImage::from_fn(width, height, |x, y| {
        let black = ((x / cell) + (y / cell)) % 2 == 0;
        let v = if black { 0 } else { 255 };
        Rgba([v, v, v, 255])
    })
}

/// Scales a `#`/`.` picture up by `scale` pixels per cell. Background pixels
/// are fully transparent so they only turn white after compositing.
pub fn picture_rgba(picture: &[&str], scale: u32) -> RgbaImage {
    let height = picture.len() as u32;
    let width = picture[0].len() as u32;
    RgbaImage::from_fn(width * scale, height * scale, |x, y| {
        let c = picture[(y / scale) as usize].as_bytes()[(x / scale) as usize];
        if c == b'#' {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("img2jack-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub fn save_png(img: &RgbaImage, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("write test image");
    path
}
