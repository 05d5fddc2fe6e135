use crate::error::{Error, Result};
use crate::image::{GrayImageU8, ImageView};
use image::imageops::{self, FilterType};

/// Resample to exactly `width × height` with a Lanczos3 filter.
pub fn resize_gray(src: &GrayImageU8, width: usize, height: usize) -> Result<GrayImageU8> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    if src.width() == width && src.height() == height {
        return Ok(src.clone());
    }
    let img = src.to_gray_image()?;
    let out = imageops::resize(&img, width as u32, height as u32, FilterType::Lanczos3);
    Ok(GrayImageU8::from_gray_image(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_hits_target_dimensions() {
        let src = GrayImageU8::filled(40, 20, 0);
        let out = resize_gray(&src, 13, 7).unwrap();
        assert_eq!((out.width(), out.height()), (13, 7));
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = GrayImageU8::filled(4, 4, 255);
        assert!(matches!(
            resize_gray(&src, 0, 4),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
    }
}
