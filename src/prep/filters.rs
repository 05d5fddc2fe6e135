//! Square convolution kernels used to soften an image before resizing.
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Integer `size × size` kernel, row-major, normalised by `scale`.
#[derive(Clone, Copy, Debug)]
pub struct StaticKernel {
    size: usize,
    taps: &'static [i32],
    scale: i32,
}

impl StaticKernel {
    pub const fn new(size: usize, taps: &'static [i32], scale: i32) -> Self {
        Self { size, taps, scale }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn taps(&self) -> &[i32] {
        self.taps
    }
}

/// 5×5 "smooth more" kernel: strong centre weight, light outer ring.
pub const SMOOTH_MORE: StaticKernel = StaticKernel::new(
    5,
    &[
        1, 1, 1, 1, 1, //
        1, 5, 5, 5, 1, //
        1, 5, 44, 5, 1, //
        1, 5, 5, 5, 1, //
        1, 1, 1, 1, 1, //
    ],
    100,
);

/// Convolve `src` with `kernel`.
///
/// Pixels closer than the kernel radius to any edge are copied unchanged, so
/// images smaller than the kernel come back as-is.
pub fn apply(kernel: &StaticKernel, src: &GrayImageU8) -> GrayImageU8 {
    assert_eq!(
        kernel.taps.len(),
        kernel.size * kernel.size,
        "kernel taps must fill a square"
    );
    let radius = kernel.size / 2;
    let (w, h) = (src.width(), src.height());
    let mut out = src.clone();
    if w < kernel.size || h < kernel.size {
        return out;
    }

    for y in radius..h - radius {
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate().take(w - radius).skip(radius) {
            let mut acc = 0i32;
            for ky in 0..kernel.size {
                let src_row = src.row(y + ky - radius);
                let taps = &kernel.taps[ky * kernel.size..(ky + 1) * kernel.size];
                for (kx, &tap) in taps.iter().enumerate() {
                    acc += tap * src_row[x + kx - radius] as i32;
                }
            }
            let v = (acc + kernel.scale / 2) / kernel.scale;
            *dst_px = v.clamp(0, 255) as u8;
        }
    }
    out
}

/// Apply [`SMOOTH_MORE`].
pub fn smooth_more(src: &GrayImageU8) -> GrayImageU8 {
    apply(&SMOOTH_MORE, src)
}
