use image::RgbaImage;
use rayon::prelude::*;

/// Per-pixel whiteness classification for the corner flood fill.
pub(super) struct WhiteMask {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) white: Vec<bool>,
}

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

#[inline]
fn is_white(pixel: &[u8], threshold: u8) -> bool {
    // Alpha does not participate in the whiteness test.
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

/// Build a compact per-pixel whiteness mask.
///
/// A pixel is white when R, G and B each strictly exceed `threshold`.
pub(super) fn build_white_mask(img: &RgbaImage, threshold: u8) -> WhiteMask {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    let mut white = vec![false; len];
    let raw = img.as_raw();

    if len >= PARALLEL_PIXEL_THRESHOLD {
        white
            .par_iter_mut()
            .zip(raw.par_chunks_exact(4))
            .for_each(|(out, pixel)| *out = is_white(pixel, threshold));
    } else {
        for (out, pixel) in white.iter_mut().zip(raw.chunks_exact(4)) {
            *out = is_white(pixel, threshold);
        }
    }

    WhiteMask {
        width,
        height,
        white,
    }
}
