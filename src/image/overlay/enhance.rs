//! Contrast enhancement for the rotated foreground.

use image::RgbaImage;

/// Scale each pixel's distance from the per-channel mean by `factor`,
/// clamping to the valid range. Alpha is untouched; 1.0 is the identity,
/// larger values push channels away from the mean.
pub(super) fn enhance_contrast(img: &RgbaImage, factor: f32) -> RgbaImage {
    let mut output = img.clone();
    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return output;
    }

    let mut sums = [0_u64; 3];
    for pixel in img.pixels() {
        for (sum, value) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(*value);
        }
    }
    let means = sums.map(|sum| sum as f32 / count as f32);

    for pixel in output.pixels_mut() {
        for channel in 0..3 {
            let value = f32::from(pixel[channel]);
            let enhanced = means[channel] + (value - means[channel]) * factor;
            pixel[channel] = enhanced.round().clamp(0.0, 255.0) as u8;
        }
    }
    output
}
