//! Arbitrary-angle rotation with canvas expansion.

use image::{Rgba, RgbaImage};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};

/// Rotate about the image center, expanding the canvas to the rotated
/// bounding box. Positive angles rotate counter-clockwise; the corners
/// introduced by the expansion are fully transparent.
pub(super) fn rotate_expand(img: &RgbaImage, degrees: f32) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 || degrees == 0.0 {
        return img.clone();
    }

    let theta = degrees.to_radians();
    let (new_width, new_height) = rotated_bounds(width, height, theta);

    // Screen coordinates grow downward, so the angle is negated to keep
    // positive = counter-clockwise.
    let forward = Projection::translate(new_width as f32 / 2.0, new_height as f32 / 2.0)
        * Projection::rotate(-theta)
        * Projection::translate(-(width as f32) / 2.0, -(height as f32) / 2.0);

    let mut output = RgbaImage::new(new_width, new_height);
    warp_into(
        img,
        &forward,
        Interpolation::Bilinear,
        Rgba([0, 0, 0, 0]),
        &mut output,
    );
    output
}

/// Axis-aligned bounding box of an image rotated by `theta` radians.
pub(super) fn rotated_bounds(width: u32, height: u32, theta: f32) -> (u32, u32) {
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let w = width as f32;
    let h = height as f32;
    (
        (w * cos + h * sin).round().max(1.0) as u32,
        (w * sin + h * cos).round().max(1.0) as u32,
    )
}
