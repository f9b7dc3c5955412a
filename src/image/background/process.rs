use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::image::background::floodfill::apply_corner_connected_mask;
use crate::image::background::mask::build_white_mask;
use crate::image::error::PipelineError;
use crate::image::load_rgba;

/// Channel value above which a pixel counts as background white.
pub const DEFAULT_WHITE_THRESHOLD: u8 = 245;

/// Remove the white background from an image file and write PNG output.
///
/// PNG regardless of output extension: the whole point of the operation is
/// the alpha channel, and a lossy format would destroy it.
pub fn remove_background(input: &Path, output: &Path, threshold: u8) -> Result<(), PipelineError> {
    let img = load_rgba(input)?;
    let processed = remove_white_background(img, threshold);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PipelineError::Io(output.to_path_buf(), e))?;
    }

    DynamicImage::ImageRgba8(processed)
        .save_with_format(output, ImageFormat::Png)
        .map_err(|e| PipelineError::Write(output.to_path_buf(), e))?;
    Ok(())
}

/// Make the corner-connected white region transparent.
///
/// RGB values are left untouched everywhere, including removed pixels.
pub fn remove_white_background(img: RgbaImage, threshold: u8) -> RgbaImage {
    let mut output = img;
    let (width, height) = output.dimensions();
    if width == 0 || height == 0 {
        return output;
    }

    let mask = build_white_mask(&output, threshold);
    apply_corner_connected_mask(&mut output, &mask);
    output
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::{DEFAULT_WHITE_THRESHOLD, remove_white_background};

    fn remove(img: RgbaImage) -> RgbaImage {
        remove_white_background(img, DEFAULT_WHITE_THRESHOLD)
    }

    #[test]
    fn fully_white_image_becomes_fully_transparent() {
        let img = RgbaImage::from_pixel(8, 6, Rgba([255, 255, 255, 255]));
        let out = remove(img);

        assert!(out.pixels().all(|p| p[3] == 0));
        // RGB survives the knockout.
        assert!(out.pixels().all(|p| p.0[..3] == [255, 255, 255]));
    }

    #[test]
    fn preserves_enclosed_white_island() {
        let mut img = RgbaImage::from_pixel(7, 7, Rgba([255, 255, 255, 255]));
        let frame = Rgba([0, 0, 0, 255]);

        for x in 1..=5 {
            img.put_pixel(x, 1, frame);
            img.put_pixel(x, 5, frame);
        }
        for y in 1..=5 {
            img.put_pixel(1, y, frame);
            img.put_pixel(5, y, frame);
        }

        let out = remove(img);

        // Outer white background is corner-connected and removed.
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        // Enclosed white island keeps its opacity.
        assert_eq!(out.get_pixel(3, 3)[3], 255);
        // The frame itself is untouched.
        assert_eq!(out.get_pixel(1, 1)[3], 255);
    }

    #[test]
    fn dark_corners_mean_no_removal() {
        // White everywhere except the four corners: without a white corner
        // seed the mask stays empty, even though the border has white runs.
        let mut img = RgbaImage::from_pixel(9, 9, Rgba([255, 255, 255, 255]));
        let dark = Rgba([30, 30, 30, 255]);
        img.put_pixel(0, 0, dark);
        img.put_pixel(8, 0, dark);
        img.put_pixel(0, 8, dark);
        img.put_pixel(8, 8, dark);

        let input = img.clone();
        let out = remove(img);
        assert_eq!(out, input);
    }

    #[test]
    fn near_white_at_threshold_is_not_background() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([245, 245, 245, 255]));
        let out = remove(img);
        assert!(out.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn handles_single_row_image() {
        let mut img = RgbaImage::from_pixel(3, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

        let out = remove(img);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(1, 0)[3], 255);
        assert_eq!(out.get_pixel(2, 0)[3], 0);
    }

    #[test]
    fn handles_single_column_image() {
        let img = RgbaImage::from_pixel(1, 3, Rgba([255, 255, 255, 255]));
        let out = remove(img);
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn handles_single_pixel_image() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let out = remove(img);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
    }
}
