//! Overlay composition modes.

use std::fs;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::debug;
use crate::image::background::{DEFAULT_WHITE_THRESHOLD, remove_white_background};
use crate::image::error::PipelineError;
use crate::image::load_rgba;
use crate::image::overlay::enhance::enhance_contrast;
use crate::image::overlay::geometry::{center_offset, fit_width, shrink_to_fit};
use crate::image::overlay::rotate::rotate_expand;

/// How the foreground is scaled and placed on the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    /// Match background width exactly, paste flush top-left; the canvas
    /// grows vertically when the scaled foreground is taller.
    HorizontalFit,
    /// Scale down only when the foreground exceeds the background, centered;
    /// output dimensions equal the background's.
    ShrinkCentered,
    /// Production pipeline: background removal, rotation, contrast
    /// enhancement, conditional stretch, conditional shrink, centered paste.
    Combined,
}

/// Tunables for [`OverlayMode::Combined`].
#[derive(Debug, Clone, Copy)]
pub struct OverlayOptions {
    /// Foreground rotation in degrees, positive = counter-clockwise.
    pub angle_degrees: f32,
    /// Contrast enhancement factor applied after rotation.
    pub contrast: f32,
    /// Channel threshold for background whiteness.
    pub white_threshold: u8,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            angle_degrees: -28.5,
            contrast: 3.0,
            white_threshold: DEFAULT_WHITE_THRESHOLD,
        }
    }
}

/// Composite `foreground` onto `background` and write the result.
///
/// The output file is only written once the whole pipeline has succeeded;
/// its format follows the output path extension (PNG keeps alpha).
pub fn composite(
    background: &Path,
    foreground: &Path,
    output: &Path,
    mode: OverlayMode,
    options: &OverlayOptions,
) -> Result<(), PipelineError> {
    let bg = load_rgba(background)?;
    let fg = load_rgba(foreground)?;

    let composed = compose_images(bg, fg, mode, options)?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PipelineError::Io(output.to_path_buf(), e))?;
    }
    DynamicImage::ImageRgba8(composed)
        .save(output)
        .map_err(|e| PipelineError::Write(output.to_path_buf(), e))
}

/// Run one overlay mode over decoded images.
pub fn compose_images(
    background: RgbaImage,
    foreground: RgbaImage,
    mode: OverlayMode,
    options: &OverlayOptions,
) -> Result<RgbaImage, PipelineError> {
    let (bg_width, bg_height) = background.dimensions();
    let (fg_width, fg_height) = foreground.dimensions();
    if bg_width == 0 || bg_height == 0 || fg_width == 0 || fg_height == 0 {
        return Err(PipelineError::Processing(format!(
            "zero-sized input: background {bg_width}x{bg_height}, foreground {fg_width}x{fg_height}"
        )));
    }

    let composed = match mode {
        OverlayMode::HorizontalFit => horizontal_fit(&background, &foreground),
        OverlayMode::ShrinkCentered => shrink_centered(background, &foreground),
        OverlayMode::Combined => combined(background, &foreground, options),
    };
    Ok(composed)
}

fn horizontal_fit(background: &RgbaImage, foreground: &RgbaImage) -> RgbaImage {
    let (bg_width, bg_height) = background.dimensions();
    let (fg_width, fg_height) = foreground.dimensions();

    let (new_width, new_height) = fit_width(fg_width, fg_height, bg_width);
    let scaled = imageops::resize(foreground, new_width, new_height, FilterType::Lanczos3);

    let mut canvas = RgbaImage::new(bg_width, bg_height.max(new_height));
    imageops::replace(&mut canvas, background, 0, 0);
    imageops::overlay(&mut canvas, &scaled, 0, 0);
    canvas
}

fn shrink_centered(background: RgbaImage, foreground: &RgbaImage) -> RgbaImage {
    let (bg_width, bg_height) = background.dimensions();
    let (fg_width, fg_height) = foreground.dimensions();

    let mut canvas = background;
    match shrink_to_fit(fg_width, fg_height, bg_width, bg_height) {
        Some((width, height)) => {
            let scaled = imageops::resize(foreground, width, height, FilterType::Lanczos3);
            let (x, y) = center_offset(bg_width, bg_height, width, height);
            imageops::overlay(&mut canvas, &scaled, x, y);
        }
        None => {
            let (x, y) = center_offset(bg_width, bg_height, fg_width, fg_height);
            imageops::overlay(&mut canvas, foreground, x, y);
        }
    }
    canvas
}

fn combined(background: RgbaImage, foreground: &RgbaImage, options: &OverlayOptions) -> RgbaImage {
    let background = remove_white_background(background, options.white_threshold);
    let (bg_width, bg_height) = background.dimensions();

    let mut fg = rotate_expand(foreground, options.angle_degrees);
    fg = enhance_contrast(&fg, options.contrast);

    // Stretch to the background width first; the shrink below then operates
    // on the stretched dimensions, never the originals.
    if bg_width > fg.width() {
        let (width, height) = fit_width(fg.width(), fg.height(), bg_width);
        debug!("overlay"; "stretching foreground to {width}x{height}");
        fg = imageops::resize(&fg, width, height, FilterType::Lanczos3);
    }

    if let Some((width, height)) = shrink_to_fit(fg.width(), fg.height(), bg_width, bg_height) {
        debug!("overlay"; "shrinking foreground to {width}x{height}");
        fg = imageops::resize(&fg, width, height, FilterType::Lanczos3);
    }

    let (x, y) = center_offset(bg_width, bg_height, fg.width(), fg.height());
    let mut canvas = RgbaImage::new(bg_width, bg_height);
    imageops::replace(&mut canvas, &background, 0, 0);
    imageops::overlay(&mut canvas, &fg, x, y);
    canvas
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::{OverlayMode, OverlayOptions, compose_images, composite};
    use crate::image::error::PipelineError;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn horizontal_fit_grows_canvas_for_tall_foregrounds() {
        let bg = solid(100, 50, [0, 0, 255, 255]);
        let fg = solid(10, 40, [255, 0, 0, 255]); // scales to 100x400

        let out = compose_images(
            bg,
            fg,
            OverlayMode::HorizontalFit,
            &OverlayOptions::default(),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (100, 400));
        // Foreground covers the full canvas from the top-left.
        assert_eq!(out.get_pixel(0, 0)[3], 255);
        assert!(out.get_pixel(50, 200)[0] > 250);
        assert_eq!(out.get_pixel(99, 399)[3], 255);
    }

    #[test]
    fn horizontal_fit_keeps_background_height_for_short_foregrounds() {
        let bg = solid(100, 50, [0, 0, 255, 255]);
        let fg = solid(200, 20, [255, 0, 0, 255]); // scales to 100x10

        let out = compose_images(
            bg,
            fg,
            OverlayMode::HorizontalFit,
            &OverlayOptions::default(),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (100, 50));
        assert!(out.get_pixel(50, 5)[0] > 250);
        // Below the foreground the background shows through.
        assert_eq!(out.get_pixel(50, 30).0, [0, 0, 255, 255]);
    }

    #[test]
    fn shrink_centered_places_fitting_foreground_unscaled() {
        let bg = solid(100, 100, [0, 0, 255, 255]);
        let fg = solid(60, 40, [255, 0, 0, 255]);

        let out = compose_images(
            bg,
            fg,
            OverlayMode::ShrinkCentered,
            &OverlayOptions::default(),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (100, 100));
        // Placed at (20, 30), spanning to (79, 69) inclusive.
        assert_eq!(out.get_pixel(20, 30).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(79, 69).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(19, 30).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(20, 29).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(80, 70).0, [0, 0, 255, 255]);
    }

    #[test]
    fn shrink_centered_never_grows_the_canvas() {
        let bg = solid(100, 100, [0, 0, 255, 255]);
        let fg = solid(300, 150, [255, 0, 0, 255]); // shrinks to 100x50 at (0, 25)

        let out = compose_images(
            bg,
            fg,
            OverlayMode::ShrinkCentered,
            &OverlayOptions::default(),
        )
        .unwrap();

        assert_eq!(out.dimensions(), (100, 100));
        assert!(out.get_pixel(50, 50)[0] > 250);
        assert_eq!(out.get_pixel(50, 10).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(50, 90).0, [0, 0, 255, 255]);
    }

    #[test]
    fn shrink_centered_respects_foreground_alpha() {
        let bg = solid(50, 50, [0, 0, 255, 255]);
        let fg = solid(10, 10, [255, 0, 0, 0]); // fully transparent overlay

        let out = compose_images(
            bg,
            fg,
            OverlayMode::ShrinkCentered,
            &OverlayOptions::default(),
        )
        .unwrap();

        // Transparent foreground pixels must not overwrite the background.
        assert_eq!(out.get_pixel(25, 25).0, [0, 0, 255, 255]);
    }

    #[test]
    fn combined_pipeline_end_to_end() {
        // White 200x300 background: fully removed. Red 400x100 foreground:
        // rotated (~399x279), enhanced, too wide to stretch, shrunk to
        // 200x139 and centered at (0, 80).
        let bg = solid(200, 300, [255, 255, 255, 255]);
        let fg = solid(400, 100, [255, 0, 0, 255]);

        let out = compose_images(bg, fg, OverlayMode::Combined, &OverlayOptions::default())
            .unwrap();

        assert_eq!(out.dimensions(), (200, 300));
        // Removed background above and below the centered band.
        assert_eq!(out.get_pixel(100, 10)[3], 0);
        assert_eq!(out.get_pixel(100, 290)[3], 0);
        // The middle of the band holds the opaque red overlay.
        let center = out.get_pixel(100, 150);
        assert!(center[3] > 200, "alpha {}", center[3]);
        assert!(center[0] > 200, "red {}", center[0]);
        assert!(center[1] < 60, "green {}", center[1]);
    }

    #[test]
    fn combined_keeps_non_white_background_opaque() {
        let bg = solid(120, 80, [40, 40, 200, 255]);
        let fg = solid(30, 30, [255, 255, 0, 255]);

        let out = compose_images(bg, fg, OverlayMode::Combined, &OverlayOptions::default())
            .unwrap();

        assert_eq!(out.dimensions(), (120, 80));
        // Corner is never covered by the centered foreground and keeps the
        // untouched background.
        assert_eq!(out.get_pixel(0, 0).0, [40, 40, 200, 255]);
    }

    #[test]
    fn combined_stretches_narrow_foregrounds_to_background_width() {
        let bg = solid(200, 200, [10, 10, 10, 255]);
        let fg = solid(20, 20, [0, 255, 0, 255]);

        let out = compose_images(
            bg,
            fg,
            OverlayMode::Combined,
            &OverlayOptions {
                angle_degrees: 0.0,
                contrast: 1.0,
                white_threshold: 245,
            },
        )
        .unwrap();

        // 20x20 stretched to 200x200: the overlay reaches both canvas edges.
        assert_eq!(out.dimensions(), (200, 200));
        assert!(out.get_pixel(0, 100)[1] > 250);
        assert!(out.get_pixel(199, 100)[1] > 250);
    }

    #[test]
    fn zero_sized_foreground_is_a_processing_error() {
        let bg = solid(10, 10, [0, 0, 0, 255]);
        let fg = RgbaImage::new(0, 0);

        let err = compose_images(bg, fg, OverlayMode::ShrinkCentered, &OverlayOptions::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Processing(_)));
    }

    #[test]
    fn composite_writes_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let fg_path = dir.path().join("fg.png");
        let out_path = dir.path().join("out.png");

        image::DynamicImage::ImageRgba8(solid(4, 4, [255, 0, 0, 255]))
            .save(&fg_path)
            .unwrap();

        let err = composite(
            &missing,
            &fg_path,
            &out_path,
            OverlayMode::Combined,
            &OverlayOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PipelineError::InputNotFound(_)));
        assert!(!out_path.exists());
    }

    #[test]
    fn composite_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let bg_path = dir.path().join("bg.png");
        let fg_path = dir.path().join("fg.png");
        let out_path = dir.path().join("nested").join("out.png");

        image::DynamicImage::ImageRgba8(solid(64, 64, [0, 0, 255, 255]))
            .save(&bg_path)
            .unwrap();
        image::DynamicImage::ImageRgba8(solid(16, 16, [255, 0, 0, 255]))
            .save(&fg_path)
            .unwrap();

        composite(
            &bg_path,
            &fg_path,
            &out_path,
            OverlayMode::ShrinkCentered,
            &OverlayOptions::default(),
        )
        .unwrap();

        let out = image::open(&out_path).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (64, 64));
        // 16x16 foreground centered unscaled at (24, 24).
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(24, 24).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(23, 24).0, [0, 0, 255, 255]);
    }
}
