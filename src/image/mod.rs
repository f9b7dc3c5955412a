//! Image processing pipeline.
//!
//! # Modules
//!
//! - [`background`]: corner-seeded white background removal
//! - [`overlay`]: overlay composition modes
//! - [`error`]: shared pipeline error type

pub mod background;
pub mod error;
pub mod overlay;

use std::path::Path;

use image::RgbaImage;

use error::PipelineError;

/// Load an image and normalize it to RGBA8.
///
/// Inputs without an alpha channel gain a fully-opaque one. A missing file
/// and an undecodable file are reported as distinct errors.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::InputNotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|e| PipelineError::Decode(path.to_path_buf(), e))?;
    Ok(img.to_rgba8())
}
