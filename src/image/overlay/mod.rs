//! Composite a foreground overlay onto a background.
//!
//! Three modes share one geometry toolkit:
//!
//! - [`OverlayMode::HorizontalFit`]: match background width, paste flush
//!   top-left, growing the canvas when the scaled foreground is taller
//! - [`OverlayMode::ShrinkCentered`]: shrink into the background, centered
//! - [`OverlayMode::Combined`]: the production pipeline (background removal,
//!   rotate, contrast enhance, stretch, fit, center)

mod compose;
mod enhance;
mod geometry;
mod rotate;

pub use compose::{OverlayMode, OverlayOptions, compose_images, composite};
