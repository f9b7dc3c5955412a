//! Remove the white background from product shots.
//!
//! A pixel counts as background white when all three color channels exceed a
//! fixed threshold, and removal is restricted to the region reachable from
//! the four image corners. Enclosed white areas (highlights, label text)
//! are never touched.

mod floodfill;
mod mask;
mod process;

pub use process::{DEFAULT_WHITE_THRESHOLD, remove_background, remove_white_background};
