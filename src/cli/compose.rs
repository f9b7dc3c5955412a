//! `compose` command: resolve inputs and run the overlay pipeline.

use std::path::Path;

use anyhow::Result;

use crate::cli::ComposeArgs;
use crate::fetch::resolve_source;
use crate::image::overlay::{OverlayOptions, composite};
use crate::{debug, log};

pub fn run(args: &ComposeArgs) -> Result<()> {
    let background = resolve_source(&args.background, &args.fetch_dir)?;
    check_readable(&background);
    check_readable(&args.foreground);

    let options = OverlayOptions {
        angle_degrees: args.angle,
        contrast: args.contrast,
        white_threshold: args.threshold,
    };
    composite(
        &background,
        &args.foreground,
        &args.output,
        args.mode.into(),
        &options,
    )?;

    log!("compose"; "saved {}", args.output.display());
    Ok(())
}

/// Diagnostic-only existence check; the pipeline reports its own errors.
fn check_readable(path: &Path) {
    match std::fs::canonicalize(path) {
        Ok(abs) => debug!("compose"; "input {}", abs.display()),
        Err(_) => debug!("compose"; "input {} does not exist", path.display()),
    }
}
