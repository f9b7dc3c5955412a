//! `nobg` command: standalone background removal.

use anyhow::Result;

use crate::cli::NobgArgs;
use crate::image::background::remove_background;
use crate::log;

pub fn run(args: &NobgArgs) -> Result<()> {
    remove_background(&args.input, &args.output, args.threshold)?;
    log!("nobg"; "saved {}", args.output.display());
    Ok(())
}
