//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::image::overlay::OverlayMode;

/// Decal overlay compositor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Composite a foreground overlay onto a background image
    #[command(visible_alias = "c")]
    Compose {
        #[command(flatten)]
        args: ComposeArgs,
    },

    /// Remove the border-connected white background from an image
    #[command(visible_alias = "n")]
    Nobg {
        #[command(flatten)]
        args: NobgArgs,
    },
}

/// Overlay mode selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Resize foreground to background width, place flush top-left
    HorizontalFit,
    /// Shrink foreground to fit within the background, centered
    ShrinkCentered,
    /// Full pipeline: remove background, rotate, enhance, stretch, fit, center
    Combined,
}

impl From<ModeArg> for OverlayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HorizontalFit => OverlayMode::HorizontalFit,
            ModeArg::ShrinkCentered => OverlayMode::ShrinkCentered,
            ModeArg::Combined => OverlayMode::Combined,
        }
    }
}

/// Compose command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ComposeArgs {
    /// Background image: local path or http(s) URL
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Foreground image path
    #[arg(value_name = "FOREGROUND", value_hint = clap::ValueHint::FilePath)]
    pub foreground: PathBuf,

    /// Output image path (format chosen by extension; PNG keeps alpha)
    #[arg(value_name = "OUTPUT", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Composition mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Combined)]
    pub mode: ModeArg,

    /// Foreground rotation in degrees, positive = counter-clockwise (combined mode)
    #[arg(short, long, default_value_t = -28.5, allow_negative_numbers = true)]
    pub angle: f32,

    /// Contrast enhancement factor applied after rotation (combined mode)
    #[arg(short, long, default_value_t = 3.0)]
    pub contrast: f32,

    /// Channel value above which a pixel counts as background white (combined mode)
    #[arg(short, long, default_value_t = crate::image::background::DEFAULT_WHITE_THRESHOLD)]
    pub threshold: u8,

    /// Directory for downloaded background images
    #[arg(long, default_value = "downloads", value_hint = clap::ValueHint::DirPath)]
    pub fetch_dir: PathBuf,
}

/// Nobg command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NobgArgs {
    /// Input image path
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output path (always written as PNG so alpha survives)
    #[arg(value_name = "OUTPUT", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Channel value above which a pixel counts as background white
    #[arg(short, long, default_value_t = crate::image::background::DEFAULT_WHITE_THRESHOLD)]
    pub threshold: u8,
}
