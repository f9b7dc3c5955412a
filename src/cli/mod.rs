//! Command-line interface module.

mod args;
pub mod compose;
pub mod nobg;

pub use args::{Cli, Commands, ComposeArgs, NobgArgs};
