//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the load → transform → save pipeline.
///
/// All variants are terminal for the invocation: nothing is retried, and the
/// output file is only written after the full pipeline has succeeded.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input path does not resolve to a readable file.
    #[error("input file not found: `{0}`")]
    InputNotFound(PathBuf),

    /// File exists but is not a decodable image.
    #[error("failed to decode `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    /// Any other failure during resize/rotate/enhance/flood fill.
    #[error("image processing failed: {0}")]
    Processing(String),

    /// IO error while preparing the output location.
    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Output could not be encoded or written.
    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = PipelineError::InputNotFound(PathBuf::from("shots/bg.png"));
        assert!(format!("{err}").contains("shots/bg.png"));
    }

    #[test]
    fn processing_carries_detail() {
        let err = PipelineError::Processing("zero-sized input".into());
        assert!(format!("{err}").contains("zero-sized input"));
    }
}
