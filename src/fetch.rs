//! Resolve a background source (URL or local path) to a readable local file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{debug, log};

/// Fallback filename for URLs whose path has no usable last segment.
const FALLBACK_FILENAME: &str = "download.png";

/// Errors from resolving or downloading a source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch failed for `{0}`")]
    Http(String, #[source] reqwest::Error),

    #[error("fetch failed for `{url}`: HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("fetch failed for `{0}`: could not write download")]
    Io(String, #[source] io::Error),

    #[error("input file not found: `{0}`")]
    NotFound(PathBuf),
}

/// Resolve `source` to a local file path.
///
/// `http(s)://` sources are downloaded into `fetch_dir`, reusing an existing
/// download of the same name. Anything else must be an existing local file.
pub fn resolve_source(source: &str, fetch_dir: &Path) -> Result<PathBuf, FetchError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return download(source, fetch_dir);
    }

    let path = PathBuf::from(source);
    if path.is_file() {
        Ok(path)
    } else {
        Err(FetchError::NotFound(path))
    }
}

/// Download `url` into `fetch_dir`, streaming to a `.part` file first so a
/// failed transfer never leaves a reusable half-written image behind.
fn download(url: &str, fetch_dir: &Path) -> Result<PathBuf, FetchError> {
    fs::create_dir_all(fetch_dir).map_err(|e| FetchError::Io(url.to_string(), e))?;

    let target = fetch_dir.join(filename_from_url(url));
    if target.is_file() {
        debug!("fetch"; "reusing {}", target.display());
        return Ok(target);
    }

    log!("fetch"; "downloading {}", url);
    let mut response =
        reqwest::blocking::get(url).map_err(|e| FetchError::Http(url.to_string(), e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let partial = target.with_extension("part");
    let mut file = File::create(&partial).map_err(|e| FetchError::Io(url.to_string(), e))?;
    io::copy(&mut response, &mut file).map_err(|e| FetchError::Io(url.to_string(), e))?;
    fs::rename(&partial, &target).map_err(|e| FetchError::Io(url.to_string(), e))?;

    Ok(target)
}

/// Derive a local filename from the last URL path segment, query stripped.
fn filename_from_url(url: &str) -> &str {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_FILENAME)
}
