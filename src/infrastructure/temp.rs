//! Unique temporary filenames
//!
//! The file is created (empty) and persisted, so the returned name cannot be
//! taken by another process between generation and use.

use std::path::PathBuf;

use crate::error::UlsResult;

pub const DEFAULT_TEMP_PREFIX: &str = "ulstools";

/// Reserve a fresh file name in the system temp directory.
///
/// The caller owns the file and is responsible for removing it.
pub fn temp_filename(prefix: Option<&str>, suffix: Option<&str>) -> UlsResult<PathBuf> {
    temp_filename_in(&std::env::temp_dir(), prefix, suffix)
}

/// Same as [`temp_filename`], in an explicit directory.
pub fn temp_filename_in(
    dir: &std::path::Path,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> UlsResult<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix(prefix.unwrap_or(DEFAULT_TEMP_PREFIX))
        .suffix(suffix.unwrap_or_default())
        .tempfile_in(dir)?;
    let path = file.into_temp_path().keep().map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), "reserved temp filename");
    Ok(path)
}
