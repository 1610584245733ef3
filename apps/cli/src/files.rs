//! Writing CSV downloads to disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::AppResult;
use crate::handlers::Download;

/// Writes `download` into `dir` under its file name, replacing any older copy.
///
/// Creates `dir` if needed. Returns the written path.
pub fn save_download(dir: &Path, download: &Download) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(&download.file_name);
    fs::write(&path, &download.data)?;

    info!(path = %path.display(), bytes = download.data.len(), "CSV written");
    Ok(path)
}
