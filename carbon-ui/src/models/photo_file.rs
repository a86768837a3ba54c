//! Reading selected photos from disk into [`PhotoFile`]s.

use std::path::{Path, PathBuf};

use carbon_core::PhotoFile;
use thiserror::Error;
use tracing::debug;

/// MIME type used for files whose extension is not recognised.
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Errors that can occur while reading a photo from disk.
#[derive(Debug, Error)]
pub enum PhotoLoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' has no file name", .0.display())]
    NoFileName(PathBuf),
}

/// Returns the MIME type implied by the path's extension.
///
/// Matching is case-insensitive. Unknown extensions map to
/// `application/octet-stream`, which the wizard rejects as a non-image.
pub fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        Some("heic") => "image/heic",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("pdf") => "application/pdf",
        _ => UNKNOWN_MIME_TYPE,
    }
}

/// Reads one file into memory.
pub fn load_photo(path: &Path) -> Result<PhotoFile, PhotoLoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PhotoLoadError::NoFileName(path.to_path_buf()))?;

    let bytes = std::fs::read(path).map_err(|source| PhotoLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mime_type = mime_type_for(path);
    debug!(%name, mime_type, bytes = bytes.len(), "Loaded photo");
    Ok(PhotoFile::new(name, mime_type, bytes))
}

/// Reads every file, stopping at the first one that cannot be read.
pub fn load_photos<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PhotoFile>, PhotoLoadError> {
    paths.iter().map(|p| load_photo(p.as_ref())).collect()
}
