//! Directory walking and source file reading

use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use walkdir::WalkDir;

use crate::error::ScraperError;

/// Find all files under `root` whose name ends with `extension`
///
/// The walk is recursive and does not follow symlinks, so a symlinked
/// directory cycle cannot recurse forever. Filesystem errors during the walk
/// (e.g., permission denied) are fatal and name the offending path.
pub fn find_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ScraperError> {
    if !root.is_dir() {
        return Err(ScraperError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ScraperError::WalkError { path, source: e }
        })?;

        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(extension)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Read a source file as text, trying UTF-8 first, then Windows-1252
///
/// Strips a UTF-8 BOM if present. Files containing NUL bytes are treated as
/// binary and yield `DecodeError`, as does content neither encoding accepts;
/// the caller decides whether to skip such files. I/O failures yield
/// `FileReadError` and are fatal.
pub fn read_source_file(path: &Path) -> Result<String, ScraperError> {
    let bytes = std::fs::read(path).map_err(|e| ScraperError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes.contains(&0) {
        return Err(ScraperError::DecodeError {
            path: path.to_path_buf(),
        });
    }

    match String::from_utf8(bytes) {
        Ok(content) => match content.strip_prefix('\u{FEFF}') {
            Some(stripped) => Ok(stripped.to_string()),
            None => Ok(content),
        },
        Err(err) => {
            // Fall back to Windows-1252 (common for SQL files created on Windows)
            let (decoded, _, had_errors) = WINDOWS_1252.decode(err.as_bytes());
            if had_errors {
                Err(ScraperError::DecodeError {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}
