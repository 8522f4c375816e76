//! Error types for table-scraper

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a scrape run
#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("scrape root not found or not a directory: {path}")]
    RootNotFound { path: PathBuf },

    #[error("failed to walk directory: {path}")]
    WalkError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read source file: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is not valid UTF-8 or Windows-1252 text: {path}")]
    DecodeError { path: PathBuf },

    #[error("invalid block flag pattern: {message}")]
    FlagPatternError { message: String },

    #[error("SQL parse error: {message}")]
    SqlParseError { message: String },
}

impl From<regex::Error> for ScraperError {
    fn from(err: regex::Error) -> Self {
        ScraperError::FlagPatternError {
            message: err.to_string(),
        }
    }
}
