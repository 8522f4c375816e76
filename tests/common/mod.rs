//! Common test utilities for table-scraper tests

use std::fs;
use std::path::PathBuf;

use table_scraper::{scrape, ScrapeOptions, ScrapeResult};
use tempfile::TempDir;

/// Test context with a temporary scrape root for isolated test execution
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write a file under the scrape root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        self.write_bytes(relative, content.as_bytes());
    }

    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Default SAS options pointed at this context's root
    pub fn options(&self) -> ScrapeOptions {
        ScrapeOptions::new(&self.root)
    }

    /// Scrape with the default options and extractor
    pub fn scrape(&self) -> ScrapeResult {
        scrape(&self.options()).expect("scrape failed")
    }
}
