//! table-scraper: extracts table and schema names from SQL blocks embedded
//! in source files
//!
//! Walks a directory tree, isolates the text between configurable start/end
//! markers in each matching file (SAS `proc sql ... quit;` by default), finds
//! the table identifiers those blocks reference, and merges everything into
//! directory-wide deduplicated views.

pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod scanner;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

pub use error::ScraperError;
pub use model::{BlockTables, ScrapeDiagnostic, ScrapeResult, TableRef};
pub use parser::{SqlTableExtractor, TableExtractor};

/// Options for one scrape run
///
/// Immutable for the lifetime of the run; `scrape` borrows it and returns a
/// fresh result, so repeated runs over an unchanged tree are independent.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Root of the directory tree to scan
    pub root: PathBuf,
    /// File-name suffix filter (e.g., "sas")
    pub extension: String,
    /// Marker opening an embedded SQL block
    pub start_flag: String,
    /// Marker closing an embedded SQL block
    pub end_flag: String,
    /// Enable progress output
    pub verbose: bool,
}

impl ScrapeOptions {
    /// Options with the SAS defaults: `.sas` files, `proc sql` / `quit;` flags
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScrapeOptions {
            root: root.into(),
            extension: "sas".to_string(),
            start_flag: "proc sql".to_string(),
            end_flag: "quit;".to_string(),
            verbose: false,
        }
    }
}

/// Scrape a directory tree using the default sqlparser-backed extractor
pub fn scrape(options: &ScrapeOptions) -> Result<ScrapeResult> {
    scrape_with_extractor(options, &SqlTableExtractor)
}

/// Scrape a directory tree with a caller-supplied table extractor
///
/// Fatal errors (missing root, unreadable directory or file) abort the run.
/// Undecodable files and unparseable blocks are skipped and reported in the
/// result's diagnostics; a skipped block keeps its slot in `file_blocks` with
/// an empty table list so later block ordinals stay stable.
pub fn scrape_with_extractor(
    options: &ScrapeOptions,
    extractor: &dyn TableExtractor,
) -> Result<ScrapeResult> {
    // Step 1: enumerate matching files
    let files = scanner::find_source_files(&options.root, &options.extension)?;

    if options.verbose {
        println!("Found {} source files", files.len());
    }

    let pattern = extract::BlockPattern::new(&options.start_flag, &options.end_flag)?;

    let mut file_blocks = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for path in files {
        // Step 2: read and extract blocks
        let content = match scanner::read_source_file(&path) {
            Ok(content) => content,
            Err(err @ ScraperError::DecodeError { .. }) => {
                diagnostics.push(ScrapeDiagnostic {
                    path: path.clone(),
                    block: None,
                    message: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let blocks = extract::extract_blocks(&content, &pattern);

        if options.verbose && !blocks.is_empty() {
            println!("{}: {} blocks", path.display(), blocks.len());
        }

        // Step 3: extract table references per block
        let mut block_tables = Vec::with_capacity(blocks.len());
        for (ordinal, query) in blocks.into_iter().enumerate() {
            let tables = match extractor.tables_in_query(&query) {
                Ok(raw) => raw.iter().map(|r| TableRef::parse(r)).collect(),
                Err(err) => {
                    diagnostics.push(ScrapeDiagnostic {
                        path: path.clone(),
                        block: Some(ordinal),
                        message: err.to_string(),
                    });
                    Vec::new()
                }
            };
            block_tables.push(BlockTables { query, tables });
        }

        let key = path
            .strip_prefix(&options.root)
            .map(|p| p.to_path_buf())
            .unwrap_or(path);
        file_blocks.insert(key, block_tables);
    }

    // Step 4: aggregate
    let result = model::build_result(file_blocks, diagnostics);

    if options.verbose {
        println!(
            "Found {} tables across {} schemas",
            result.tables.len(),
            result.schemas.len()
        );
    }

    Ok(result)
}
