//! Result types returned by a scrape run
//!
//! Everything here is rebuilt from scratch on every invocation; nothing is
//! persisted or shared across runs.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A table identifier as found in a query, split at the first dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Identifier exactly as the extractor emitted it (e.g., "dwhint.accounts")
    pub raw: String,
    /// Schema qualifier, when the identifier was dotted
    pub schema: Option<String>,
    /// Bare table name (everything after the first dot, or the whole identifier)
    pub table: String,
}

impl TableRef {
    /// Split a raw identifier into (schema, table) at the first dot
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('.') {
            Some((schema, table)) => TableRef {
                raw: raw.to_string(),
                schema: Some(schema.to_string()),
                table: table.to_string(),
            },
            None => TableRef {
                raw: raw.to_string(),
                schema: None,
                table: raw.to_string(),
            },
        }
    }
}

/// One extracted block paired with the table references found in it
///
/// The block ordinal is its index within the parent file's block list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTables {
    /// The block text between (not including) the start and end flags
    pub query: String,
    /// Table references in discovery order, duplicates preserved
    pub tables: Vec<TableRef>,
}

/// A non-fatal problem recorded while scraping (skipped file or block)
#[derive(Debug, Clone)]
pub struct ScrapeDiagnostic {
    /// File the problem occurred in
    pub path: PathBuf,
    /// Block ordinal within the file, when the problem was block-level
    pub block: Option<usize>,
    /// Human-readable description of what was skipped and why
    pub message: String,
}

/// Aggregate views produced by one scrape run
#[derive(Debug, Clone, Default)]
pub struct ScrapeResult {
    /// All table identifiers, in the qualified form the extractor emitted
    pub tables: BTreeSet<String>,
    /// All schema prefixes seen among dotted identifiers
    pub schemas: BTreeSet<String>,
    /// Schema -> bare table names attributed to it
    pub schema_tables: BTreeMap<String, BTreeSet<String>>,
    /// Bare names never attributed to any schema
    pub unqualified_tables: BTreeSet<String>,
    /// Per-file block structure, keyed by path relative to the scrape root
    pub file_blocks: BTreeMap<PathBuf, Vec<BlockTables>>,
    /// Files and blocks that were skipped, with the reason
    pub diagnostics: Vec<ScrapeDiagnostic>,
}
