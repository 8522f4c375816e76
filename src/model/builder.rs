//! Builds the aggregate views from per-file block results

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use super::result::{BlockTables, ScrapeDiagnostic, ScrapeResult};

/// Merge per-file block results into the directory-wide aggregate views
///
/// Derives, from the flattened identifier set:
/// - `tables`: every identifier in its qualified form, deduplicated
/// - `schemas`: distinct prefixes among dotted identifiers
/// - `schema_tables`: suffixes grouped under their schema
/// - `unqualified_tables`: bare names left over once every schema-attributed
///   name is removed (set difference over the bare-name projection)
pub fn build_result(
    file_blocks: BTreeMap<PathBuf, Vec<BlockTables>>,
    diagnostics: Vec<ScrapeDiagnostic>,
) -> ScrapeResult {
    let mut tables = BTreeSet::new();
    for blocks in file_blocks.values() {
        for block in blocks {
            for table_ref in &block.tables {
                tables.insert(table_ref.raw.clone());
            }
        }
    }

    let mut schemas = BTreeSet::new();
    let mut schema_tables: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut unqualified_tables: BTreeSet<String> = tables
        .iter()
        .map(|raw| match raw.split_once('.') {
            Some((_, table)) => table.to_string(),
            None => raw.clone(),
        })
        .collect();

    for raw in &tables {
        if let Some((schema, table)) = raw.split_once('.') {
            schemas.insert(schema.to_string());
            schema_tables
                .entry(schema.to_string())
                .or_default()
                .insert(table.to_string());
        }
    }

    // A name attributed to some schema leaves the no-schema bucket, even if it
    // also occurred unqualified somewhere.
    for attributed in schema_tables.values() {
        for table in attributed {
            unqualified_tables.remove(table);
        }
    }

    ScrapeResult {
        tables,
        schemas,
        schema_tables,
        unqualified_tables,
        file_blocks,
        diagnostics,
    }
}
