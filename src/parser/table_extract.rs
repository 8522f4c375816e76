//! SQL table-reference extraction using sqlparser-rs
//!
//! The primary path parses the block into an AST and collects every relation
//! the statements touch. Blocks scraped out of mixed-language sources are
//! often not a clean statement list, so a tokenizer-level FROM/JOIN scan
//! serves as the fallback when full parsing fails.

use std::ops::ControlFlow;

use sqlparser::ast::visit_relations;
use sqlparser::dialect::GenericDialect;
use sqlparser::keywords::Keyword;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::{Token, Tokenizer};

use crate::error::ScraperError;

/// Narrow seam for the table-name-extraction dependency
///
/// One operation: block text in, referenced table identifiers out, in
/// discovery order with duplicates preserved. Tests stub this to exercise
/// the pipeline without a real SQL parser.
pub trait TableExtractor {
    fn tables_in_query(&self, sql: &str) -> Result<Vec<String>, ScraperError>;
}

/// Default extractor backed by sqlparser's GenericDialect
#[derive(Debug, Default)]
pub struct SqlTableExtractor;

impl TableExtractor for SqlTableExtractor {
    fn tables_in_query(&self, sql: &str) -> Result<Vec<String>, ScraperError> {
        match Parser::parse_sql(&GenericDialect {}, sql) {
            Ok(statements) => {
                let mut visited = Vec::new();
                visit_relations(&statements, |relation| {
                    visited.push(relation.to_string());
                    ControlFlow::<()>::Continue(())
                });
                Ok(visited)
            }
            Err(_) => scan_from_join_tables(&sql.replace(';', " ")),
        }
    }
}

/// Token-level scan collecting compound identifiers after FROM/JOIN
///
/// Handles comma-separated FROM lists and skips bare or AS-introduced
/// aliases. Subquery openers (`FROM (`) contribute nothing themselves; their
/// inner FROM clauses are picked up as the scan continues.
fn scan_from_join_tables(sql: &str) -> Result<Vec<String>, ScraperError> {
    let dialect = GenericDialect {};
    let tokens = Tokenizer::new(&dialect, sql)
        .tokenize()
        .map_err(|e| ScraperError::SqlParseError {
            message: e.to_string(),
        })?;

    let mut tables = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let (is_from, is_join) = match &tokens[i] {
            Token::Word(w) => (w.keyword == Keyword::FROM, w.keyword == Keyword::JOIN),
            _ => (false, false),
        };
        i += 1;
        if !is_from && !is_join {
            continue;
        }

        loop {
            skip_whitespace(&tokens, &mut i);
            let Some(name) = parse_compound_identifier(&tokens, &mut i) else {
                break;
            };
            tables.push(name);
            skip_whitespace(&tokens, &mut i);

            // Optional alias, bare or AS-introduced
            if let Some(Token::Word(w)) = tokens.get(i) {
                if w.keyword == Keyword::AS {
                    i += 1;
                    skip_whitespace(&tokens, &mut i);
                    if matches!(tokens.get(i), Some(Token::Word(_))) {
                        i += 1;
                    }
                    skip_whitespace(&tokens, &mut i);
                } else if w.keyword == Keyword::NoKeyword {
                    i += 1;
                    skip_whitespace(&tokens, &mut i);
                }
            }

            // Comma continues a FROM list; anything else ends it
            if is_from && matches!(tokens.get(i), Some(Token::Comma)) {
                i += 1;
                continue;
            }
            break;
        }
    }

    Ok(tables)
}

fn skip_whitespace(tokens: &[Token], i: &mut usize) {
    while matches!(tokens.get(*i), Some(Token::Whitespace(_))) {
        *i += 1;
    }
}

/// Parse `word(.word)*` at the cursor, advancing past it
///
/// SELECT after FROM marks a subquery missing its paren, not a table name.
fn parse_compound_identifier(tokens: &[Token], i: &mut usize) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    match tokens.get(*i) {
        Some(Token::Word(w)) if w.keyword != Keyword::SELECT => {
            parts.push(w.value.clone());
            *i += 1;
        }
        _ => return None,
    }

    while matches!(tokens.get(*i), Some(Token::Period)) {
        match tokens.get(*i + 1) {
            Some(Token::Word(w)) => {
                parts.push(w.value.clone());
                *i += 2;
            }
            _ => break,
        }
    }

    Some(parts.join("."))
}
