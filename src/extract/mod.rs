//! Block extraction: comment stripping and marker-delimited matching

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ScraperError;

/// Lines whose first non-blank characters open a line comment
static COMMENT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(--|#|\*)").expect("comment line regex"));

/// Compiled matcher for one start-flag/end-flag pair
///
/// Both flags are regex-escaped before compilation, so markers containing
/// regex metacharacters (e.g., `quit;`) match literally. The text between
/// flags is captured with a lazy quantifier: each block ends at the first
/// end flag after its start flag.
#[derive(Debug, Clone)]
pub struct BlockPattern {
    regex: Regex,
}

impl BlockPattern {
    pub fn new(start_flag: &str, end_flag: &str) -> Result<Self, ScraperError> {
        let pattern = format!(
            "{}(.+?){}",
            regex::escape(start_flag),
            regex::escape(end_flag)
        );
        Ok(BlockPattern {
            regex: Regex::new(&pattern)?,
        })
    }

    /// All non-overlapping blocks in `text`, in order of appearance
    ///
    /// Returns the captured text between the flags, not including the flags
    /// themselves. An unterminated start flag contributes no block.
    pub fn find_blocks(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Collapse a file's content into a single comment-free line
///
/// Tabs and carriage returns become spaces; blank lines and lines opening
/// with `--`, `#`, or `*` are dropped; surviving lines are truncated at a
/// mid-line `--` or `#` and re-joined with single spaces. The result is what
/// block matching runs against.
pub fn normalize_source(content: &str) -> String {
    let normalized = content.replace(['\t', '\r'], " ");

    let mut kept = Vec::new();
    for line in normalized.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if COMMENT_LINE.is_match(line) {
            continue;
        }
        let without_trailing = match line.find("--").into_iter().chain(line.find('#')).min() {
            Some(pos) => &line[..pos],
            None => line,
        };
        kept.push(without_trailing);
    }

    kept.join(" ")
}

/// Extract all blocks from raw file content
pub fn extract_blocks(content: &str, pattern: &BlockPattern) -> Vec<String> {
    pattern.find_blocks(&normalize_source(content))
}
