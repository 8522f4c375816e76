//! Unit tests for block extraction

use pretty_assertions::assert_eq;

use table_scraper::extract::{extract_blocks, normalize_source, BlockPattern};

fn sas_pattern() -> BlockPattern {
    BlockPattern::new("proc sql", "quit;").unwrap()
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_replaces_tabs_and_carriage_returns() {
    // The replaced characters stay as spaces within their line
    let normalized = normalize_source("select\ta\r\nfrom t");
    assert_eq!(normalized, "select a  from t");
}

#[test]
fn test_normalize_drops_blank_lines() {
    let normalized = normalize_source("select a\n\n   \nfrom t");
    assert_eq!(normalized, "select a from t");
}

#[test]
fn test_normalize_drops_comment_only_lines() {
    let source = "select a\n-- a dash comment\n# a hash comment\n* a star comment\nfrom t";
    assert_eq!(normalize_source(source), "select a from t");
}

#[test]
fn test_normalize_truncates_trailing_line_comments() {
    let normalized = normalize_source("select a -- trailing\nfrom t # also trailing");
    assert_eq!(normalized, "select a  from t ");
}

#[test]
fn test_normalize_keeps_mid_line_star() {
    let normalized = normalize_source("select * from t");
    assert_eq!(normalized, "select * from t");
}

// ============================================================================
// Block matching
// ============================================================================

#[test]
fn test_no_flags_yields_no_blocks() {
    let blocks = extract_blocks("data step; run;", &sas_pattern());
    assert!(blocks.is_empty());
}

#[test]
fn test_single_block_between_flags() {
    let blocks = extract_blocks("proc sql; select a from t; quit;", &sas_pattern());
    assert_eq!(blocks, vec!["; select a from t; ".to_string()]);
}

#[test]
fn test_unterminated_start_flag_yields_no_blocks() {
    let blocks = extract_blocks("proc sql; select a from t;", &sas_pattern());
    assert!(blocks.is_empty());
}

#[test]
fn test_two_blocks_in_order() {
    let source = "proc sql; select a from t1; quit;\ndata step; run;\nproc sql; select b from t2; quit;";
    let blocks = extract_blocks(source, &sas_pattern());
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("t1"));
    assert!(blocks[1].contains("t2"));
}

#[test]
fn test_lazy_match_stops_at_first_end_flag() {
    let source = "proc sql; select a from t1; quit; select b from t2; quit;";
    let blocks = extract_blocks(source, &sas_pattern());
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("t1"));
    assert!(!blocks[0].contains("t2"));
}

#[test]
fn test_inner_start_flag_does_not_split_block() {
    // A stray inner start flag is swallowed; the block still ends at the
    // first end flag.
    let source = "proc sql; select a from t1; proc sql select b from t2; quit;";
    let blocks = extract_blocks(source, &sas_pattern());
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("t1"));
    assert!(blocks[0].contains("t2"));
}

#[test]
fn test_comment_line_inside_block_is_dropped() {
    let source = "proc sql;\nselect a from real_table;\n-- select b from ignored_table;\nquit;";
    let blocks = extract_blocks(source, &sas_pattern());
    assert_eq!(blocks.len(), 1);
    assert!(!blocks[0].contains("ignored_table"));
}

#[test]
fn test_flags_with_regex_metacharacters_match_literally() {
    let pattern = BlockPattern::new("begin(", ")end").unwrap();
    let blocks = pattern.find_blocks("begin( select a from t )end");
    assert_eq!(blocks, vec![" select a from t ".to_string()]);
}

#[test]
fn test_multiline_block_is_joined_before_matching() {
    let source = "proc sql;\nselect a\nfrom t;\nquit;";
    let blocks = extract_blocks(source, &sas_pattern());
    assert_eq!(blocks, vec!["; select a from t; ".to_string()]);
}
