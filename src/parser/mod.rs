//! Table-reference extraction from SQL block text

mod table_extract;

pub use table_extract::{SqlTableExtractor, TableExtractor};
