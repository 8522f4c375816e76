//! Scrape result model building

mod builder;
mod result;

pub use builder::build_result;
pub use result::{BlockTables, ScrapeDiagnostic, ScrapeResult, TableRef};
