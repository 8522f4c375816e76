use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use table_scraper::{scrape, ScrapeOptions};

#[derive(Parser)]
#[command(name = "table-scraper")]
#[command(author, version, about = "Extracts table names from SQL blocks embedded in source files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory tree for embedded SQL blocks and report the tables they reference
    Scan {
        /// Root directory to scan
        #[arg(short, long)]
        directory: PathBuf,

        /// File-name suffix to match
        #[arg(short, long, default_value = "sas")]
        extension: String,

        /// Marker opening an embedded SQL block
        #[arg(long, default_value = "proc sql")]
        start_flag: String,

        /// Marker closing an embedded SQL block
        #[arg(long, default_value = "quit;")]
        end_flag: String,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            directory,
            extension,
            start_flag,
            end_flag,
            verbose,
        } => {
            let options = ScrapeOptions {
                root: directory,
                extension,
                start_flag,
                end_flag,
                verbose,
            };

            let result = scrape(&options)?;

            println!("Schemas ({}):", result.schemas.len());
            for schema in &result.schemas {
                println!("  {}", schema);
            }

            println!("Tables by schema:");
            for (schema, tables) in &result.schema_tables {
                println!("  {}:", schema);
                for table in tables {
                    println!("    {}", table);
                }
            }

            if !result.unqualified_tables.is_empty() {
                println!("Tables without schema:");
                for table in &result.unqualified_tables {
                    println!("  {}", table);
                }
            }

            println!("All tables ({}):", result.tables.len());
            for table in &result.tables {
                println!("  {}", table);
            }

            for diagnostic in &result.diagnostics {
                match diagnostic.block {
                    Some(ordinal) => eprintln!(
                        "warning: {} block {}: {}",
                        diagnostic.path.display(),
                        ordinal,
                        diagnostic.message
                    ),
                    None => eprintln!(
                        "warning: {}: {}",
                        diagnostic.path.display(),
                        diagnostic.message
                    ),
                }
            }
        }
    }

    Ok(())
}
