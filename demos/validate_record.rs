//! Validate EDM records and list every violation.
//!
//! Each file given on the command line is parsed with default provenance
//! filling switched off, so missing `edm:provider` and `edm:rights` are
//! reported rather than filled in.
//!
//! Usage: `cargo run --example validate_record -- <file>...`

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::anyhow;
use edmrs::{EdmError, EdmParser, ParserConfig, RdfFormat};

fn main() -> anyhow::Result<()> {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: validate_record <file>...");
        std::process::exit(1);
    }

    let mut failed = 0;
    for path in &paths {
        match validate(Path::new(path)) {
            Ok(()) => println!("{path}: ok"),
            Err(EdmError::Validation(errors)) => {
                failed += 1;
                println!("{path}: {} violation(s)", errors.len());
                for violation in errors.iter() {
                    println!("  - {violation}");
                }
            },
            Err(e) => {
                failed += 1;
                println!("{path}: {e}");
            },
        }
    }

    println!();
    println!("{} of {} record(s) valid", paths.len() - failed, paths.len());
    if failed > 0 {
        return Err(anyhow!("{failed} record(s) failed validation"));
    }
    Ok(())
}

fn validate(path: &Path) -> edmrs::Result<()> {
    let format = RdfFormat::from_path(path).unwrap_or_default();
    let config = ParserConfig::new().with_fill_defaults(false);
    let file = File::open(path)?;
    EdmParser::from_reader_with_config(BufReader::new(file), format, config)?
        .parse()
        .map(|_| ())
}

