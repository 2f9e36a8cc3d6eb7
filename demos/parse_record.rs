//! Parse an EDM record and print a summary.
//!
//! This demo:
//! - Reads an RDF file (format guessed from the extension)
//! - Prints the ProvidedCHO titles and the contextual entity counts
//! - Re-serializes the record in another format
//!
//! Usage: `cargo run --example parse_record -- <record.xml|ttl|nt|jsonld> [output-format]`

use std::env;

use anyhow::Context;
use edmrs::{EdmParser, EntityKind, RdfFormat};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <record-file> [output-format]", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  record-file    RDF/XML, Turtle, N-Triples or JSON-LD file");
        eprintln!("  output-format  xml, ttl, nt or json-ld (default: ttl)");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_format: RdfFormat = args
        .get(2)
        .map_or("ttl", String::as_str)
        .parse()
        .context("unknown output format")?;

    let record = EdmParser::from_path(input_path)
        .with_context(|| format!("Failed to read '{input_path}'"))?
        .parse()
        .with_context(|| format!("'{input_path}' is not a valid EDM record"))?;

    let cho = record.provided_cho();
    println!("ProvidedCHO: {}", cho.id());
    for title in cho.dc_title() {
        println!("  title: {title}");
    }
    if let Some(edm_type) = cho.edm_type() {
        println!("  type:  {}", edm_type.text());
    }

    println!();
    for kind in EntityKind::ALL {
        let count = record.entities_of(kind).len();
        if count > 0 {
            println!("{:<20} {count}", kind.class_name());
        }
    }

    println!();
    println!("--- {output_format} ---");
    println!("{}", record.serialize(output_format)?);

    Ok(())
}
