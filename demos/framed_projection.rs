//! Print the framed JSON-LD-like projection of an EDM record.
//!
//! The aggregation is the root of the tree; the ProvidedCHO and the web
//! resources, agents and concepts it links to are nested inside it.
//!
//! Usage: `cargo run --example framed_projection -- <record-file> [--mapping]`
//!
//! With `--mapping` the flat key/value mapping is printed instead.

use std::env;

use anyhow::Context;
use edmrs::EdmParser;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        eprintln!("Usage: {} <record-file> [--mapping]", args[0]);
        std::process::exit(1);
    };
    let flat = args.iter().any(|arg| arg == "--mapping");

    let record = EdmParser::from_path(input_path)
        .with_context(|| format!("Failed to read '{input_path}'"))?
        .parse()?;

    let document = if flat {
        record.to_mapping()
    } else {
        record.framed_projection()
    };
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
