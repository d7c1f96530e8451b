//! Merge two JSON documents.
//!
//! # Usage
//!
//! ```bash
//! # source values win on conflicts
//! compass-util merge cluster.json host.json
//!
//! # keep target values on conflicts, write to a file
//! compass-util merge cluster.json host.json --no-override --output merged.json
//! ```

use crate::utils::merge::merge_dict;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

fn read_json(path: &str) -> Result<Value> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON from {}", path))
}

pub fn run(target: &str, source: &str, override_existing: bool, output: Option<&str>) -> Result<()> {
    let merged = merge_dict(read_json(target)?, read_json(source)?, override_existing);
    let json = serde_json::to_string_pretty(&merged).context("Failed to serialize merged document")?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{}", json)?;
            writer.flush()?;
            eprintln!("Merged document written to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
