//! Request argument string parsing.
//!
//! ```bash
//! compass-util parse-args "os=centos;version=6.5" --format json
//! ```

use crate::utils::args::parse_request_arg_dict;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

pub fn run(text: &str, format: &str) -> Result<()> {
    let args = parse_request_arg_dict(text).context("Invalid request arguments")?;
    let sorted: BTreeMap<_, _> = args.into_iter().collect();

    match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&sorted)
                .context("Failed to serialize arguments")?;
            println!("{}", json);
        }
        "text" => {
            for (name, value) in &sorted {
                println!("{} = {}", name, value);
            }
        }
        _ => anyhow::bail!("Invalid format '{}'. Use 'json' or 'text'", format),
    }

    Ok(())
}
