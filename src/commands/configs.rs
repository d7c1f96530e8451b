//! Configuration directory loading.
//!
//! ```bash
//! compass-util load-configs /etc/compass/os_installer
//! compass-util load-configs /etc/compass/package_installer --suffix .yaml --defaults base.json
//! ```
//!
//! Prints one JSON object per loaded file, keyed by file path.

use crate::config::{load_configs, ConfigLoadOptions};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;

pub fn run(dir: &str, suffix: &str, defaults: Option<&str>) -> Result<()> {
    let mut options = ConfigLoadOptions::default().with_suffix(suffix);

    if let Some(path) = defaults {
        let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse defaults from {}", path))?;
        match value {
            Value::Object(map) => options = options.with_defaults(map),
            _ => anyhow::bail!("Defaults file {} must contain a JSON object", path),
        }
    }

    let configs = load_configs(dir, &options)
        .with_context(|| format!("Failed to load configs from {}", dir))?;

    eprintln!("Loaded {} config(s) from {}", configs.len(), dir);

    let mut out = Map::new();
    for config in configs {
        out.insert(config.path.display().to_string(), Value::Object(config.values));
    }
    let json = serde_json::to_string_pretty(&Value::Object(out)).context("Failed to serialize configs")?;
    println!("{}", json);

    Ok(())
}
