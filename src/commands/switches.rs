//! Switch inventory file import.
//!
//! Reads one or more switch files (plain, `.gz` or `.zst`) and prints a
//! summary, or exports the parsed records.
//!
//! # Usage
//!
//! ```bash
//! # Summary of a single file
//! compass-util switches switches.csv
//!
//! # Several files, parsed in parallel, exported as JSON
//! compass-util switches rack1.csv rack2.csv.gz --output inventory.json
//!
//! # Machine ports as CSV
//! compass-util switches rack1.csv --output machines.csv --format csv
//! ```
//!
//! # Output
//!
//! - **json**: `{"switches": [...], "machines": {"<switch ip>": [{"mac", "port"}]}}`
//! - **csv**: one row per machine port: `switch_ip,vendor,state,port,mac`

use crate::switches::{get_switch_machines_from_file, get_switch_machines_from_files, SwitchInventory};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn run(files: &[String], output: Option<&str>, format: &str) -> Result<()> {
    let inventory = if files.len() == 1 {
        get_switch_machines_from_file(&files[0])
            .with_context(|| format!("Failed to load switch file: {}", files[0]))?
    } else {
        get_switch_machines_from_files(files)?
    };

    eprintln!(
        "Loaded {} switches and {} machine ports from {} file(s)",
        inventory.switches.len(),
        inventory.machine_count(),
        files.len()
    );

    match output {
        Some(path) => write_inventory(&inventory, path, format),
        None => {
            print_summary(&inventory);
            Ok(())
        }
    }
}

fn print_summary(inventory: &SwitchInventory) {
    if inventory.is_empty() {
        println!("No switch or machine records found");
        return;
    }

    println!("{}", "=".repeat(70));
    println!("{:<18} {:<14} {:<10} {:<20} {:>6}", "Switch IP", "Vendor", "SNMP", "State", "Ports");
    println!("{}", "=".repeat(70));

    for switch in &inventory.switches {
        println!(
            "{:<18} {:<14} {:<10} {:<20} {:>6}",
            switch.ip,
            switch.vendor,
            switch.credentials.version,
            switch.state,
            inventory.machines_on(&switch.ip).len()
        );
    }

    let orphans: Vec<&String> = inventory
        .machines
        .keys()
        .filter(|ip| !inventory.switches.iter().any(|s| &s.ip == *ip))
        .collect();
    if !orphans.is_empty() {
        println!();
        println!("Machines on unlisted switches:");
        for ip in orphans {
            println!("  {} ({} ports)", ip, inventory.machines_on(ip).len());
        }
    }
}

fn write_inventory(inventory: &SwitchInventory, path: &str, format: &str) -> Result<()> {
    match format.to_lowercase().as_str() {
        "json" => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let mut writer = BufWriter::new(file);
            let json = serde_json::to_string_pretty(inventory)
                .context("Failed to serialize switch inventory")?;
            writer.write_all(json.as_bytes())?;
            writer.flush()?;
        }
        "csv" => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            let mut csv_writer = csv::Writer::from_writer(file);
            csv_writer.write_record(["switch_ip", "vendor", "state", "port", "mac"])?;

            let switches: HashMap<&str, _> = inventory
                .switches
                .iter()
                .map(|s| (s.ip.as_str(), s))
                .collect();

            for (ip, ports) in &inventory.machines {
                let switch = switches.get(ip.as_str());
                let vendor = switch.map(|s| s.vendor.as_str()).unwrap_or("");
                let state = switch.map(|s| s.state.as_str()).unwrap_or("");
                for machine in ports {
                    csv_writer.write_record([
                        ip.as_str(),
                        vendor,
                        state,
                        machine.port.as_str(),
                        machine.mac.as_str(),
                    ])?;
                }
            }
            csv_writer.flush()?;
        }
        _ => anyhow::bail!("Invalid format '{}'. Use 'csv' or 'json'", format),
    }

    eprintln!("Switch inventory written to: {}", path);
    Ok(())
}
