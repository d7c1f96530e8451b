//! # Compass Utils
//!
//! Helper utilities shared by the Compass provisioning tool and a small CLI,
//! `compass-util`, that exposes each of them.
//!
//! ## Overview
//!
//! The helpers are independent and stateless: each call parses or builds a
//! value and returns it. None of them keep state between calls.
//!
//! ## Features
//!
//! - **Datetime parsing** - strict `YYYY-MM-DD HH:MM:SS` values and `start,end` ranges
//! - **Time intervals** - `1w 2d -3h 30m 15s` to total seconds
//! - **Recursive merge** - nested JSON mappings with override or keep-existing policy
//! - **Request arguments** - `name=value;name=value` strings to maps
//! - **Password hashing** - Argon2id with random or caller supplied salts
//! - **Switch inventory files** - switch and machine port records, plain or compressed,
//!   several files in parallel
//! - **Config directories** - declarative YAML/JSON parameter sets merged over defaults
//! - **Remote execution** - run a command over SSH and collect its output
//!
//! ## Architecture
//!
//! - [`utils`] - Parsing, merging, hashing and file helpers
//! - [`switches`] - Switch inventory file parser and record types
//! - [`config`] - Configuration directory loader
//! - [`remote`] - SSH command execution
//! - [`commands`] - CLI command implementations
//!
//! ## Example Usage
//!
//! ```bash
//! compass-util interval 1d 2h
//! compass-util parse-range "2014-06-01 00:00:00,"
//! compass-util switches rack1.csv rack2.csv.gz --output inventory.json
//! compass-util load-configs /etc/compass/os_installer
//! compass-util exec --host 10.145.88.1 --user root --password root "cobbler sync"
//! ```
//!
//! ## Logging
//!
//! Library code logs through [`tracing`]. The CLI writes logs to stderr at
//! `warn` by default; each `-v` raises the level and `RUST_LOG` overrides it.

pub mod commands;
pub mod config;
pub mod remote;
pub mod switches;
pub mod utils;
