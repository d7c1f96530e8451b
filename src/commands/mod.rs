//! Command implementations for the `compass-util` CLI.
//!
//! Each module wraps one library utility, printing results to stdout and
//! progress or summaries to stderr.
//!
//! ## Parsing
//!
//! - [`datetime`] - `parse-datetime` and `parse-range`
//! - [`interval`] - `interval`, time interval to seconds
//! - [`args`] - `parse-args`, `name=value;...` strings
//!
//! ## Data
//!
//! - [`merge`] - `merge`, recursive JSON merge
//! - [`switches`] - `switches`, switch inventory import and export
//! - [`configs`] - `load-configs`, configuration directory loading
//!
//! ## Security and remote hosts
//!
//! - [`crypt`] - `encrypt` and `verify`
//! - [`exec`] - `exec`, run a command over SSH

pub mod args;
pub mod configs;
pub mod crypt;
pub mod datetime;
pub mod exec;
pub mod interval;
pub mod merge;
pub mod switches;
