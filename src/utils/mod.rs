//! Standalone helper functions.
//!
//! - [`time`] - Datetime, datetime range and time interval parsing
//! - [`merge`] - Recursive merge of nested JSON mappings
//! - [`args`] - `name=value;...` request argument parsing
//! - [`crypt`] - Password hashing and verification
//! - [`types`] - Kind checks for JSON values
//! - [`reader`] - File reader with automatic decompression
//! - [`parallel`] - Ordered parallel processing of several files
//!
//! # Examples
//!
//! ## Parsing a time interval
//!
//! ```
//! use compass_utils::utils::time::parse_time_interval;
//!
//! assert_eq!(parse_time_interval("1h 30m"), 5400.0);
//! ```
//!
//! ## Merging settings
//!
//! ```
//! use compass_utils::utils::merge::merge_dict;
//! use serde_json::json;
//!
//! let merged = merge_dict(json!({"a": 1}), json!({"b": 2}), true);
//! assert_eq!(merged, json!({"a": 1, "b": 2}));
//! ```

pub mod args;
pub mod crypt;
pub mod error;
pub mod merge;
pub mod parallel;
pub mod reader;
pub mod time;
pub mod types;

pub use error::ParseError;
