//! File reader with transparent decompression.
//!
//! Inventory files are usually plain text, but archived copies are often
//! kept compressed. The reader picks a decoder from the file extension:
//!
//! - `.gz` → Gzip
//! - `.zst` → Zstandard
//! - anything else → plain file
//!
//! # Examples
//!
//! ```no_run
//! use compass_utils::utils::reader::open_file;
//! use std::io::{BufRead, BufReader};
//!
//! let reader = BufReader::new(open_file("switches.csv.gz").unwrap());
//! for line in reader.lines() {
//!     let line = line.unwrap();
//!     // ...
//! }
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;

/// Opens `path` and wraps it in a decoder chosen by extension.
pub fn open_file(path: impl AsRef<Path>) -> io::Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => Ok(Box::new(zstd::Decoder::new(file)?)),
        _ => Ok(Box::new(file)),
    }
}
