//! Time interval conversion.
//!
//! ```bash
//! compass-util interval 1d 2h      # 93600
//! compass-util interval "1w -1d"   # 518400
//! ```

use crate::utils::time::parse_time_interval;
use anyhow::Result;

pub fn run(tokens: &[String]) -> Result<()> {
    let seconds = parse_time_interval(&tokens.join(" "));
    println!("{}", seconds);
    Ok(())
}
