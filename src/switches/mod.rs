//! Switch inventory file parsing.
//!
//! A switch file lists the network switches to register and the machine
//! ports already known on each of them.
//!
//! ```no_run
//! use compass_utils::switches::get_switch_machines_from_file;
//!
//! let inventory = get_switch_machines_from_file("switches.csv").unwrap();
//! for switch in &inventory.switches {
//!     println!("{} ({} machines)", switch.ip, inventory.machines_on(&switch.ip).len());
//! }
//! ```

pub mod parser;
pub mod types;

pub use parser::{
    get_switch_machines_from_file, get_switch_machines_from_files, parse_switch_lines,
    SwitchFileError,
};
pub use types::{MachinePort, SwitchCredentials, SwitchInventory, SwitchRecord};
