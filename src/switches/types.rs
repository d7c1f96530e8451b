//! Records produced by the switch inventory parser.
//!
//! These serialize to the same shape the provisioning API expects for
//! switch and machine registration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SNMP credentials for a switch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwitchCredentials {
    /// SNMP version, e.g. "v2c"
    pub version: String,
    pub community: String,
}

/// One `switch` line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwitchRecord {
    pub ip: String,
    pub vendor: String,
    pub credentials: SwitchCredentials,
    pub state: String,
}

/// One `machine` line, keyed by its switch IP in [`SwitchInventory::machines`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MachinePort {
    pub mac: String,
    pub port: String,
}

/// Everything read from one or more switch files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwitchInventory {
    pub switches: Vec<SwitchRecord>,
    /// Switch IP to the machines seen on it, in file order
    pub machines: BTreeMap<String, Vec<MachinePort>>,
}

impl SwitchInventory {
    pub fn add_machine(&mut self, switch_ip: impl Into<String>, machine: MachinePort) {
        self.machines.entry(switch_ip.into()).or_default().push(machine);
    }

    /// Append `other` after the records already held.
    pub fn extend(&mut self, other: SwitchInventory) {
        self.switches.extend(other.switches);
        for (ip, ports) in other.machines {
            self.machines.entry(ip).or_default().extend(ports);
        }
    }

    pub fn machine_count(&self) -> usize {
        self.machines.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty() && self.machines.is_empty()
    }

    /// Machines attached to the switch at `ip`.
    pub fn machines_on(&self, ip: &str) -> &[MachinePort] {
        self.machines.get(ip).map(Vec::as_slice).unwrap_or(&[])
    }
}
