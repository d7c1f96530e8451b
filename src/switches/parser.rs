use super::types::{MachinePort, SwitchCredentials, SwitchInventory, SwitchRecord};
use crate::utils::parallel::process_files_parallel;
use crate::utils::reader::open_file;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SWITCH_FIELDS: usize = 5;
const MACHINE_FIELDS: usize = 3;

#[derive(Debug, Error)]
pub enum SwitchFileError {
    #[error("failed to read switch file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: `{kind}` record needs {expected} fields after the kind, found {found}")]
    ColumnCount {
        line: usize,
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Read a switch inventory file.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. The first
/// comma separated column selects the record kind:
///
/// ```text
/// switch,<ip>,<vendor>,<snmp version>,<community>,<state>
/// machine,<switch ip>,<port>,<mac>
/// ```
///
/// Unknown kinds are ignored. `.gz` and `.zst` files are decompressed.
pub fn get_switch_machines_from_file(
    path: impl AsRef<Path>,
) -> Result<SwitchInventory, SwitchFileError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| {
        tracing::error!(path = %path.display(), error = %source, "cannot read switch file");
        SwitchFileError::Io {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = open_file(path).map_err(io_error)?;
    let inventory = parse_switch_lines(BufReader::new(file)).map_err(|e| match e {
        SwitchFileError::Read { source, .. } => io_error(source),
        other => {
            tracing::error!(path = %path.display(), error = %other, "malformed switch file");
            other
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        switches = inventory.switches.len(),
        machines = inventory.machine_count(),
        "loaded switch file"
    );
    Ok(inventory)
}

/// Read several switch files in parallel and combine them in argument order.
///
/// Returns `anyhow::Result` because the error chain names the failing file
/// on top of its [`SwitchFileError`], which stays reachable with
/// `downcast_ref`. An empty path list is an error.
pub fn get_switch_machines_from_files<P>(paths: &[P]) -> anyhow::Result<SwitchInventory>
where
    P: AsRef<Path> + Sync,
{
    let results = process_files_parallel(paths, |path| Ok(get_switch_machines_from_file(path)?))?;

    let mut inventory = SwitchInventory::default();
    for result in results {
        inventory.extend(result.data);
    }
    Ok(inventory)
}

/// Parse switch file content from any buffered reader.
///
/// Read failures come back as [`SwitchFileError::Read`] with the 1-based
/// line number.
pub fn parse_switch_lines<R: BufRead>(reader: R) -> Result<SwitchInventory, SwitchFileError> {
    let mut inventory = SwitchInventory::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| SwitchFileError::Read {
            line: line_no,
            source,
        })?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = line.split(',').collect();
        let fields = &columns[1..];

        match columns[0] {
            "switch" => {
                let [ip, vendor, version, community, state] =
                    expect_fields::<SWITCH_FIELDS>(fields, line_no, "switch")?;
                inventory.switches.push(SwitchRecord {
                    ip: ip.to_string(),
                    vendor: vendor.to_string(),
                    credentials: SwitchCredentials {
                        version: version.to_string(),
                        community: community.to_string(),
                    },
                    state: state.to_string(),
                });
            }
            "machine" => {
                let [switch_ip, port, mac] =
                    expect_fields::<MACHINE_FIELDS>(fields, line_no, "machine")?;
                inventory.add_machine(
                    switch_ip,
                    MachinePort {
                        mac: mac.to_string(),
                        port: port.to_string(),
                    },
                );
            }
            other => {
                tracing::debug!(line = line_no, kind = other, "ignoring unknown record kind");
            }
        }
    }

    Ok(inventory)
}

fn expect_fields<'a, const N: usize>(
    fields: &[&'a str],
    line: usize,
    kind: &'static str,
) -> Result<[&'a str; N], SwitchFileError> {
    <[&str; N]>::try_from(fields).map_err(|_| SwitchFileError::ColumnCount {
        line,
        kind,
        expected: N,
        found: fields.len(),
    })
}
