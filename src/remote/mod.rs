//! Remote command execution over SSH.
//!
//! [`execute_cli_by_ssh`] opens one session, runs one command and returns
//! its standard output split into lines. The SSH client is
//! [russh](https://docs.rs/russh) and is only compiled with the `ssh`
//! feature (on by default); without it every call fails with
//! [`RemoteExecError::ClientUnavailable`].
//!
//! ```no_run
//! use compass_utils::remote::{execute_cli_by_ssh, RemoteAuth, RemoteCommand};
//!
//! # async fn example() -> Result<(), compass_utils::remote::RemoteExecError> {
//! let cmd = RemoteCommand::new("uname -a", "10.145.88.1", "root")
//!     .with_auth(RemoteAuth::Password("root".to_string()));
//! let lines = execute_cli_by_ssh(&cmd).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "ssh")]
mod session;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Key file used when no password is given.
pub const DEFAULT_KEY_FILE: &str = "/root/.ssh/id_rsa";

pub const DEFAULT_SSH_PORT: u16 = 22;

#[derive(Debug, Error)]
pub enum RemoteExecError {
    #[error("No command found!")]
    MissingCommand,

    #[error("SSH client support is not compiled in (enable the `ssh` feature)")]
    ClientUnavailable,

    #[error("SSH connection error or command execution failed: {0}")]
    Connection(String),

    #[error("cannot load key file {}: {reason}", .path.display())]
    Key { path: PathBuf, reason: String },
}

/// How to authenticate to the remote host.
#[derive(Clone, PartialEq, Eq)]
pub enum RemoteAuth {
    Password(String),
    KeyFile(PathBuf),
}

impl Default for RemoteAuth {
    fn default() -> Self {
        Self::KeyFile(PathBuf::from(DEFAULT_KEY_FILE))
    }
}

impl fmt::Debug for RemoteAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password(_) => f.write_str("Password(****)"),
            Self::KeyFile(path) => f.debug_tuple("KeyFile").field(path).finish(),
        }
    }
}

/// A command to run on a remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    pub command: String,
    /// `host` or `host:port`
    pub host: String,
    pub username: String,
    pub auth: RemoteAuth,
    /// Detach the command with `nohup ... &` and return immediately
    pub nowait: bool,
}

impl RemoteCommand {
    pub fn new(
        command: impl Into<String>,
        host: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            host: host.into(),
            username: username.into(),
            auth: RemoteAuth::default(),
            nowait: false,
        }
    }

    pub fn with_auth(mut self, auth: RemoteAuth) -> Self {
        self.auth = auth;
        self
    }

    pub fn nowait(mut self, nowait: bool) -> Self {
        self.nowait = nowait;
        self
    }

    /// The command line actually sent to the remote shell.
    pub fn command_line(&self) -> String {
        if self.nowait {
            format!("nohup {} >/dev/null 2>&1 &", self.command)
        } else {
            self.command.clone()
        }
    }

    /// Split `host` into address and port, defaulting to port 22.
    pub fn address(&self) -> (String, u16) {
        split_host_port(&self.host)
    }
}

fn split_host_port(host: &str) -> (String, u16) {
    // Bracketed IPv6, e.g. [fe80::1]:2222
    if let Some(rest) = host.strip_prefix('[') {
        if let Some((addr, tail)) = rest.split_once(']') {
            let port = tail
                .strip_prefix(':')
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SSH_PORT);
            return (addr.to_string(), port);
        }
    }

    match host.rsplit_once(':') {
        Some((addr, port)) if !addr.contains(':') => match port.parse() {
            Ok(port) => (addr.to_string(), port),
            Err(_) => (host.to_string(), DEFAULT_SSH_PORT),
        },
        _ => (host.to_string(), DEFAULT_SSH_PORT),
    }
}

/// Run `cmd` on its remote host and return the stdout lines.
///
/// An empty command is rejected before any connection is attempted.
pub async fn execute_cli_by_ssh(cmd: &RemoteCommand) -> Result<Vec<String>, RemoteExecError> {
    if cmd.command.trim().is_empty() {
        tracing::error!("No command found!");
        return Err(RemoteExecError::MissingCommand);
    }

    let command_line = cmd.command_line();
    let result = run(cmd, &command_line).await;

    match &result {
        Ok(lines) => {
            tracing::info!(command = %command_line, host = %cmd.host, lines = lines.len(), "remote command finished");
        }
        Err(e) => {
            tracing::error!(command = %command_line, host = %cmd.host, error = %e, "remote command failed");
        }
    }
    result
}

#[cfg(feature = "ssh")]
async fn run(cmd: &RemoteCommand, command_line: &str) -> Result<Vec<String>, RemoteExecError> {
    let output = session::run_command(cmd, command_line).await?;
    Ok(output.lines().map(str::to_string).collect())
}

#[cfg(not(feature = "ssh"))]
async fn run(_cmd: &RemoteCommand, _command_line: &str) -> Result<Vec<String>, RemoteExecError> {
    Err(RemoteExecError::ClientUnavailable)
}
