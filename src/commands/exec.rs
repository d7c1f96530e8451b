//! Remote command execution.
//!
//! ```bash
//! compass-util exec --host 10.145.88.1 --user root --password root "cobbler sync"
//! compass-util exec --host 10.145.88.1 --user root --keyfile ~/.ssh/id_ed25519 --nowait "chef-client"
//! ```

use crate::remote::{execute_cli_by_ssh, RemoteAuth, RemoteCommand};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub async fn run(
    command: &str,
    host: &str,
    user: &str,
    password: Option<&str>,
    keyfile: Option<&str>,
    nowait: bool,
) -> Result<()> {
    let auth = match (password, keyfile) {
        (Some(password), _) => RemoteAuth::Password(password.to_string()),
        (None, Some(keyfile)) => RemoteAuth::KeyFile(PathBuf::from(keyfile)),
        (None, None) => RemoteAuth::default(),
    };

    let cmd = RemoteCommand::new(command, host, user)
        .with_auth(auth)
        .nowait(nowait);

    let lines = execute_cli_by_ssh(&cmd)
        .await
        .with_context(|| format!("Failed to run command on {}", host))?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
