use super::{RemoteAuth, RemoteCommand, RemoteExecError};
use russh::client::{self, Handle, Handler};
use russh::keys::{load_secret_key, PrivateKey, PrivateKeyWithHashAlg};
use russh::{ChannelMsg, Disconnect};
use std::path::Path;
use std::sync::Arc;

/// Accepts every host key, logging it on first contact.
struct AcceptAnyHostKey {
    host: String,
}

impl Handler for AcceptAnyHostKey {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &russh::keys::PublicKey,
    ) -> Result<bool, Self::Error> {
        tracing::debug!(
            host = %self.host,
            algorithm = %server_public_key.algorithm(),
            "accepting host key"
        );
        Ok(true)
    }
}

/// Credentials resolved before any connection is made.
enum Credential<'a> {
    Password(&'a str),
    Key(Arc<PrivateKey>),
}

impl<'a> Credential<'a> {
    fn load(auth: &'a RemoteAuth) -> Result<Self, RemoteExecError> {
        match auth {
            RemoteAuth::Password(password) => Ok(Self::Password(password.as_str())),
            RemoteAuth::KeyFile(path) => Ok(Self::Key(Arc::new(load_key(path)?))),
        }
    }
}

/// Connect, authenticate, run `command_line` and return its stdout.
///
/// The key file is read before connecting. The session is disconnected on
/// every path once it has been opened.
pub(super) async fn run_command(
    cmd: &RemoteCommand,
    command_line: &str,
) -> Result<String, RemoteExecError> {
    let credential = Credential::load(&cmd.auth)?;
    let (addr, port) = cmd.address();
    let config = Arc::new(client::Config::default());
    let handler = AcceptAnyHostKey { host: addr.clone() };

    let mut handle = client::connect(config, (addr.as_str(), port), handler)
        .await
        .map_err(connection_error)?;

    let result = authenticate_and_exec(&mut handle, &cmd.username, credential, command_line).await;

    if let Err(e) = handle
        .disconnect(Disconnect::ByApplication, "", "en")
        .await
    {
        tracing::debug!(error = %e, "ignoring error while closing session");
    }

    result
}

async fn authenticate_and_exec(
    handle: &mut Handle<AcceptAnyHostKey>,
    username: &str,
    credential: Credential<'_>,
    command_line: &str,
) -> Result<String, RemoteExecError> {
    authenticate(handle, username, credential).await?;

    let mut channel = handle
        .channel_open_session()
        .await
        .map_err(connection_error)?;

    let exec = async {
        channel.exec(true, command_line).await?;

        let mut stdout = Vec::new();
        while let Some(msg) = channel.wait().await {
            match msg {
                ChannelMsg::Data { ref data } => stdout.extend_from_slice(data),
                ChannelMsg::ExitStatus { exit_status } => {
                    tracing::debug!(exit_status, "remote command exited");
                }
                _ => {}
            }
        }
        Ok::<_, russh::Error>(stdout)
    }
    .await;

    if let Err(e) = channel.close().await {
        tracing::debug!(error = %e, "ignoring error while closing channel");
    }

    let stdout = exec.map_err(connection_error)?;
    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

async fn authenticate(
    handle: &mut Handle<AcceptAnyHostKey>,
    username: &str,
    credential: Credential<'_>,
) -> Result<(), RemoteExecError> {
    let accepted = match credential {
        Credential::Password(password) => handle
            .authenticate_password(username, password)
            .await
            .map_err(connection_error)?,
        Credential::Key(key) => {
            let hash_alg = handle
                .best_supported_rsa_hash()
                .await
                .map_err(connection_error)?
                .flatten();
            handle
                .authenticate_publickey(
                    username,
                    PrivateKeyWithHashAlg::new(key, hash_alg),
                )
                .await
                .map_err(connection_error)?
        }
    };

    if accepted.success() {
        Ok(())
    } else {
        Err(RemoteExecError::Connection(format!(
            "authentication rejected for user {username}"
        )))
    }
}

fn load_key(path: &Path) -> Result<PrivateKey, RemoteExecError> {
    load_secret_key(path, None).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "cannot load key file");
        RemoteExecError::Key {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

fn connection_error(e: russh::Error) -> RemoteExecError {
    RemoteExecError::Connection(e.to_string())
}
