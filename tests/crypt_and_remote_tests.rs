use compass_utils::remote::{execute_cli_by_ssh, RemoteAuth, RemoteCommand, RemoteExecError};
use compass_utils::utils::crypt::{encrypt, verify, CryptError};
use std::path::PathBuf;

#[test]
fn test_hash_verifies() {
    let hash = encrypt("root", None).unwrap();
    assert!(verify("root", &hash).unwrap());
    assert!(!verify("Root", &hash).unwrap());
}

#[test]
fn test_same_salt_same_hash() {
    let a = encrypt("compass", Some("Y29tcGFzc3NhbHQ")).unwrap();
    let b = encrypt("compass", Some("Y29tcGFzc3NhbHQ")).unwrap();
    let c = encrypt("compass", Some("b3RoZXJzYWx0")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_malformed_hash() {
    assert!(matches!(verify("root", "$1$abc"), Err(CryptError::InvalidHash(_))));
}

#[tokio::test]
async fn test_empty_command_rejected_before_connecting() {
    // 192.0.2.0/24 is reserved for documentation; nothing should be contacted
    let cmd = RemoteCommand::new("", "192.0.2.10", "root")
        .with_auth(RemoteAuth::Password("root".to_string()));
    let err = execute_cli_by_ssh(&cmd).await.unwrap_err();
    assert!(matches!(err, RemoteExecError::MissingCommand));
    assert_eq!(err.to_string(), "No command found!");
}

#[test]
fn test_remote_command_defaults() {
    let cmd = RemoteCommand::new("chef-client", "10.145.88.1:2222", "root").nowait(true);
    assert_eq!(cmd.auth, RemoteAuth::KeyFile(PathBuf::from("/root/.ssh/id_rsa")));
    assert_eq!(cmd.address(), ("10.145.88.1".to_string(), 2222));
    assert_eq!(cmd.command_line(), "nohup chef-client >/dev/null 2>&1 &");
}
