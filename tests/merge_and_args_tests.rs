// Tests for merge_dict, parse_request_arg_dict and is_instance
use compass_utils::utils::args::parse_request_arg_dict;
use compass_utils::utils::merge::{merge_dict, merge_into};
use compass_utils::utils::types::{is_instance, ValueKind};
use compass_utils::utils::ParseError;
use serde_json::json;

#[test]
fn test_merge_adds_missing_keys() {
    assert_eq!(
        merge_dict(json!({"a": 1}), json!({"b": 2}), true),
        json!({"a": 1, "b": 2})
    );
}

#[test]
fn test_merge_recurses_into_mappings() {
    assert_eq!(
        merge_dict(json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), true),
        json!({"a": {"x": 1, "y": 2}})
    );
}

#[test]
fn test_merge_without_override_keeps_target() {
    assert_eq!(merge_dict(json!({"a": 1}), json!({"a": 2}), false), json!({"a": 1}));
}

#[test]
fn test_merge_into_cluster_config() {
    let mut cluster = json!({
        "networking": {"global": {"nameservers": "192.168.1.1", "search_path": "ods.com"}},
        "security": {"server_credentials": {"username": "root"}}
    });
    let host = json!({
        "networking": {"global": {"nameservers": "10.0.0.1"}},
        "roles": ["os-controller"]
    });

    merge_into(&mut cluster, host, true);

    assert_eq!(cluster["networking"]["global"]["nameservers"], json!("10.0.0.1"));
    assert_eq!(cluster["networking"]["global"]["search_path"], json!("ods.com"));
    assert_eq!(cluster["security"]["server_credentials"]["username"], json!("root"));
    assert_eq!(cluster["roles"], json!(["os-controller"]));
}

#[test]
fn test_arg_dict_splits_on_first_equals() {
    let args = parse_request_arg_dict("a=1;b=2=3").unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(args["a"], "1");
    assert_eq!(args["b"], "2=3");
}

#[test]
fn test_arg_dict_without_equals_fails() {
    let err = parse_request_arg_dict("noequals").unwrap_err();
    assert_eq!(err, ParseError::MissingArgSeparator("noequals".to_string()));
}

#[test]
fn test_is_instance() {
    let value = json!({"ports": [1, 2]});
    assert!(is_instance(&value, &[ValueKind::Object]));
    assert!(is_instance(&value["ports"], &[ValueKind::String, ValueKind::Array]));
    assert!(!is_instance(&value["ports"][0], &[ValueKind::String]));
}
