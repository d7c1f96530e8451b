use compass_utils::config::{load_configs, ConfigError, ConfigLoadOptions};
use serde_json::{json, Map, Value};
use std::fs;
use tempfile::TempDir;

fn defaults(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_missing_directory_is_empty() {
    let configs = load_configs("/nonexistent/compass/conf", &ConfigLoadOptions::default()).unwrap();
    assert!(configs.is_empty());
}

#[test]
fn test_loads_suffix_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.conf"), "NAME: chef\n").unwrap();
    fs::write(dir.path().join("a.conf"), "NAME: cobbler\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "NAME: ignored\n").unwrap();

    let configs = load_configs(dir.path(), &ConfigLoadOptions::default()).unwrap();

    let names: Vec<&Value> = configs.iter().filter_map(|c| c.get("NAME")).collect();
    assert_eq!(names, vec![&json!("cobbler"), &json!("chef")]);
    assert!(configs[0].path.ends_with("a.conf"));
}

#[test]
fn test_custom_suffix_and_json_content() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("os.json"), r#"{"NAME": "cobbler", "PORT": 80}"#).unwrap();
    fs::write(dir.path().join("os.conf"), "NAME: other\n").unwrap();

    let options = ConfigLoadOptions::default().with_suffix(".json");
    let configs = load_configs(dir.path(), &options).unwrap();

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].get("PORT"), Some(&json!(80)));
}

#[test]
fn test_defaults_are_fresh_per_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.conf"),
        "SETTINGS:\n  url: http://10.0.0.1/cobbler_api\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.conf"), "NAME: b\n").unwrap();

    let options = ConfigLoadOptions::default().with_defaults(defaults(json!({
        "NAME": "default",
        "SETTINGS": {"url": "http://localhost", "token": "abc"}
    })));
    let configs = load_configs(dir.path(), &options).unwrap();

    assert_eq!(configs[0].get("NAME"), Some(&json!("default")));
    assert_eq!(
        configs[0].get("SETTINGS"),
        Some(&json!({"url": "http://10.0.0.1/cobbler_api", "token": "abc"}))
    );
    assert_eq!(configs[1].get("NAME"), Some(&json!("b")));
    assert_eq!(
        configs[1].get("SETTINGS"),
        Some(&json!({"url": "http://localhost", "token": "abc"}))
    );
}

#[test]
fn test_invalid_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.conf"), "NAME: [unclosed\n").unwrap();

    let err = load_configs(dir.path(), &ConfigLoadOptions::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.conf"));
}

#[test]
fn test_list_document_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.conf"), "- a\n- b\n").unwrap();

    let err = load_configs(dir.path(), &ConfigLoadOptions::default()).unwrap_err();
    assert!(matches!(err, ConfigError::NotAMapping { .. }));
}
