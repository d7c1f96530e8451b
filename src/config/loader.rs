use crate::utils::merge::merge_into;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_SUFFIX: &str = ".conf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{} must contain a mapping at the top level", .path.display())]
    NotAMapping { path: PathBuf },
}

/// Options for [`load_configs`].
#[derive(Debug, Clone)]
pub struct ConfigLoadOptions {
    /// Only file names ending with this suffix are loaded
    pub suffix: String,
    /// Values every loaded config starts from; file values override them
    pub defaults: Map<String, Value>,
}

impl Default for ConfigLoadOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_CONFIG_SUFFIX.to_string(),
            defaults: Map::new(),
        }
    }
}

impl ConfigLoadOptions {
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_defaults(mut self, defaults: Map<String, Value>) -> Self {
        self.defaults = defaults;
        self
    }
}

/// One configuration file and the values it defines.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub values: Map<String, Value>,
}

impl LoadedConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Load every `*<suffix>` file in `config_dir`.
///
/// Files are YAML (JSON is accepted as well) and are read in file name
/// order. A missing directory yields an empty list.
///
/// # Example
///
/// ```no_run
/// use compass_utils::config::{load_configs, ConfigLoadOptions};
///
/// # fn main() -> Result<(), compass_utils::config::ConfigError> {
/// let configs = load_configs("/etc/compass/os_installer", &ConfigLoadOptions::default())?;
/// for config in &configs {
///     println!("{}: {:?}", config.path.display(), config.get("NAME"));
/// }
/// # Ok(())
/// # }
/// ```
pub fn load_configs(
    config_dir: impl AsRef<Path>,
    options: &ConfigLoadOptions,
) -> Result<Vec<LoadedConfig>, ConfigError> {
    let config_dir = config_dir.as_ref();
    if !config_dir.exists() {
        tracing::debug!(path = %config_dir.display(), "config directory does not exist");
        return Ok(Vec::new());
    }

    let io_error = |path: &Path, source: io::Error| {
        tracing::error!(path = %path.display(), error = %source, "cannot read config");
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(config_dir).map_err(|e| io_error(config_dir, e))? {
        let entry = entry.map_err(|e| io_error(config_dir, e))?;
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&options.suffix));
        if matches {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut configs = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let values = parse_config(&path, &content, &options.defaults)?;
        configs.push(LoadedConfig { path, values });
    }

    Ok(configs)
}

fn parse_config(
    path: &Path,
    content: &str,
    defaults: &Map<String, Value>,
) -> Result<Map<String, Value>, ConfigError> {
    let parsed: Value = if content.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_yaml::from_str::<Value>(content).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "invalid config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?
    };

    let parsed = match parsed {
        Value::Object(map) => Value::Object(map),
        Value::Null => Value::Object(Map::new()),
        _ => {
            tracing::error!(path = %path.display(), "config is not a mapping");
            return Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            });
        }
    };

    let mut merged = Value::Object(defaults.clone());
    merge_into(&mut merged, parsed, true);

    match merged {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("defaults must be an object"),
        }
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let path = Path::new("a.conf");
        let yaml = parse_config(path, "NAME: cobbler\nSETTINGS:\n  port: 80\n", &Map::new()).unwrap();
        assert_eq!(yaml["NAME"], json!("cobbler"));
        assert_eq!(yaml["SETTINGS"], json!({"port": 80}));

        let from_json = parse_config(path, r#"{"NAME": "chef"}"#, &Map::new()).unwrap();
        assert_eq!(from_json["NAME"], json!("chef"));
    }

    #[test]
    fn test_defaults_are_overridden_and_kept() {
        let base = defaults(json!({"NAME": "default", "SETTINGS": {"port": 80, "tls": false}}));
        let values =
            parse_config(Path::new("a.conf"), "SETTINGS:\n  tls: true\n", &base).unwrap();

        assert_eq!(values["NAME"], json!("default"));
        assert_eq!(values["SETTINGS"], json!({"port": 80, "tls": true}));
        assert_eq!(base["SETTINGS"]["tls"], json!(false));
    }

    #[test]
    fn test_empty_document() {
        let values = parse_config(Path::new("a.conf"), "\n", &Map::new()).unwrap();
        assert!(values.is_empty());
        let values = parse_config(Path::new("a.conf"), "~\n", &Map::new()).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_rejects_non_mapping() {
        assert!(matches!(
            parse_config(Path::new("a.conf"), "- 1\n- 2\n", &Map::new()),
            Err(ConfigError::NotAMapping { .. })
        ));
        assert!(matches!(
            parse_config(Path::new("a.conf"), "key: [unclosed\n", &Map::new()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
