//! Declarative configuration directory loading.
//!
//! A configuration directory holds one file per named parameter set (for
//! example one file per OS installer or package installer). Each file is a
//! YAML or JSON mapping; nothing in it is executed.

pub mod loader;

pub use loader::{load_configs, ConfigError, ConfigLoadOptions, LoadedConfig, DEFAULT_CONFIG_SUFFIX};
