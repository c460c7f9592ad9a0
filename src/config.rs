//! Configuration management for the filesystem simulator
//!
//! Resolves where the default layout document and the physical file
//! content live. Both are configuration values, never hardcoded into the
//! core.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Simulator settings loaded at startup
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Default disk layout document applied at table construction
    pub layout_path: String,

    /// Base directory where real file content is stored on the host
    pub files_root: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout_path: "layouts/disks_layout.json".to_string(),
            files_root: "files".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` with `SIMFS_*` environment
    /// overrides. Every value has a default, so a missing file is fine.
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("layout_path", defaults.layout_path)?
            .set_default("files_root", defaults.files_root)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("SIMFS"))
            .build()?
            .try_deserialize()
    }
}
