//! CLI configuration.

use std::collections::HashMap;

use anyhow::{Context, Result};
use campus_commerce::EngineConfig;
use campus_store::cache_key;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Local storage configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Profile-specific overrides.
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Get profile-specific config.
    ///
    /// A profile without an explicit `storage_key` gets its own cart under
    /// `<storage_key>:<profile>`.
    pub fn for_profile(&self, profile: &str) -> CliConfig {
        let mut config = self.clone();

        let storage_key = self
            .profiles
            .get(profile)
            .and_then(|p| p.storage_key.clone())
            .unwrap_or_else(|| cache_key!(self.engine.storage_key.as_str(), profile));
        config.engine.storage_key = storage_key;

        config
    }
}

/// Where the CLI keeps its blob files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory for the file store, relative to the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".campus".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Profile-specific configuration overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Storage key override for this profile's cart.
    #[serde(default)]
    pub storage_key: Option<String>,
}

/// Generate a default campus.toml config file.
pub fn generate_default_config() -> String {
    r#"# Campus marketplace configuration

[engine]
storage_key = "unibuy_cart"
currency = "NGN"
default_page_size = 20
related_limit = 4

[store]
data_dir = ".campus"

# Per-profile carts. Without an entry a profile uses "<storage_key>:<profile>".
# [profiles.roommate]
# storage_key = "roommate_cart"
"#
    .to_string()
}
