/// CLI configuration
use crate::error::{CliError, Result};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};
use slotlist_spotify::{ApiConfig, DEFAULT_BASE_URL};
use slotlist_sync::SyncConfig;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "slotlist.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SlotlistConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub access_token: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: String::new(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl SlotlistConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `slotlist.toml` is read when
    /// present. `SLOTLIST_`-prefixed variables override both, with `__`
    /// between section and key (e.g. `SLOTLIST_API__ACCESS_TOKEN`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SLOTLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(settings)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(text, config::FileFormat::Toml)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.access_token.trim().is_empty() {
            return Err(CliError::Config(
                "API access token is required (set SLOTLIST_API__ACCESS_TOKEN)".to_string(),
            ));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(CliError::Config(format!(
                "API base URL must be http(s): {}",
                self.api.base_url
            )));
        }

        if self.sync.interval_secs == 0 {
            return Err(CliError::Config(
                "sync.interval_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::with_base_url(&self.api.base_url, &self.api.access_token)
    }
}
