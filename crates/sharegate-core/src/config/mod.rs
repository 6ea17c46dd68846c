//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from a
//! JSON/TOML/YAML document, an optional environment overlay, and
//! `SHAREGATE__`-prefixed environment variables. Every field has a default,
//! so a missing document still yields a usable configuration.

pub mod app;
pub mod logging;
pub mod share;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::share::{ShareConfig, ShareProviderKind};

use crate::error::AppError;

/// File extensions probed when looking for the primary config document.
const CONFIG_EXTENSIONS: [&str; 4] = ["json", "toml", "yaml", "yml"];

/// Root application configuration.
///
/// Built once at startup and shared read-only (behind an `Arc`) with every
/// component that needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote share settings.
    #[serde(default, alias = "smb")]
    pub share: ShareConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `name` is a file path without extension (e.g. `"config"` picks up
    /// `config.json` or `config.toml`). The optional `config/<env>` overlay
    /// and environment variables prefixed with `SHAREGATE__` are applied on top.
    pub fn load(name: &str, env: &str) -> Result<Self, AppError> {
        if !Self::source_exists(name) {
            tracing::warn!(config = name, "Configuration file not found, using defaults");
        }

        let config = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHAREGATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Whether a document exists for `name`, with or without an extension.
    fn source_exists(name: &str) -> bool {
        Path::new(name).is_file()
            || CONFIG_EXTENSIONS
                .iter()
                .any(|ext| Path::new(&format!("{name}.{ext}")).is_file())
    }
}
