//! Multiview configuration system.
//!
//! Provides TOML-based configuration for layout geometry, session
//! persistence, share links, player defaults, and schedule bucketing.
//! All config sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use multiview_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{MultiviewConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{save_config, save_config_to_path};

use multiview_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default config file if none exists.
pub fn load_config() -> Result<MultiviewConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MultiviewConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
