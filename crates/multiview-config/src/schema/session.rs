//! Session persistence and share-link configuration.

use serde::{Deserialize, Serialize};

/// How a multiview session is persisted between visits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Save the session after every change.
    pub persist: bool,
    /// Key the compact state is stored under.
    pub storage_key: String,
    /// Directory for the file store. Defaults to the platform data dir.
    pub storage_dir: Option<String>,
    /// Maximum streams per session (valid range: 1-9).
    pub max_streams: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            storage_key: "multiview-state".into(),
            storage_dir: None,
            max_streams: 9,
        }
    }
}

/// Share link configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Page URL that share links point at.
    pub base_url: String,
    /// Host passed to Twitch embeds as `parent`.
    pub embed_parent: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/multiview".into(),
            embed_parent: "localhost".into(),
        }
    }
}
