use serde::{Deserialize, Serialize};

/// Defaults applied to embedded players.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume (valid range: 0-100).
    pub default_volume: u32,
    pub start_muted: bool,
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_volume: 50,
            start_muted: true,
            autoplay: true,
        }
    }
}
