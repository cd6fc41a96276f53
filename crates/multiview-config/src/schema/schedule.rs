//! Schedule aggregation configuration.

use serde::{Deserialize, Serialize};

/// How scheduled streams are grouped into time blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Display timezone as minutes east of UTC (valid range: -720 to 840).
    pub utc_offset_minutes: i32,
    /// Width of one time block in hours (valid range: 1-24).
    pub block_hours: u32,
    /// Query the previous day when the requested day has no streams.
    pub fallback_to_previous_day: bool,
    /// JSON file the schedule is read from.
    pub source_path: Option<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 540,
            block_hours: 1,
            fallback_to_previous_day: true,
            source_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.utc_offset_minutes, 540);
        assert_eq!(config.block_hours, 1);
        assert!(config.fallback_to_previous_day);
        assert!(config.source_path.is_none());
    }

    #[test]
    fn schedule_partial_toml() {
        let config: ScheduleConfig = toml::from_str("block_hours = 3\nsource_path = \"s.json\"").unwrap();
        assert_eq!(config.block_hours, 3);
        assert_eq!(config.source_path.as_deref(), Some("s.json"));
        assert_eq!(config.utc_offset_minutes, 540);
    }
}
