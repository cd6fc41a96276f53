//! Write MultiviewConfig to TOML on disk.
//!
//! Writes go to a `.tmp` file that is then renamed over the target, so a
//! crash mid-write never leaves a truncated config behind.

use std::path::Path;

use multiview_common::ConfigError;

use crate::schema::MultiviewConfig;
use crate::toml_loader::default_config_path;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to the platform default path (`~/.config/multiview/config.toml`).
pub fn save_config(config: &MultiviewConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories as needed.
pub fn save_config_to_path(config: &MultiviewConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail across filesystems or on Windows when the target is open
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
    }

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toml_loader::load_from_path;
    use multiview_common::LayoutType;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = MultiviewConfig::default();
        config.layout.default_type = LayoutType::PictureInPicture;
        config.player.default_volume = 80;
        save_config_to_path(&config, &path).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.layout.default_type, LayoutType::PictureInPicture);
        assert_eq!(loaded.player.default_volume, 80);
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");

        save_config_to_path(&MultiviewConfig::default(), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
