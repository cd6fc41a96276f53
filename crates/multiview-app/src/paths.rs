use std::path::PathBuf;

use multiview_common::MultiviewError;
use multiview_config::MultiviewConfig;

const APP_NAME: &str = "multiview";

/// Platform data directory for Multiview.
///
/// - Linux: `$XDG_DATA_HOME/multiview` (defaults to `~/.local/share/multiview`)
/// - macOS: `~/Library/Application Support/multiview`
/// - Windows: `%APPDATA%\multiview`
pub fn data_dir() -> Result<PathBuf, MultiviewError> {
    dirs::data_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or_else(|| MultiviewError::Other("could not determine data directory".into()))
}

/// Directory holding persisted sessions: `session.storage_dir` when set,
/// otherwise `data_dir()/sessions`.
pub fn session_dir(config: &MultiviewConfig) -> Result<PathBuf, MultiviewError> {
    match &config.session.storage_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(data_dir()?.join("sessions")),
    }
}
