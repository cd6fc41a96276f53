//! Configuration schema types for Multiview.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the portal ships with.

mod layout;
mod player;
mod schedule;
mod session;
mod system;

pub use layout::*;
pub use player::*;
pub use schedule::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Multiview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MultiviewConfig {
    pub layout: LayoutConfig,
    pub session: SessionConfig,
    pub share: ShareConfig,
    pub player: PlayerConfig,
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
