//! Remote control of embedded players.
//!
//! Embeds are driven over `postMessage`: a [`PlayerCommand`] is encoded
//! into the platform's message dialect ([`post_message_for`]) and handed
//! to a [`MessageSink`]. [`PlayerRegistry`] fans commands out to every
//! registered player and tracks what the embeds report back.

pub mod command;
pub mod control;
pub mod events;
pub mod registry;
pub mod sink;

pub use command::{post_message_for, PlayerCommand, PostMessage};
pub use control::{EmbedPlayer, PlayerControl};
pub use events::{PlaybackState, PlayerEvent, PlayerStatus};
pub use registry::{BatchReport, PlayerRegistry};
pub use sink::{drain_scripts, js_post_message, MessageSink, RecordingSink, ScriptQueue, ScriptSink};
