//! Multiview session state: the compact representation shared through
//! URLs and persisted between visits.
//!
//! - [`compact`]: the minimal state object and its wire form
//! - [`codec`]: base64 encoding for the `state` URL parameter
//! - [`restore`]: turning compact state back into full streams
//! - [`query`]: reading and writing the `state` and `config` parameters
//! - [`storage`]: versioned persistence behind the [`SessionStore`] trait
//! - [`loader`]: page-load precedence across all sources

pub mod codec;
pub mod compact;
pub mod loader;
pub mod query;
pub mod restore;
pub mod storage;

pub use codec::{decode, encode, try_decode};
pub use compact::{CompactState, CompactStream, GridCell, STATE_VERSION};
pub use loader::{load_session, SessionSource};
pub use query::{config_url, share_url, streams_from_config, MultiviewQuery};
pub use restore::{restore, NoLookup, RestoredSession, StreamLookup};
pub use storage::{load_state, save_state, try_load_state, FileStore, MemoryStore, SessionStore};
