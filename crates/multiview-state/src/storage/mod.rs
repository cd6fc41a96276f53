//! Versioned persistence of [`CompactState`].
//!
//! Blobs are stored as plain JSON under a single key. A blob that fails
//! to parse or carries another schema version is removed on load.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use multiview_common::{CodecError, MultiviewError, StorageError};
use tracing::{debug, warn};

use crate::codec::{from_json, to_json};
use crate::compact::CompactState;

/// Key-value storage for session blobs.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Persist `state` under `key`.
pub fn save_state<S: SessionStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &CompactState,
) -> Result<(), StorageError> {
    let json = to_json(state).map_err(|e| StorageError::Write(e.to_string()))?;
    store.set(key, &json)?;
    debug!(key, streams = state.streams.len(), "session state saved");
    Ok(())
}

/// Load the state under `key`, surfacing why a blob was unusable.
/// Nothing is removed.
pub fn try_load_state<S: SessionStore + ?Sized>(
    store: &S,
    key: &str,
) -> multiview_common::Result<Option<CompactState>> {
    match store.get(key)? {
        Some(blob) => Ok(Some(from_json(&blob)?)),
        None => Ok(None),
    }
}

/// Load the state under `key`.
///
/// Returns `None` when nothing is stored, the store fails, or the blob is
/// unusable. Unusable blobs are removed so they are not retried.
pub fn load_state<S: SessionStore + ?Sized>(store: &mut S, key: &str) -> Option<CompactState> {
    match try_load_state(&*store, key) {
        Ok(state) => state,
        Err(MultiviewError::Codec(e)) => {
            match &e {
                CodecError::VersionMismatch { found, .. } => {
                    warn!(key, found, "stored session has another version, discarding")
                }
                _ => warn!(key, error = %e, "stored session is corrupt, discarding"),
            }
            if let Err(e) = store.remove(key) {
                warn!(key, error = %e, "failed to remove stored session");
            }
            None
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored session");
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
