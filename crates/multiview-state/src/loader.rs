//! Choosing where a session comes from on page load.

use multiview_common::LayoutType;
use serde::Serialize;
use tracing::{debug, info};

use crate::codec::decode;
use crate::query::MultiviewQuery;
use crate::restore::{restore, RestoredSession, StreamLookup};
use crate::storage::{load_state, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSource {
    StateParam,
    ConfigParam,
    Storage,
}

/// Restore a session from the `state` parameter, then the `config`
/// parameter, then `store`. A source that is absent or unusable falls
/// through to the next; `None` means start empty.
pub fn load_session<S, L>(
    query: &MultiviewQuery,
    store: &mut S,
    key: &str,
    lookup: &L,
) -> Option<(SessionSource, RestoredSession)>
where
    S: SessionStore + ?Sized,
    L: StreamLookup + ?Sized,
{
    if let Some(state) = query.state.as_deref().and_then(decode) {
        info!(streams = state.streams.len(), "session restored from state parameter");
        return Some((SessionSource::StateParam, restore(state, lookup)));
    }

    let streams = query.config_streams();
    if !streams.is_empty() {
        info!(streams = streams.len(), "session restored from config parameter");
        let streams = streams
            .into_iter()
            .map(|s| lookup.lookup(&s.key()).unwrap_or(s))
            .collect();
        return Some((
            SessionSource::ConfigParam,
            RestoredSession::from_streams(streams, LayoutType::Auto),
        ));
    }

    if let Some(state) = load_state(store, key) {
        info!(streams = state.streams.len(), "session restored from storage");
        return Some((SessionSource::Storage, restore(state, lookup)));
    }

    debug!("no session to restore");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::compact::{CompactState, CompactStream};
    use crate::restore::NoLookup;
    use crate::storage::{save_state, MemoryStore};
    use multiview_common::{Platform, Stream};

    const KEY: &str = "multiview-state";

    fn compact(id: &str, platform: Platform) -> CompactStream {
        CompactStream {
            id: id.into(),
            platform,
            channel_id: None,
        }
    }

    fn stored() -> MemoryStore {
        let mut store = MemoryStore::new();
        let state = CompactState::new(vec![compact("stored", Platform::Twitch)], LayoutType::OneByOne);
        save_state(&mut store, KEY, &state).unwrap();
        store
    }

    #[test]
    fn state_param_wins_over_config_and_storage() {
        let state = CompactState::new(vec![compact("lv1", Platform::Niconico)], LayoutType::TwoByTwo);
        let query = MultiviewQuery {
            state: Some(encode(&state)),
            config: Some("https://www.twitch.tv/other".into()),
        };
        let (source, restored) = load_session(&query, &mut stored(), KEY, &NoLookup).unwrap();
        assert_eq!(source, SessionSource::StateParam);
        assert_eq!(restored.streams[0].id, "lv1");
        assert_eq!(restored.layout, LayoutType::TwoByTwo);
    }

    #[test]
    fn bad_state_falls_through_to_config() {
        let query = MultiviewQuery {
            state: Some("%%%".into()),
            config: Some("https://www.twitch.tv/other".into()),
        };
        let (source, restored) = load_session(&query, &mut stored(), KEY, &NoLookup).unwrap();
        assert_eq!(source, SessionSource::ConfigParam);
        assert_eq!(restored.streams[0].id, "other");
        assert_eq!(restored.layout, LayoutType::Auto);
    }

    #[test]
    fn config_streams_prefer_lookup_entries() {
        let mut known = Stream::placeholder("other", Platform::Twitch, Some("other".into()));
        known.title = "Late night".into();
        let catalog = vec![known.clone()];
        let query = MultiviewQuery {
            state: None,
            config: Some("https://www.twitch.tv/other".into()),
        };
        let (_, restored) = load_session(&query, &mut MemoryStore::new(), KEY, &catalog).unwrap();
        assert_eq!(restored.streams, vec![known]);
    }

    #[test]
    fn empty_query_uses_storage() {
        let (source, restored) =
            load_session(&MultiviewQuery::default(), &mut stored(), KEY, &NoLookup).unwrap();
        assert_eq!(source, SessionSource::Storage);
        assert_eq!(restored.streams[0].id, "stored");
    }

    #[test]
    fn nothing_anywhere_is_none() {
        let query = MultiviewQuery {
            state: None,
            config: Some("not-a-url".into()),
        };
        assert!(load_session(&query, &mut MemoryStore::new(), KEY, &NoLookup).is_none());
    }
}
