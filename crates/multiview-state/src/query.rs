//! `state` and `config` URL parameters.
//!
//! `state` carries a base64 [`CompactState`]; `config` is a
//! comma-separated list of stream URLs for hand-written links.

use multiview_common::{CodecError, Stream};
use tracing::warn;
use url::{form_urlencoded, Url};

use crate::codec::encode;
use crate::compact::CompactState;

pub const STATE_PARAM: &str = "state";
pub const CONFIG_PARAM: &str = "config";

/// Multiview parameters read from a page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiviewQuery {
    pub state: Option<String>,
    pub config: Option<String>,
}

impl MultiviewQuery {
    /// Read parameters from a full URL or a bare query string (`?a=b&c=d`).
    /// Empty values count as absent.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let query = match Url::parse(input) {
            Ok(url) => url.query().unwrap_or_default().to_string(),
            Err(_) => input.trim_start_matches('?').to_string(),
        };

        let mut out = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.trim().is_empty() {
                continue;
            }
            match key.as_ref() {
                STATE_PARAM => out.state = Some(value.into_owned()),
                CONFIG_PARAM => out.config = Some(value.into_owned()),
                _ => {}
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.config.is_none()
    }

    /// Streams listed in the `config` parameter.
    pub fn config_streams(&self) -> Vec<Stream> {
        self.config
            .as_deref()
            .map(streams_from_config)
            .unwrap_or_default()
    }
}

/// Parse a comma-separated list of stream URLs. Entries that are not
/// URLs are skipped; repeats of the same stream are kept once.
pub fn streams_from_config(param: &str) -> Vec<Stream> {
    let mut streams: Vec<Stream> = Vec::new();
    for entry in param.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match Stream::from_url(entry) {
            Some(stream) => {
                if !streams.iter().any(|s| s.key() == stream.key()) {
                    streams.push(stream);
                }
            }
            None => warn!(entry, "skipping config entry that is not a stream URL"),
        }
    }
    streams
}

/// Link to `base` carrying the encoded state. Other parameters on
/// `base` are kept; an existing `state` is replaced.
pub fn share_url(base: &str, state: &CompactState) -> Result<String, CodecError> {
    with_param(base, STATE_PARAM, &encode(state))
}

/// Link to `base` listing the streams' watch URLs in `config`.
///
/// Commas separate entries, so a link containing one cannot be listed
/// and is left out. Use [`share_url`] for such streams.
pub fn config_url(base: &str, streams: &[Stream]) -> Result<String, CodecError> {
    let links: Vec<&str> = streams
        .iter()
        .map(|s| s.link.as_str())
        .filter(|link| {
            let listable = !link.contains(',');
            if !listable {
                warn!(link, "leaving link with a comma out of config list");
            }
            listable
        })
        .collect();
    with_param(base, CONFIG_PARAM, &links.join(","))
}

fn with_param(base: &str, key: &str, value: &str) -> Result<String, CodecError> {
    let mut url = Url::parse(base).map_err(|e| CodecError::InvalidUrl(format!("{base}: {e}")))?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(key, value);
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use crate::compact::CompactStream;
    use multiview_common::{LayoutType, Platform};

    fn state() -> CompactState {
        CompactState::new(
            vec![CompactStream {
                id: "dQw4w9WgXcQ".into(),
                platform: Platform::YouTube,
                channel_id: None,
            }],
            LayoutType::OneByOne,
        )
    }

    #[test]
    fn share_url_round_trips_through_parse() {
        let url = share_url("https://portal.example/multiview?lang=ja", &state()).unwrap();
        assert!(url.contains("lang=ja"));
        let query = MultiviewQuery::parse(&url);
        let decoded = decode(query.state.as_deref().unwrap()).unwrap();
        assert_eq!(decoded, state());
    }

    #[test]
    fn share_url_replaces_existing_state() {
        let url = share_url("https://portal.example/multiview?state=old", &state()).unwrap();
        assert_eq!(url.matches("state=").count(), 1);
        assert!(!url.contains("state=old"));
    }

    #[test]
    fn share_url_rejects_bad_base() {
        assert!(matches!(
            share_url("not a url", &state()),
            Err(CodecError::InvalidUrl(_))
        ));
    }

    #[test]
    fn parse_bare_query_string() {
        let query = MultiviewQuery::parse("?config=https://www.twitch.tv/abc&state=");
        assert_eq!(query.config.as_deref(), Some("https://www.twitch.tv/abc"));
        assert!(query.state.is_none());
    }

    #[test]
    fn parse_without_params_is_empty() {
        assert!(MultiviewQuery::parse("https://portal.example/multiview").is_empty());
    }

    #[test]
    fn config_list_skips_invalid_and_duplicate_entries() {
        let streams = streams_from_config(
            "https://youtu.be/dQw4w9WgXcQ, garbage ,https://www.youtube.com/watch?v=dQw4w9WgXcQ,https://www.twitch.tv/abc,",
        );
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].platform, Platform::YouTube);
        assert_eq!(streams[1].id, "abc");
    }

    #[test]
    fn config_url_round_trips_through_parse() {
        let streams = vec![
            Stream::placeholder("dQw4w9WgXcQ", Platform::YouTube, None),
            Stream::placeholder("abc", Platform::Twitch, None),
        ];
        let url = config_url("https://portal.example/multiview", &streams).unwrap();
        let parsed = MultiviewQuery::parse(&url).config_streams();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].key(), streams[0].key());
        assert_eq!(parsed[1].key(), streams[1].key());
    }

    #[test]
    fn config_url_leaves_out_links_with_commas() {
        let streams = vec![
            Stream::placeholder("abc", Platform::Twitch, None),
            Stream::placeholder("https://example.jp/live?ids=1,2", Platform::Unknown, None),
        ];
        let url = config_url("https://portal.example/multiview", &streams).unwrap();
        let parsed = MultiviewQuery::parse(&url).config_streams();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].key(), streams[0].key());
    }

    #[test]
    fn every_layout_and_platform_survives_share_url() {
        let platforms = [
            Platform::YouTube,
            Platform::Twitch,
            Platform::TwitCasting,
            Platform::Niconico,
            Platform::Unknown,
        ];
        for layout in LayoutType::ALL {
            for platform in platforms {
                for grid in [None, Some(vec![[0, 0, 12, 1], [0, 1, 12, 1]])] {
                    let mut state = CompactState::new(
                        vec![
                            CompactStream {
                                id: "https://example.jp/配信?a=1&b=2,3".into(),
                                platform: Platform::Unknown,
                                channel_id: None,
                            },
                            CompactStream {
                                id: "abc123".into(),
                                platform,
                                channel_id: Some("ch".into()),
                            },
                        ],
                        layout,
                    );
                    state.grid_layout = grid;

                    let url = share_url("https://portal.example/multiview?lang=ja", &state).unwrap();
                    let param = MultiviewQuery::parse(&url).state.unwrap();
                    assert_eq!(decode(&param), Some(state), "{layout:?} {platform:?}");
                }
            }
        }
    }
}
