//! Stream entities and watch-URL parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use url::Url;

use super::Platform;

static YOUTUBE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());
static TWITCH_LOGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,25}$").unwrap());
static TWITCASTING_USER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_:\-]{1,64}$").unwrap());
static NICONICO_LIVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^lv\d+$").unwrap());

/// Twitch path roots that are site sections, not channels.
const TWITCH_RESERVED: &[&str] = &["directory", "videos", "settings", "search", "downloads"];

/// Identity of a stream inside a session: the (platform, id) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreamRef {
    pub id: String,
    pub platform: Platform,
}

impl StreamRef {
    pub fn new(id: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: id.into(),
            platform,
        }
    }
}

impl fmt::Display for StreamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.platform, self.id)
    }
}

/// A livestream or clip as shown in the multiview grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub link: String,
    pub player_link: String,
}

impl Stream {
    /// Synthesize a stream for an id that could not be resolved against
    /// a catalog. Title is empty; links are derived from platform + id.
    pub fn placeholder(
        id: impl Into<String>,
        platform: Platform,
        channel_id: Option<String>,
    ) -> Self {
        let id = id.into();
        Self {
            link: platform.watch_link(&id),
            player_link: platform.player_link(&id, None),
            id,
            platform,
            channel_id,
            title: String::new(),
        }
    }

    /// Rebuild the embed link for a page served from `host`.
    pub fn set_embed_parent(&mut self, host: &str) {
        if self.platform == Platform::Twitch {
            self.player_link = self.platform.player_link(&self.id, Some(host));
        }
    }

    pub fn key(&self) -> StreamRef {
        StreamRef::new(self.id.clone(), self.platform)
    }

    /// Parse a watch, channel, or embed URL into a stream.
    ///
    /// Returns `None` only for input that is not an http(s) URL at all.
    /// Recognized hosts with unrecognized paths become `Unknown` streams
    /// keyed by the full URL.
    pub fn from_url(raw: &str) -> Option<Stream> {
        let raw = raw.trim();
        let parsed = Url::parse(raw).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?.to_ascii_lowercase();
        let host = host
            .strip_prefix("www.")
            .or_else(|| host.strip_prefix("m."))
            .unwrap_or(&host);
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        let recognized = match host {
            "youtube.com" | "music.youtube.com" => youtube_id(&parsed, &segments)
                .map(|id| Self::placeholder(id, Platform::YouTube, None)),
            "youtu.be" => segments
                .first()
                .filter(|id| YOUTUBE_ID_RE.is_match(id))
                .map(|id| Self::placeholder(*id, Platform::YouTube, None)),
            "twitch.tv" => segments
                .first()
                .filter(|login| {
                    TWITCH_LOGIN_RE.is_match(login) && !TWITCH_RESERVED.contains(login)
                })
                .map(|login| twitch_stream(login)),
            "player.twitch.tv" => parsed
                .query_pairs()
                .find(|(k, _)| k == "channel")
                .map(|(_, v)| v.into_owned())
                .filter(|login| TWITCH_LOGIN_RE.is_match(login))
                .map(|login| twitch_stream(&login)),
            "twitcasting.tv" => segments
                .first()
                .filter(|user| TWITCASTING_USER_RE.is_match(user))
                .map(|user| {
                    Self::placeholder(*user, Platform::TwitCasting, Some(user.to_string()))
                }),
            "live.nicovideo.jp" | "live2.nicovideo.jp" => match segments.as_slice() {
                ["watch" | "embed", id, ..] if NICONICO_LIVE_RE.is_match(id) => {
                    Some(Self::placeholder(*id, Platform::Niconico, None))
                }
                _ => None,
            },
            _ => None,
        };

        Some(recognized.unwrap_or_else(|| Self::placeholder(raw, Platform::Unknown, None)))
    }
}

fn twitch_stream(login: &str) -> Stream {
    let login = login.to_ascii_lowercase();
    Stream::placeholder(login.clone(), Platform::Twitch, Some(login))
}

fn youtube_id(parsed: &Url, segments: &[&str]) -> Option<String> {
    let candidate = match segments {
        ["watch", ..] => parsed
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned()),
        ["live" | "embed" | "shorts" | "v", id, ..] => Some(id.to_string()),
        _ => None,
    }?;
    YOUTUBE_ID_RE.is_match(&candidate).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_youtube_watch_url() {
        let s = Stream::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42").unwrap();
        assert_eq!(s.platform, Platform::YouTube);
        assert_eq!(s.id, "dQw4w9WgXcQ");
        assert_eq!(s.link, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(s.player_link.contains("enablejsapi=1"));
    }

    #[test]
    fn parses_youtube_short_and_live_urls() {
        let short = Stream::from_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(short.id, "dQw4w9WgXcQ");
        let live = Stream::from_url("https://youtube.com/live/dQw4w9WgXcQ?feature=share").unwrap();
        assert_eq!(live.platform, Platform::YouTube);
        assert_eq!(live.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn youtube_url_without_valid_id_is_unknown() {
        let s = Stream::from_url("https://www.youtube.com/@somechannel").unwrap();
        assert_eq!(s.platform, Platform::Unknown);
        assert_eq!(s.id, "https://www.youtube.com/@somechannel");
    }

    #[test]
    fn parses_twitch_channel() {
        let s = Stream::from_url("https://www.twitch.tv/SomeStreamer").unwrap();
        assert_eq!(s.platform, Platform::Twitch);
        assert_eq!(s.id, "somestreamer");
        assert_eq!(s.channel_id.as_deref(), Some("somestreamer"));
        assert!(s.player_link.contains("parent=localhost"));
    }

    #[test]
    fn twitch_site_sections_are_not_channels() {
        let s = Stream::from_url("https://www.twitch.tv/directory").unwrap();
        assert_eq!(s.platform, Platform::Unknown);
    }

    #[test]
    fn parses_twitch_player_url() {
        let s = Stream::from_url("https://player.twitch.tv/?channel=abc_123&parent=x.com").unwrap();
        assert_eq!(s.platform, Platform::Twitch);
        assert_eq!(s.id, "abc_123");
    }

    #[test]
    fn parses_twitcasting_and_niconico() {
        let tc = Stream::from_url("https://twitcasting.tv/c:someone").unwrap();
        assert_eq!(tc.platform, Platform::TwitCasting);
        assert_eq!(tc.id, "c:someone");

        let nico = Stream::from_url("https://live.nicovideo.jp/watch/lv123456789").unwrap();
        assert_eq!(nico.platform, Platform::Niconico);
        assert_eq!(nico.id, "lv123456789");
    }

    #[test]
    fn non_http_input_is_rejected() {
        assert!(Stream::from_url("not a url").is_none());
        assert!(Stream::from_url("ftp://example.com/file").is_none());
        assert!(Stream::from_url("").is_none());
    }

    #[test]
    fn placeholder_derives_links() {
        let s = Stream::placeholder("lv1", Platform::Niconico, None);
        assert!(s.title.is_empty());
        assert_eq!(s.link, "https://live.nicovideo.jp/watch/lv1");
        assert_eq!(s.player_link, "https://live.nicovideo.jp/embed/lv1");
    }

    #[test]
    fn embed_parent_only_affects_twitch() {
        let mut twitch = Stream::placeholder("abc", Platform::Twitch, None);
        twitch.set_embed_parent("portal.example");
        assert!(twitch.player_link.ends_with("parent=portal.example"));

        let mut yt = Stream::placeholder("dQw4w9WgXcQ", Platform::YouTube, None);
        let before = yt.player_link.clone();
        yt.set_embed_parent("portal.example");
        assert_eq!(yt.player_link, before);
    }

    #[test]
    fn key_uses_platform_and_id() {
        let s = Stream::placeholder("abc", Platform::Twitch, None);
        assert_eq!(s.key(), StreamRef::new("abc", Platform::Twitch));
        assert_eq!(s.key().to_string(), "twitch:abc");
    }
}
