use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Hosting platform of a livestream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Platform {
    YouTube,
    Twitch,
    TwitCasting,
    Niconico,
    #[default]
    Unknown,
}

const DEFAULT_TWITCH_PARENT: &str = "localhost";

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Twitch => "twitch",
            Self::TwitCasting => "twitcasting",
            Self::Niconico => "niconico",
            Self::Unknown => "unknown",
        }
    }

    /// Map a platform name to a variant. Unrecognized names become `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "youtube" => Self::YouTube,
            "twitch" => Self::Twitch,
            "twitcasting" => Self::TwitCasting,
            "niconico" => Self::Niconico,
            _ => Self::Unknown,
        }
    }

    /// Whether the platform's embed accepts postMessage player commands.
    pub fn supports_remote_control(&self) -> bool {
        matches!(self, Self::YouTube | Self::Twitch)
    }

    /// Public watch page for a stream id.
    pub fn watch_link(&self, id: &str) -> String {
        match self {
            Self::YouTube => format!("https://www.youtube.com/watch?v={id}"),
            Self::Twitch => format!("https://www.twitch.tv/{id}"),
            Self::TwitCasting => format!("https://twitcasting.tv/{id}"),
            Self::Niconico => format!("https://live.nicovideo.jp/watch/{id}"),
            Self::Unknown => id.to_string(),
        }
    }

    /// Iframe URL for embedding a stream.
    ///
    /// Twitch refuses to render without a `parent` matching the embedding
    /// host, so callers should pass the page host when they know it.
    pub fn player_link(&self, id: &str, parent_host: Option<&str>) -> String {
        match self {
            Self::YouTube => {
                format!("https://www.youtube.com/embed/{id}?enablejsapi=1&playsinline=1")
            }
            Self::Twitch => format!(
                "https://player.twitch.tv/?channel={id}&parent={}",
                parent_host.unwrap_or(DEFAULT_TWITCH_PARENT)
            ),
            Self::TwitCasting => {
                format!("https://twitcasting.tv/{id}/embeddedplayer/live?auto_play=true")
            }
            Self::Niconico => format!("https://live.nicovideo.jp/embed/{id}"),
            Self::Unknown => id.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
