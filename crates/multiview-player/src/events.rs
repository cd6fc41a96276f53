//! Messages posted back from embeds.
//!
//! YouTube reports `onStateChange` with a numeric state and
//! `infoDelivery` with a partial status object. Twitch reports
//! `UPDATE_STATE` with a status object, plus bare lifecycle events.

use multiview_common::Platform;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Unstarted,
    Ready,
    Playing,
    Paused,
    Buffering,
    Ended,
    Cued,
}

impl PlaybackState {
    /// YouTube iframe API state code.
    pub fn from_youtube_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }

    fn from_twitch_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ready" => Some(Self::Ready),
            "play" | "playing" => Some(Self::Playing),
            "pause" | "paused" => Some(Self::Paused),
            "buffering" => Some(Self::Buffering),
            "ended" | "offline" => Some(Self::Ended),
            "idle" => Some(Self::Unstarted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Ready,
    StateChanged(PlaybackState),
    /// Partial status; absent fields are unchanged.
    Info {
        state: Option<PlaybackState>,
        volume: Option<u8>,
        muted: Option<bool>,
    },
}

impl PlayerEvent {
    /// Parse a message from an embed on `platform`. Messages that are not
    /// player events yield `None`.
    pub fn parse(platform: Platform, raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        // Some embeds double-encode: the message is a JSON string of JSON
        let value = match value {
            Value::String(inner) => serde_json::from_str(&inner).ok()?,
            other => other,
        };
        match platform {
            Platform::YouTube => parse_youtube(&value),
            Platform::Twitch => parse_twitch(&value),
            _ => None,
        }
    }
}

fn parse_youtube(value: &Value) -> Option<PlayerEvent> {
    match value.get("event")?.as_str()? {
        "onReady" => Some(PlayerEvent::Ready),
        "onStateChange" => value
            .get("info")?
            .as_i64()
            .and_then(PlaybackState::from_youtube_code)
            .map(PlayerEvent::StateChanged),
        "infoDelivery" | "initialDelivery" => {
            let info = value.get("info")?;
            Some(PlayerEvent::Info {
                state: info
                    .get("playerState")
                    .and_then(Value::as_i64)
                    .and_then(PlaybackState::from_youtube_code),
                volume: info.get("volume").and_then(Value::as_f64).map(volume_from_percent),
                muted: info.get("muted").and_then(Value::as_bool),
            })
        }
        _ => None,
    }
}

fn parse_twitch(value: &Value) -> Option<PlayerEvent> {
    if !value.get("namespace")?.as_str()?.starts_with("twitch-embed") {
        return None;
    }
    let event = value.get("eventName")?.as_str()?;
    if event == "UPDATE_STATE" {
        let params = value.get("params")?;
        return Some(PlayerEvent::Info {
            state: params
                .get("playback")
                .and_then(Value::as_str)
                .and_then(PlaybackState::from_twitch_name),
            volume: params
                .get("volume")
                .and_then(Value::as_f64)
                .map(|v| volume_from_percent(v * 100.0)),
            muted: params.get("muted").and_then(Value::as_bool),
        });
    }
    match PlaybackState::from_twitch_name(event)? {
        PlaybackState::Ready => Some(PlayerEvent::Ready),
        state => Some(PlayerEvent::StateChanged(state)),
    }
}

fn volume_from_percent(v: f64) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}

/// Last known status of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerStatus {
    pub state: PlaybackState,
    pub volume: u8,
    pub muted: bool,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            state: PlaybackState::Unstarted,
            volume: 100,
            muted: false,
        }
    }
}

impl PlayerStatus {
    pub fn apply(&mut self, event: &PlayerEvent) {
        match *event {
            PlayerEvent::Ready => {
                if self.state == PlaybackState::Unstarted {
                    self.state = PlaybackState::Ready;
                }
            }
            PlayerEvent::StateChanged(state) => self.state = state,
            PlayerEvent::Info {
                state,
                volume,
                muted,
            } => {
                if let Some(state) = state {
                    self.state = state;
                }
                if let Some(volume) = volume {
                    self.volume = volume;
                }
                if let Some(muted) = muted {
                    self.muted = muted;
                }
            }
        }
    }
}
