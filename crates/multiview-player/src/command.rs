//! Player commands and their per-platform `postMessage` encodings.

use multiview_common::{Platform, PlayerError};
use serde::Serialize;
use serde_json::{json, Value};

pub const YOUTUBE_ORIGIN: &str = "https://www.youtube.com";
pub const TWITCH_ORIGIN: &str = "https://player.twitch.tv";
const TWITCH_NAMESPACE: &str = "twitch-embed-player-proxy";

/// Highest volume accepted by [`PlayerCommand::SetVolume`].
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "command", content = "value")]
pub enum PlayerCommand {
    Play,
    Pause,
    Mute,
    Unmute,
    SetVolume(u8),
}

impl PlayerCommand {
    /// Volume command clamped to `0..=100`.
    pub fn volume(level: u32) -> Self {
        Self::SetVolume(level.min(MAX_VOLUME as u32) as u8)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::SetVolume(_) => "set_volume",
        }
    }
}

/// A message ready for `contentWindow.postMessage(message, target_origin)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMessage {
    /// JSON text of the message body.
    pub message: String,
    pub target_origin: String,
}

impl PostMessage {
    fn new(body: &Value, target_origin: &str) -> Self {
        Self {
            message: body.to_string(),
            target_origin: target_origin.to_string(),
        }
    }
}

/// Encode `command` for an embed hosted on `platform`.
pub fn post_message_for(
    platform: Platform,
    command: &PlayerCommand,
) -> Result<PostMessage, PlayerError> {
    match platform {
        Platform::YouTube => Ok(PostMessage::new(&youtube_body(command), YOUTUBE_ORIGIN)),
        Platform::Twitch => Ok(PostMessage::new(&twitch_body(command), TWITCH_ORIGIN)),
        other => Err(PlayerError::Unsupported(other)),
    }
}

fn youtube_body(command: &PlayerCommand) -> Value {
    let (func, args) = match *command {
        PlayerCommand::Play => ("playVideo", json!([])),
        PlayerCommand::Pause => ("pauseVideo", json!([])),
        PlayerCommand::Mute => ("mute", json!([])),
        PlayerCommand::Unmute => ("unMute", json!([])),
        PlayerCommand::SetVolume(v) => ("setVolume", json!([v.min(MAX_VOLUME)])),
    };
    json!({ "event": "command", "func": func, "args": args })
}

fn twitch_body(command: &PlayerCommand) -> Value {
    let (event, params) = match *command {
        PlayerCommand::Play => ("play", Value::Null),
        PlayerCommand::Pause => ("pause", Value::Null),
        PlayerCommand::Mute => ("setMuted", json!(true)),
        PlayerCommand::Unmute => ("setMuted", json!(false)),
        // Twitch takes volume as a fraction
        PlayerCommand::SetVolume(v) => ("setVolume", json!(f64::from(v.min(MAX_VOLUME)) / 100.0)),
    };
    json!({ "namespace": TWITCH_NAMESPACE, "eventName": event, "params": params })
}
