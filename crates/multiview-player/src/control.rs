use multiview_common::{Platform, PlayerError};
use tracing::trace;

use crate::command::{post_message_for, PlayerCommand};
use crate::sink::MessageSink;

/// Something that can be told to play, pause, mute, or change volume.
pub trait PlayerControl {
    fn platform(&self) -> Platform;

    fn send(&mut self, command: PlayerCommand) -> Result<(), PlayerError>;

    fn play(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Pause)
    }

    fn mute(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Mute)
    }

    fn unmute(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Unmute)
    }

    fn set_volume(&mut self, level: u32) -> Result<(), PlayerError> {
        self.send(PlayerCommand::volume(level))
    }
}

/// An iframe embed driven through `postMessage`.
#[derive(Debug, Clone)]
pub struct EmbedPlayer<S> {
    platform: Platform,
    sink: S,
}

impl<S: MessageSink> EmbedPlayer<S> {
    pub fn new(platform: Platform, sink: S) -> Self {
        Self { platform, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: MessageSink> PlayerControl for EmbedPlayer<S> {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn send(&mut self, command: PlayerCommand) -> Result<(), PlayerError> {
        let message = post_message_for(self.platform, &command)?;
        trace!(platform = %self.platform, command = command.name(), "posting player command");
        self.sink.deliver(&message)
    }
}
