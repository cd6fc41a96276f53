use std::collections::BTreeMap;

use multiview_common::PlayerError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::command::PlayerCommand;
use crate::control::PlayerControl;
use crate::events::{PlayerEvent, PlayerStatus};

/// Outcome of a command sent to every registered player.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, PlayerError)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

#[derive(Serialize)]
struct BatchReportView<'a> {
    succeeded: &'a [String],
    failed: BTreeMap<&'a str, String>,
}

impl Serialize for BatchReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BatchReportView {
            succeeded: &self.succeeded,
            failed: self
                .failed
                .iter()
                .map(|(id, e)| (id.as_str(), e.to_string()))
                .collect(),
        }
        .serialize(serializer)
    }
}

struct Entry {
    player: Box<dyn PlayerControl>,
    status: PlayerStatus,
}

/// Players keyed by id. Batch commands visit ids in sorted order and
/// keep going past a failing player.
#[derive(Default)]
pub struct PlayerRegistry {
    players: BTreeMap<String, Entry>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player, replacing any previous one with the same id.
    /// Returns `true` if a player was replaced.
    pub fn register(&mut self, id: impl Into<String>, player: impl PlayerControl + 'static) -> bool {
        let id = id.into();
        debug!(id = %id, platform = %player.platform(), "player registered");
        let entry = Entry {
            player: Box::new(player),
            status: PlayerStatus::default(),
        };
        self.players.insert(id, entry).is_some()
    }

    pub fn unregister(&mut self, id: &str) -> bool {
        if self.players.remove(id).is_some() {
            debug!(id, "player unregistered");
            true
        } else {
            false
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn PlayerControl> {
        self.players.get(id).map(|e| e.player.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.players.keys().cloned().collect()
    }

    pub fn status(&self, id: &str) -> Option<PlayerStatus> {
        self.players.get(id).map(|e| e.status)
    }

    /// Send one command to one player.
    pub fn send(&mut self, id: &str, command: PlayerCommand) -> Result<(), PlayerError> {
        let entry = self
            .players
            .get_mut(id)
            .ok_or_else(|| PlayerError::NotRegistered(id.to_string()))?;
        entry.player.send(command)?;
        note_sent(&mut entry.status, command);
        Ok(())
    }

    /// Send `command` to every player.
    pub fn broadcast(&mut self, command: PlayerCommand) -> BatchReport {
        let mut report = BatchReport::default();
        for (id, entry) in self.players.iter_mut() {
            match entry.player.send(command) {
                Ok(()) => {
                    note_sent(&mut entry.status, command);
                    report.succeeded.push(id.clone());
                }
                Err(e) => {
                    warn!(id = %id, command = command.name(), error = %e, "player command failed");
                    report.failed.push((id.clone(), e));
                }
            }
        }
        debug!(
            command = command.name(),
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "batch player command"
        );
        report
    }

    pub fn play_all(&mut self) -> BatchReport {
        self.broadcast(PlayerCommand::Play)
    }

    pub fn pause_all(&mut self) -> BatchReport {
        self.broadcast(PlayerCommand::Pause)
    }

    pub fn mute_all(&mut self) -> BatchReport {
        self.broadcast(PlayerCommand::Mute)
    }

    pub fn unmute_all(&mut self) -> BatchReport {
        self.broadcast(PlayerCommand::Unmute)
    }

    pub fn set_volume_all(&mut self, level: u32) -> BatchReport {
        self.broadcast(PlayerCommand::volume(level))
    }

    /// Record an event posted back by player `id`.
    pub fn apply_event(&mut self, id: &str, event: &PlayerEvent) -> bool {
        match self.players.get_mut(id) {
            Some(entry) => {
                entry.status.apply(event);
                true
            }
            None => false,
        }
    }
}

// Status as sent; a later event from the embed overrides it.
fn note_sent(status: &mut PlayerStatus, command: PlayerCommand) {
    match command {
        PlayerCommand::Mute => status.muted = true,
        PlayerCommand::Unmute => status.muted = false,
        PlayerCommand::SetVolume(v) => status.volume = v,
        PlayerCommand::Play | PlayerCommand::Pause => {}
    }
}
