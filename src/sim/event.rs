//! Outbound events for presentation and audio collaborators

use serde::{Deserialize, Serialize};

use super::entity::{FallingItem, GamePhase};
use crate::sound::{MusicCue, SoundEffect};

/// Why an item left the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Hit the paddle
    Caught,
    /// Fell past the bottom edge
    Missed,
}

/// State changes a front-end renders or plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    ScoreChanged(u64),
    TimeChanged(u32),
    ItemSpawned(FallingItem),
    ItemRemoved { id: u32, reason: RemovalReason },
    PlayerMoved(f32),
    GameEnded(u64),
    SoundRequested(SoundEffect),
    Music(MusicCue),
}

/// Queue the engine pushes to and consumers drain
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
