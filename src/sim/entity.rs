//! Game state and core simulation types
//!
//! Pure data. Invariants are enforced by whoever owns the mutation: the
//! spawner creates items, the physics tick moves and removes them, and the
//! player controller moves the paddle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, overlaps};
use crate::config::{FieldGeometry, GameConfig};
use crate::error::InvariantViolation;
use crate::sound::SoundEffect;

/// Paddle position a fresh session starts at (percent of travel)
pub const PLAYER_START_PERCENT: f32 = 50.0;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start command, no ticks running
    Idle,
    /// All three ticks active
    Playing,
    /// Session over, result frozen
    Ended,
}

/// Falling item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    GoldIngot,
    RedEnvelope,
    LuckyBag,
    GoldBar,
    Diamond,
    PaperEnvelope,
    BigRedEnvelope,
    Bomb,
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemKind {
    pub kind: ItemType,
    /// Points awarded on catch (ignored for the hazard)
    #[serde(default)]
    pub score_value: u32,
    /// Catching this ends the session
    #[serde(default)]
    pub is_hazard: bool,
    pub sound: SoundEffect,
}

impl ItemKind {
    pub const fn treasure(kind: ItemType, score_value: u32, sound: SoundEffect) -> Self {
        Self {
            kind,
            score_value,
            is_hazard: false,
            sound,
        }
    }

    pub const fn hazard(kind: ItemType, sound: SoundEffect) -> Self {
        Self {
            kind,
            score_value: 0,
            is_hazard: true,
            sound,
        }
    }
}

/// A spawned item. `pos` is the top-left corner in field coordinates
/// (y grows downward, 0 is the top edge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: Vec2,
}

impl FallingItem {
    pub fn rect(&self, field: &FieldGeometry) -> Aabb {
        Aabb::from_origin_size(self.pos, field.item_size())
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Horizontal position, 0 = far left, 100 = far right
    pub position_percent: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position_percent: PLAYER_START_PERCENT,
        }
    }
}

impl PlayerState {
    /// Paddle rectangle. The paddle never leaves the field: 0% puts its left
    /// edge at 0, 100% puts its right edge at the field width.
    pub fn rect(&self, field: &FieldGeometry) -> Aabb {
        let travel = field.width - field.paddle_width;
        let left = travel * self.position_percent / 100.0;
        let top = field.height - field.paddle_bottom_margin - field.paddle_height;
        Aabb::from_origin_size(Vec2::new(left, top), field.paddle_size())
    }
}

/// Complete per-session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    /// Seconds left on the countdown
    pub time_remaining: u32,
    /// Live items in spawn order
    pub active_items: Vec<FallingItem>,
    pub player: PlayerState,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh Idle state for a configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            time_remaining: config.game_duration_seconds,
            active_items: Vec::new(),
            player: PlayerState::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID. Wraps back to 1 after `u32::MAX`.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).unwrap_or(1);
        id
    }

    /// Verify the between-tick invariants: nothing below the field, nothing
    /// resting on the paddle.
    pub fn check_invariants(&self, field: &FieldGeometry) -> Result<(), InvariantViolation> {
        let paddle = self.player.rect(field);
        for item in &self.active_items {
            if item.pos.y > field.height {
                return Err(InvariantViolation::ItemOutOfField {
                    id: item.id,
                    y: item.pos.y,
                });
            }
            if overlaps(&item.rect(field), &paddle) {
                return Err(InvariantViolation::ItemOverlapsPaddle { id: item.id });
            }
        }
        Ok(())
    }
}
