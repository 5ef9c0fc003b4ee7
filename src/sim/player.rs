//! Player controller

use serde::{Deserialize, Serialize};

use super::entity::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Move the paddle one step, clamped to [0, 100]
///
/// Returns the new position, or `None` when no session is playing.
pub fn move_player(state: &mut GameState, direction: Direction, speed: f32) -> Option<f32> {
    if state.phase != GamePhase::Playing {
        return None;
    }
    let delta = match direction {
        Direction::Left => -speed,
        Direction::Right => speed,
    };
    let pos = (state.player.position_percent + delta).clamp(0.0, 100.0);
    state.player.position_percent = pos;
    Some(pos)
}
