//! Demo-mode AI
//!
//! Plays the game through the same move commands a player would send: dodge
//! a bomb that is about to land, otherwise chase the lowest treasure.

use super::entity::{FallingItem, GamePhase, GameState};
use super::player::Direction;
use crate::config::FieldGeometry;

/// How far above the paddle a bomb counts as "about to land"
const DANGER_ZONE: f32 = 150.0;

/// Pick the next move, or `None` to hold position
pub fn steer(state: &GameState, field: &FieldGeometry) -> Option<Direction> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let paddle = state.player.rect(field);
    let paddle_center = (paddle.min.x + paddle.max.x) * 0.5;
    let item_center = |item: &FallingItem| item.pos.x + field.item_width * 0.5;

    // Bombs right above the paddle take priority
    let threat = state
        .active_items
        .iter()
        .filter(|i| i.kind.is_hazard)
        .filter(|i| {
            let bottom = i.pos.y + field.item_height;
            bottom >= paddle.min.y - DANGER_ZONE && i.pos.y <= paddle.max.y
        })
        .find(|i| {
            let r = i.rect(field);
            r.max.x >= paddle.min.x && r.min.x <= paddle.max.x
        });
    if let Some(bomb) = threat {
        let bomb_center = item_center(bomb);
        let room_left = paddle.min.x;
        let room_right = field.width - paddle.max.x;
        // Run toward the open side, away from the bomb when both are open
        return Some(if bomb_center >= paddle_center && room_left > 0.0 {
            Direction::Left
        } else if room_right > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        });
    }

    // Lowest treasure still above the paddle
    let target = state
        .active_items
        .iter()
        .filter(|i| !i.kind.is_hazard && i.pos.y <= paddle.max.y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    // Dead zone so the paddle doesn't jitter around the target
    let offset = item_center(target) - paddle_center;
    let dead_zone = (field.paddle_width - field.item_width).abs() * 0.5 + 1.0;
    if offset > dead_zone {
        Some(Direction::Right)
    } else if offset < -dead_zone {
        Some(Direction::Left)
    } else {
        None
    }
}
