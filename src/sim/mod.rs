//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, configuration and
//! sequence of commands and elapsed times, a session replays identically:
//! - Virtual millisecond clock only
//! - Seeded RNG only
//! - Items processed in spawn order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod entity;
pub mod event;
pub mod player;
pub mod scheduler;
pub mod scoring;
pub mod spawner;

pub use collision::{Aabb, overlaps};
pub use engine::{Engine, TickKind};
pub use entity::{
    FallingItem, GamePhase, GameState, ItemKind, ItemType, PLAYER_START_PERCENT, PlayerState,
};
pub use event::{EventQueue, GameEvent, RemovalReason};
pub use player::{Direction, move_player};
pub use scheduler::{Scheduler, TaskHandle};
pub use scoring::{Outcome, resolve};
pub use spawner::spawn_one;
