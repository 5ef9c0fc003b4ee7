//! Fortune Catch - catch the treasure, dodge the bomb
//!
//! Core modules:
//! - `sim`: Deterministic game-loop engine (ticks, spawning, collisions, scoring)
//! - `config`: Data-driven game settings and validation
//! - `sound`: Sound cues requested from the audio front-end
//! - `error`: Configuration and invariant errors

pub mod config;
pub mod error;
pub mod sim;
pub mod sound;

pub use config::{FieldGeometry, GameConfig};
pub use error::{ConfigError, InvariantViolation};
pub use sim::{Direction, Engine, GameEvent, GamePhase};
pub use sound::{MusicCue, SoundEffect};
