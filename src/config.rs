//! Game configuration
//!
//! Supplied once at engine construction and immutable afterwards. Defaults
//! reproduce the classic 30-second round.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::{ItemKind, ItemType};
use crate::sound::SoundEffect;

/// Countdown cadence, not configurable
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;

/// Play field and sprite dimensions, in field units (pixels in the original)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
    pub item_width: f32,
    pub item_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle's bottom edge and the field floor
    pub paddle_bottom_margin: f32,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            item_width: 50.0,
            item_height: 50.0,
            paddle_width: 80.0,
            paddle_height: 20.0,
            paddle_bottom_margin: 10.0,
        }
    }
}

impl FieldGeometry {
    pub fn item_size(&self) -> Vec2 {
        Vec2::new(self.item_width, self.item_height)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Round length in seconds
    pub game_duration_seconds: u32,
    /// Distance an item falls per physics tick
    pub item_fall_speed: f32,
    /// Milliseconds between spawns
    pub item_spawn_interval_ms: u64,
    /// Percent of paddle travel per move command
    pub player_move_speed: f32,
    /// Milliseconds between physics ticks (~60 Hz)
    pub physics_interval_ms: u64,
    pub field: FieldGeometry,
    /// Spawnable kinds, selected uniformly
    pub item_catalog: Vec<ItemKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_duration_seconds: 30,
            item_fall_speed: 5.0,
            item_spawn_interval_ms: 200,
            player_move_speed: 10.0,
            physics_interval_ms: 16,
            field: FieldGeometry::default(),
            item_catalog: default_catalog(),
        }
    }
}

/// The eight classic items: seven treasures worth 10 and the bomb
pub fn default_catalog() -> Vec<ItemKind> {
    use ItemType::*;
    use SoundEffect::*;
    vec![
        ItemKind::treasure(GoldIngot, 10, Chime1),
        ItemKind::treasure(RedEnvelope, 10, Chime1),
        ItemKind::treasure(LuckyBag, 10, Chime2),
        ItemKind::treasure(GoldBar, 10, Chime2),
        ItemKind::treasure(Diamond, 10, Chime3),
        ItemKind::treasure(PaperEnvelope, 10, Chime3),
        ItemKind::treasure(BigRedEnvelope, 10, Chime4),
        ItemKind::hazard(Bomb, Explosion),
    ]
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails this too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl GameConfig {
    /// Reject anything that would make a session meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("game_duration_seconds", self.game_duration_seconds as f64)?;
        require_positive("item_fall_speed", self.item_fall_speed as f64)?;
        require_positive("item_spawn_interval_ms", self.item_spawn_interval_ms as f64)?;
        require_positive("player_move_speed", self.player_move_speed as f64)?;
        require_positive("physics_interval_ms", self.physics_interval_ms as f64)?;

        let f = &self.field;
        require_positive("field.width", f.width as f64)?;
        require_positive("field.height", f.height as f64)?;
        require_positive("field.item_width", f.item_width as f64)?;
        require_positive("field.item_height", f.item_height as f64)?;
        require_positive("field.paddle_width", f.paddle_width as f64)?;
        require_positive("field.paddle_height", f.paddle_height as f64)?;
        if f.item_width > f.width {
            return Err(ConfigError::ItemTooWide {
                item: f.item_width,
                field: f.width,
            });
        }
        if f.paddle_width > f.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: f.paddle_width,
                field: f.width,
            });
        }

        if self.item_catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let hazards = self.item_catalog.iter().filter(|k| k.is_hazard).count();
        if hazards != 1 {
            return Err(ConfigError::HazardCount(hazards));
        }
        if let Some(k) = self
            .item_catalog
            .iter()
            .find(|k| !k.is_hazard && k.score_value == 0)
        {
            return Err(ConfigError::ZeroScore(k.kind));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
