//! Error types for Fortune Catch

use thiserror::Error;

use crate::sim::ItemType;

/// Rejected configuration. Fatal at construction: no session can start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("item catalog is empty")]
    EmptyCatalog,

    #[error("item catalog must contain exactly one hazard, found {0}")]
    HazardCount(usize),

    #[error("non-hazard item {0:?} has a zero score value")]
    ZeroScore(ItemType),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("item width {item} exceeds field width {field}")]
    ItemTooWide { item: f32, field: f32 },

    #[error("paddle width {paddle} exceeds field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A broken simulation invariant. Indicates a tick ordering bug, never
/// expected in correct operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("item {id} left the field (y = {y}) without being removed")]
    ItemOutOfField { id: u32, y: f32 },

    #[error("item {id} overlaps the paddle between ticks")]
    ItemOverlapsPaddle { id: u32 },
}
