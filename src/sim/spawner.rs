//! Falling item spawner

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::entity::{FallingItem, ItemKind};
use crate::config::FieldGeometry;

/// Create one item just above the field
///
/// The kind is picked uniformly from the catalog, hazard included. The item
/// starts fully off-field (`y = -item_height`) at a random x that keeps it
/// inside the field horizontally. An item wider than the field is pinned to
/// `x = 0`.
///
/// Returns `None` for an empty catalog; `GameConfig::validate` rules that out
/// for any engine-owned catalog.
pub fn spawn_one<R: Rng + ?Sized>(
    catalog: &[ItemKind],
    field: &FieldGeometry,
    id: u32,
    rng: &mut R,
) -> Option<FallingItem> {
    let kind = *catalog.choose(rng)?;
    let max_x = (field.width - field.item_width).max(0.0);
    let x = rng.random_range(0.0..=max_x);
    Some(FallingItem {
        id,
        kind,
        pos: Vec2::new(x, -field.item_height),
    })
}
