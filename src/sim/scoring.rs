//! Catch outcome resolution

use super::entity::ItemKind;
use crate::sound::SoundEffect;

/// What catching an item does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Points to add to the score
    pub score_delta: u64,
    /// Session ends right now; the accumulated score stands
    pub ends_game: bool,
    /// Feedback sound for the audio collaborator
    pub sound: SoundEffect,
}

/// Resolve a caught item
pub fn resolve(kind: &ItemKind) -> Outcome {
    if kind.is_hazard {
        Outcome {
            score_delta: 0,
            ends_game: true,
            sound: kind.sound,
        }
    } else {
        Outcome {
            score_delta: kind.score_value as u64,
            ends_game: false,
            sound: kind.sound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ItemType;

    #[test]
    fn test_treasure_scores() {
        let kind = ItemKind::treasure(ItemType::Diamond, 25, SoundEffect::Chime3);
        let outcome = resolve(&kind);
        assert_eq!(outcome.score_delta, 25);
        assert!(!outcome.ends_game);
        assert_eq!(outcome.sound, SoundEffect::Chime3);
    }

    #[test]
    fn test_hazard_ends_without_scoring() {
        let kind = ItemKind {
            score_value: 99,
            ..ItemKind::hazard(ItemType::Bomb, SoundEffect::Explosion)
        };
        let outcome = resolve(&kind);
        assert_eq!(outcome.score_delta, 0);
        assert!(outcome.ends_game);
        assert_eq!(outcome.sound, SoundEffect::Explosion);
    }
}
