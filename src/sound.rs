//! Sound cues requested from the audio collaborator
//!
//! The core never plays audio. It only names the effect it wants; a
//! front-end maps these to whatever clips it ships.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Start/restart button pressed
    ButtonClick,
    /// Catch chimes, one per group of treasure items
    Chime1,
    Chime2,
    Chime3,
    Chime4,
    /// Bomb caught
    Explosion,
}

impl SoundEffect {
    /// Clip name the original assets use for this effect
    pub fn clip_name(&self) -> &'static str {
        match self {
            SoundEffect::ButtonClick => "buttonSound",
            SoundEffect::Chime1 => "music1",
            SoundEffect::Chime2 => "music2",
            SoundEffect::Chime3 => "music3",
            SoundEffect::Chime4 => "music4",
            SoundEffect::Explosion => "bombSound",
        }
    }
}

/// Background music control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicCue {
    /// Start the loop from wherever it is
    Play,
    /// Stop and rewind to the beginning
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_names_are_distinct() {
        let all = [
            SoundEffect::ButtonClick,
            SoundEffect::Chime1,
            SoundEffect::Chime2,
            SoundEffect::Chime3,
            SoundEffect::Chime4,
            SoundEffect::Explosion,
        ];
        let mut names: Vec<_> = all.iter().map(|s| s.clip_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_sound_serializes_snake_case() {
        let json = serde_json::to_string(&SoundEffect::ButtonClick).unwrap();
        assert_eq!(json, "\"button_click\"");
    }
}
