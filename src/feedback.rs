//! Sound cue keys handed to the audio layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Click,
    Success,
    Error,
    Notification,
    Reward,
}

impl SoundCue {
    /// Stable key the audio collaborator maps to a tone sequence.
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Success => "success",
            SoundCue::Error => "error",
            SoundCue::Notification => "notification",
            SoundCue::Reward => "reward",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde_keys() {
        for cue in [
            SoundCue::Click,
            SoundCue::Success,
            SoundCue::Error,
            SoundCue::Notification,
            SoundCue::Reward,
        ] {
            let json = serde_json::to_string(&cue).unwrap();
            assert_eq!(json, format!("\"{}\"", cue.name()));
            assert_eq!(cue.to_string(), cue.name());
        }
    }
}
