//! Audio cues
//!
//! The simulation only names sounds; synthesis and playback belong to the
//! host, which implements [`AudioSink`].

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// Player gun fired
    Shoot,
    /// Enemy or boss gun fired
    EnemyShoot,
    /// Explosion or player hit
    Explode,
    /// Powerup collected
    Powerup,
}

impl AudioCue {
    /// Cue name understood by the host sound bank
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::Shoot => "shoot",
            AudioCue::EnemyShoot => "enemyShoot",
            AudioCue::Explode => "explode",
            AudioCue::Powerup => "powerup",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "shoot" => Some(AudioCue::Shoot),
            "enemyShoot" => Some(AudioCue::EnemyShoot),
            "explode" => Some(AudioCue::Explode),
            "powerup" => Some(AudioCue::Powerup),
            _ => None,
        }
    }
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Discards every cue
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Logs cues at trace level (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u64,
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        self.played += 1;
        log::trace!("audio: {}", cue.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names_round_trip() {
        for cue in [
            AudioCue::Shoot,
            AudioCue::EnemyShoot,
            AudioCue::Explode,
            AudioCue::Powerup,
        ] {
            assert_eq!(AudioCue::from_str(cue.as_str()), Some(cue));
        }
        assert_eq!(AudioCue::from_str("boom"), None);
    }

    #[test]
    fn test_log_audio_counts() {
        let mut sink = LogAudio::default();
        sink.play(AudioCue::Explode);
        sink.play(AudioCue::Shoot);
        assert_eq!(sink.played, 2);
    }
}
