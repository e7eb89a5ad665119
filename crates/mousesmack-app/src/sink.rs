//! Audio sink that logs cues instead of playing clips.

use mousesmack_core::enums::{MusicTrack, Sfx};
use mousesmack_sim::AudioSink;

#[derive(Debug, Default)]
pub struct LoggingAudioSink {
    cues_played: u64,
}

impl LoggingAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues_played(&self) -> u64 {
        self.cues_played
    }
}

impl AudioSink for LoggingAudioSink {
    fn play_music(&mut self, track: MusicTrack) {
        self.cues_played += 1;
        tracing::info!(?track, "music");
    }

    fn stop_music(&mut self) {
        self.cues_played += 1;
        tracing::info!("music stopped");
    }

    fn play_sfx(&mut self, sfx: Sfx) {
        self.cues_played += 1;
        tracing::debug!(?sfx, "sfx");
    }
}
