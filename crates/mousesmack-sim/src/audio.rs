//! Audio cue dispatch.
//!
//! Turns round events into playback calls on a host-provided [`AudioSink`].
//! The dispatcher only tracks which track is playing and the music/SFX toggles;
//! mixing and clip playback belong to the host.

use mousesmack_core::enums::{MusicTrack, Sfx};
use mousesmack_core::events::{AudioCue, GameEvent};

/// Host audio playback.
pub trait AudioSink {
    fn play_music(&mut self, track: MusicTrack);
    fn stop_music(&mut self);
    fn play_sfx(&mut self, sfx: Sfx);
}

/// Records cues instead of playing them.
impl AudioSink for Vec<AudioCue> {
    fn play_music(&mut self, track: MusicTrack) {
        self.push(AudioCue::PlayMusic { track });
    }

    fn stop_music(&mut self) {
        self.push(AudioCue::StopMusic);
    }

    fn play_sfx(&mut self, sfx: Sfx) {
        self.push(AudioCue::PlaySfx { sfx });
    }
}

#[derive(Debug, Clone)]
pub struct AudioDispatcher {
    music_on: bool,
    sfx_on: bool,
    /// Last track asked for; resumes when music is switched back on.
    requested: Option<MusicTrack>,
    playing: Option<MusicTrack>,
}

impl Default for AudioDispatcher {
    fn default() -> Self {
        Self {
            music_on: true,
            sfx_on: true,
            requested: None,
            playing: None,
        }
    }
}

impl AudioDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn sfx_on(&self) -> bool {
        self.sfx_on
    }

    pub fn playing(&self) -> Option<MusicTrack> {
        self.playing
    }

    /// Play the cue for one event.
    pub fn dispatch(&mut self, event: &GameEvent, sink: &mut impl AudioSink) {
        match event {
            GameEvent::RoundStarted { .. } => self.play_game_music(sink),
            GameEvent::Hit { .. } => self.play_sfx(Sfx::Hit, sink),
            GameEvent::Miss { .. } => self.play_sfx(Sfx::Miss, sink),
            GameEvent::RoundEnded { .. }
            | GameEvent::TargetSpawned { .. }
            | GameEvent::TargetDespawned { .. } => {}
        }
    }

    pub fn dispatch_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a GameEvent>,
        sink: &mut impl AudioSink,
    ) {
        for event in events {
            self.dispatch(event, sink);
        }
    }

    pub fn play_menu_music(&mut self, sink: &mut impl AudioSink) {
        self.play_music(MusicTrack::Menu, sink);
    }

    pub fn play_game_music(&mut self, sink: &mut impl AudioSink) {
        self.play_music(MusicTrack::Game, sink);
    }

    /// Start `track` unless it is already playing.
    pub fn play_music(&mut self, track: MusicTrack, sink: &mut impl AudioSink) {
        self.requested = Some(track);
        if !self.music_on || self.playing == Some(track) {
            return;
        }
        self.playing = Some(track);
        sink.play_music(track);
    }

    pub fn stop_music(&mut self, sink: &mut impl AudioSink) {
        self.requested = None;
        if self.playing.take().is_some() {
            sink.stop_music();
        }
    }

    pub fn play_sfx(&mut self, sfx: Sfx, sink: &mut impl AudioSink) {
        if self.sfx_on {
            sink.play_sfx(sfx);
        }
    }

    pub fn set_music_on(&mut self, on: bool, sink: &mut impl AudioSink) {
        self.music_on = on;
        if !on {
            if self.playing.take().is_some() {
                sink.stop_music();
            }
        } else if let Some(track) = self.requested {
            self.play_music(track, sink);
        }
    }

    pub fn set_sfx_on(&mut self, on: bool) {
        self.sfx_on = on;
    }

    pub fn toggle_music(&mut self, sink: &mut impl AudioSink) {
        self.set_music_on(!self.music_on, sink);
    }

    pub fn toggle_sfx(&mut self) {
        self.set_sfx_on(!self.sfx_on);
    }
}
