//! Sound cue routing
//!
//! The simulation never plays audio. It emits events; this module maps them to
//! sound effects and hands those to whatever backend the host provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleBounce { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::WallBounce { .. } => Some(SoundEffect::WallHit),
            GameEvent::PointScored { .. } | GameEvent::MatchReset => None,
        }
    }

    /// Name of the sample the host should play (both hits share the "pop")
    pub fn sample(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit | SoundEffect::WallHit => "pop",
        }
    }
}

/// Host audio backend
///
/// Playback is fire-and-forget: restarting an already playing sample is the
/// backend's business.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, gain: f32);
}

/// Headless hosts have no audio
impl AudioSink for () {
    fn play(&mut self, _effect: SoundEffect, _gain: f32) {}
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioMixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Set sound effects volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective gain for sound effects
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a single effect unless silenced
    pub fn play(&self, effect: SoundEffect, sink: &mut impl AudioSink) {
        let gain = self.gain();
        if gain > 0.0 {
            sink.play(effect, gain);
        }
    }

    /// Play the sounds for one tick's events, in order
    pub fn route(&self, events: &[GameEvent], sink: &mut impl AudioSink) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect, sink);
        }
    }

    /// "Test sound" button: play the hit sound on demand
    pub fn test_sound(&self, sink: &mut impl AudioSink) {
        self.play(SoundEffect::PaddleHit, sink);
    }
}
