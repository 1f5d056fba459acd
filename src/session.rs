//! Game session: the driver side of the simulation
//!
//! Owns the state and the seeded RNG, queues intents from the input
//! collaborator between frames, and fans each frame's events out to the audio
//! and score-display collaborators.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::audio::{AudioMixer, AudioSink};
use crate::settings::Settings;
use crate::sim::{Ball, GameEvent, GameState, Paddle, Score, Side, TickInput, tick};

/// Label drawn over the table while paused
pub const PAUSED_LABEL: &str = "Paused";

/// Host scoreboard (DOM text, HUD widget, ...)
pub trait ScoreDisplay {
    fn show_scores(&mut self, human: u32, computer: u32);
}

/// Headless hosts have no scoreboard
impl ScoreDisplay for () {
    fn show_scores(&mut self, _human: u32, _computer: u32) {}
}

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub human: Paddle,
    pub computer: Paddle,
    pub score: Score,
    pub paused: bool,
    /// Pre-formatted score line ("3 — 1")
    pub score_line: String,
    /// Overlay text, present only while paused
    pub overlay: Option<&'static str>,
}

/// A running match plus the intents waiting for the next frame
pub struct Session {
    state: GameState,
    rng: Pcg32,
    seed: u64,
    pending: TickInput,
    keys_up: bool,
    keys_down: bool,
    audio: AudioMixer,
}

impl Session {
    /// Start a match with the given settings and RNG seed
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(settings.tuning.clone(), &mut rng);
        log::info!("New session (seed {})", seed);
        Self {
            state,
            rng,
            seed,
            pending: TickInput::default(),
            keys_up: false,
            keys_down: false,
            audio: AudioMixer::from_settings(settings),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn audio(&self) -> &AudioMixer {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioMixer {
        &mut self.audio
    }

    /// Queue an absolute top edge for the human paddle (clamped when applied)
    pub fn set_human_paddle_y(&mut self, y: f32) {
        self.pending.human_paddle_y = Some(y);
    }

    /// Center the human paddle on a pointer's y coordinate
    pub fn set_pointer_y(&mut self, pointer_y: f32) {
        self.set_human_paddle_y(pointer_y - self.state.human.height / 2.0);
    }

    /// Record which arrow keys are held; both held cancel out
    pub fn set_keys(&mut self, up: bool, down: bool) {
        self.keys_up = up;
        self.keys_down = down;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.pending.set_paused = Some(paused);
        self.pending.toggle_pause = false;
    }

    pub fn toggle_pause(&mut self) {
        // Two toggles within one frame cancel out
        self.pending.toggle_pause = !self.pending.toggle_pause;
    }

    /// Zero scores and serve a fresh ball on the next frame
    pub fn reset_match(&mut self) {
        self.pending.reset_match = true;
    }

    /// Serve a new ball immediately without touching the score
    pub fn reset_ball(&mut self, last_winner: Option<Side>) {
        self.state.reset_ball(last_winner, &mut self.rng);
    }

    /// Advance one frame using the intents gathered since the last one
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let mut input = std::mem::take(&mut self.pending);
        input.human_nudge = self.keys_down as i8 - self.keys_up as i8;
        tick(&mut self.state, &input, &mut self.rng)
    }

    /// Hand a frame's events to the collaborators
    pub fn dispatch(
        &self,
        events: &[GameEvent],
        sink: &mut impl AudioSink,
        display: &mut impl ScoreDisplay,
    ) {
        self.audio.route(events, sink);
        let score_changed = events.iter().any(|e| {
            matches!(
                e,
                GameEvent::PointScored { .. } | GameEvent::MatchReset
            )
        });
        if score_changed {
            display.show_scores(self.state.score.human, self.state.score.computer);
        }
    }

    /// `frame` followed by `dispatch`
    pub fn run_frame(
        &mut self,
        sink: &mut impl AudioSink,
        display: &mut impl ScoreDisplay,
    ) -> Vec<GameEvent> {
        let events = self.frame();
        self.dispatch(&events, sink, display);
        events
    }

    /// "Test sound" button
    pub fn test_sound(&self, sink: &mut impl AudioSink) {
        self.audio.test_sound(sink);
    }

    pub fn snapshot(&self) -> Snapshot {
        let paused = self.state.is_paused();
        Snapshot {
            ball: self.state.ball,
            human: self.state.human,
            computer: self.state.computer,
            score: self.state.score,
            paused,
            score_line: self.state.score.line(),
            overlay: paused.then_some(PAUSED_LABEL),
        }
    }
}
