//! Browser embedding
//!
//! Exposes a [`Session`] to JavaScript. The page owns the canvas, the audio
//! element, and the `requestAnimationFrame` loop; it calls `frame()` once per
//! refresh, plays `sound_sample(code)` for every hit code, and redraws from
//! `snapshot_json()`.

use wasm_bindgen::prelude::*;

use crate::audio::SoundEffect;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{GameEvent, Side};

/// Event codes returned by [`WebPong::frame`]
pub const EVENT_WALL_BOUNCE: u8 = 1;
pub const EVENT_PADDLE_BOUNCE: u8 = 2;
pub const EVENT_HUMAN_SCORED: u8 = 3;
pub const EVENT_COMPUTER_SCORED: u8 = 4;
pub const EVENT_MATCH_RESET: u8 = 5;

fn event_code(event: &GameEvent) -> u8 {
    match event {
        GameEvent::WallBounce { .. } => EVENT_WALL_BOUNCE,
        GameEvent::PaddleBounce { .. } => EVENT_PADDLE_BOUNCE,
        GameEvent::PointScored {
            winner: Side::Human,
        } => EVENT_HUMAN_SCORED,
        GameEvent::PointScored {
            winner: Side::Computer,
        } => EVENT_COMPUTER_SCORED,
        GameEvent::MatchReset => EVENT_MATCH_RESET,
    }
}

/// Sample the page should play for an event code, if the event makes a sound
#[wasm_bindgen]
pub fn sound_sample(code: u8) -> Option<String> {
    let effect = match code {
        EVENT_WALL_BOUNCE => SoundEffect::WallHit,
        EVENT_PADDLE_BOUNCE => SoundEffect::PaddleHit,
        _ => return None,
    };
    Some(effect.sample().to_string())
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Table Pong core loaded");
}

/// JavaScript handle to one match
#[wasm_bindgen]
pub struct WebPong {
    session: Session,
}

#[wasm_bindgen]
impl WebPong {
    /// Create a match; `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, settings_json: &str) -> WebPong {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).unwrap_or_else(|e| {
                log::warn!("{}; using default settings", e);
                Settings::default()
            })
        };
        WebPong {
            session: Session::new(&settings, seed),
        }
    }

    /// Mouse/touch position relative to the canvas top
    pub fn set_pointer_y(&mut self, y: f32) {
        self.session.set_pointer_y(y);
    }

    pub fn set_human_paddle_y(&mut self, y: f32) {
        self.session.set_human_paddle_y(y);
    }

    /// Arrow key state
    pub fn set_keys(&mut self, up: bool, down: bool) {
        self.session.set_keys(up, down);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.session.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn reset_match(&mut self) {
        self.session.reset_match();
    }

    /// Serve a new ball; `winner` is "human", "computer" or anything else for random
    pub fn reset_ball(&mut self, winner: &str) {
        let last_winner = match winner {
            "human" | "player" => Some(Side::Human),
            "computer" => Some(Side::Computer),
            _ => None,
        };
        self.session.reset_ball(last_winner);
    }

    /// Advance one frame; returns the event codes in order
    pub fn frame(&mut self) -> Vec<u8> {
        self.session.frame().iter().map(event_code).collect()
    }

    pub fn human_score(&self) -> u32 {
        self.session.state().score.human
    }

    pub fn computer_score(&self) -> u32 {
        self.session.state().score.computer
    }

    pub fn is_paused(&self) -> bool {
        self.session.state().is_paused()
    }

    /// Effective sound gain (0 when muted)
    pub fn sound_gain(&self) -> f32 {
        self.session.audio().gain()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.session.audio_mut().set_muted(muted);
    }

    pub fn is_muted(&self) -> bool {
        self.session.audio().is_muted()
    }

    /// Everything the renderer needs, as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {}", e);
            String::from("{}")
        })
    }
}
