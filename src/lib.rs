//! Table Pong - a two-paddle table tennis game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, match state)
//! - `session`: Driver that owns the state and feeds collaborators
//! - `settings`: Data-driven tuning and audio preferences
//! - `audio`: Sound cue routing for the host's audio backend

pub mod audio;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use audio::{AudioMixer, AudioSink, SoundEffect};
pub use session::{ScoreDisplay, Session, Snapshot};
pub use settings::{Settings, SettingsError, Tuning};

/// Reference tuning constants (units are pixels and ticks)
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Gap between a side wall and its paddle
    pub const PADDLE_OFFSET: f32 = 30.0;
    /// Keyboard step for the human paddle
    pub const HUMAN_PADDLE_SPEED: f32 = 7.0;
    /// Hard per-tick velocity cap of the computer paddle
    pub const COMPUTER_PADDLE_SPEED: f32 = 5.0;
    /// The computer paddle holds still when this close to its target
    pub const AI_DEAD_ZONE: f32 = 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 9.0;
    pub const BALL_SERVE_SPEED: f32 = 5.3;
    /// Serve angle is drawn from [-max, +max]
    pub const SERVE_MAX_ANGLE_DEG: f32 = 30.0;
    /// Maximum speed after repeated paddle hits
    pub const BALL_MAX_SPEED: f32 = 16.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.05;
    /// Reflection angle at the very edge of a paddle
    pub const MAX_BOUNCE_ANGLE_DEG: f32 = 75.0;
    /// Horizontal speed floor after a paddle bounce (prevents vertical stalls)
    pub const MIN_HORIZONTAL_SPEED: f32 = 1.2;
}

/// Restrict `v` to `[lo, hi]` (caller guarantees `lo <= hi`)
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        // Degenerate range collapses to the single allowed value
        assert_eq!(clamp(7.0, 4.0, 4.0), 4.0);
    }
}
