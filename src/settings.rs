//! Game settings and tuning
//!
//! Loaded from JSON. Every field has a default, so a settings file only needs
//! the values it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Numeric tuning for the simulation
///
/// Copied into the game state so the step never reads globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between a side wall and its paddle
    pub paddle_offset: f32,
    /// Keyboard step for the human paddle (units/tick)
    pub human_paddle_speed: f32,
    /// Computer paddle velocity cap (units/tick)
    pub computer_paddle_speed: f32,
    pub ai_dead_zone: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub serve_max_angle_deg: f32,
    pub ball_max_speed: f32,
    /// Multiplier applied to ball speed on every paddle hit
    pub paddle_boost: f32,
    pub max_bounce_angle_deg: f32,
    pub min_horizontal_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset: PADDLE_OFFSET,
            human_paddle_speed: HUMAN_PADDLE_SPEED,
            computer_paddle_speed: COMPUTER_PADDLE_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,

            ball_radius: BALL_RADIUS,
            serve_speed: BALL_SERVE_SPEED,
            serve_max_angle_deg: SERVE_MAX_ANGLE_DEG,
            ball_max_speed: BALL_MAX_SPEED,
            paddle_boost: PADDLE_BOOST,
            max_bounce_angle_deg: MAX_BOUNCE_ANGLE_DEG,
            min_horizontal_speed: MIN_HORIZONTAL_SPEED,
        }
    }
}

impl Tuning {
    /// Maximum reflection angle in radians
    pub fn max_bounce_angle(&self) -> f32 {
        self.max_bounce_angle_deg.to_radians()
    }

    /// Maximum serve angle in radians
    pub fn serve_max_angle(&self) -> f32 {
        self.serve_max_angle_deg.to_radians()
    }

    /// Lowest legal top edge for a paddle
    pub fn paddle_max_y(&self) -> f32 {
        self.playfield_height - self.paddle_height
    }

    /// Repair values that would break simulation invariants
    ///
    /// Returns true if anything was changed.
    pub fn sanitize(&mut self) -> bool {
        let defaults = Tuning::default();
        let mut changed = false;

        let mut positive = |name: &str, value: &mut f32, fallback: f32| {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Tuning {} = {} is not positive, using {}", name, value, fallback);
                *value = fallback;
                changed = true;
            }
        };
        positive("playfield_width", &mut self.playfield_width, defaults.playfield_width);
        positive("playfield_height", &mut self.playfield_height, defaults.playfield_height);
        positive("paddle_width", &mut self.paddle_width, defaults.paddle_width);
        positive("paddle_height", &mut self.paddle_height, defaults.paddle_height);
        positive("ball_radius", &mut self.ball_radius, defaults.ball_radius);
        positive("serve_speed", &mut self.serve_speed, defaults.serve_speed);
        positive("human_paddle_speed", &mut self.human_paddle_speed, defaults.human_paddle_speed);
        positive(
            "computer_paddle_speed",
            &mut self.computer_paddle_speed,
            defaults.computer_paddle_speed,
        );

        if self.paddle_height > self.playfield_height {
            log::warn!(
                "Paddle height {} exceeds playfield height {}, clamping",
                self.paddle_height,
                self.playfield_height
            );
            self.paddle_height = self.playfield_height;
            changed = true;
        }

        if !self.paddle_offset.is_finite() || self.paddle_offset < 0.0 {
            log::warn!("Paddle offset {} is invalid, using 0", self.paddle_offset);
            self.paddle_offset = 0.0;
            changed = true;
        }

        if !self.ai_dead_zone.is_finite() || self.ai_dead_zone < 0.0 {
            log::warn!("AI dead zone {} is invalid, using 0", self.ai_dead_zone);
            self.ai_dead_zone = 0.0;
            changed = true;
        }

        // Speed must never decrease on a bounce
        if !self.paddle_boost.is_finite() || self.paddle_boost < 1.0 {
            log::warn!("Paddle boost {} would slow the ball, using 1.0", self.paddle_boost);
            self.paddle_boost = 1.0;
            changed = true;
        }

        if !self.ball_max_speed.is_finite() || self.ball_max_speed < self.serve_speed {
            log::warn!(
                "Ball max speed {} is below serve speed {}, raising it",
                self.ball_max_speed,
                self.serve_speed
            );
            self.ball_max_speed = self.serve_speed;
            changed = true;
        }

        if !self.min_horizontal_speed.is_finite() || self.min_horizontal_speed < 0.0 {
            log::warn!(
                "Min horizontal speed {} is invalid, using {}",
                self.min_horizontal_speed,
                defaults.min_horizontal_speed
            );
            self.min_horizontal_speed = defaults.min_horizontal_speed;
            changed = true;
        }

        for (name, angle, fallback) in [
            (
                "serve_max_angle_deg",
                &mut self.serve_max_angle_deg,
                defaults.serve_max_angle_deg,
            ),
            (
                "max_bounce_angle_deg",
                &mut self.max_bounce_angle_deg,
                defaults.max_bounce_angle_deg,
            ),
        ] {
            if !angle.is_finite() || !(0.0..90.0).contains(&*angle) {
                log::warn!("Tuning {} = {} is outside [0, 90), using {}", name, angle, fallback);
                *angle = fallback;
                changed = true;
            }
        }

        changed
    }
}

/// Errors from reading or writing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation tuning
    pub tuning: Tuning,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Suppress all sound
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, repairing out-of-range values
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Repair tuning and clamp volumes into range
    pub fn sanitize(&mut self) -> bool {
        let mut changed = self.tuning.sanitize();
        for (name, volume) in [
            ("master_volume", &mut self.master_volume),
            ("sfx_volume", &mut self.sfx_volume),
        ] {
            let fixed = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 1.0 };
            if fixed != *volume {
                log::warn!("{} = {} is outside [0, 1], using {}", name, volume, fixed);
                *volume = fixed;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.serve_speed, 5.3);
        assert_eq!(tuning.ball_max_speed, 16.0);
        assert_eq!(tuning.paddle_height, 90.0);
        assert!((tuning.max_bounce_angle() - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "tuning": { "playfield_width": 640 } }"#)
            .expect("valid json");
        assert!(settings.muted);
        assert_eq!(settings.tuning.playfield_width, 640.0);
        assert_eq!(settings.tuning.playfield_height, PLAYFIELD_HEIGHT);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_sanitize_repairs_bad_values() {
        let mut settings = Settings::default();
        settings.tuning.paddle_height = 900.0;
        settings.tuning.paddle_boost = 0.5;
        settings.tuning.ball_max_speed = 1.0;
        settings.master_volume = 3.0;

        assert!(settings.sanitize());
        assert_eq!(settings.tuning.paddle_height, settings.tuning.playfield_height);
        assert_eq!(settings.tuning.paddle_boost, 1.0);
        assert_eq!(settings.tuning.ball_max_speed, settings.tuning.serve_speed);
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_sanitize_leaves_defaults_alone() {
        let mut settings = Settings::default();
        assert!(!settings.sanitize());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut settings = Settings::default();
        settings.sfx_volume = 0.25;
        settings.tuning.ai_dead_zone = 4.0;
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_error_messages_keep_source() {
        use std::error::Error as _;

        let err = Settings::from_json("[1, 2").unwrap_err();
        assert!(err.to_string().starts_with("settings parse error: "));
        assert!(err.source().is_some());

        let io = SettingsError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.to_string(), "settings I/O error: gone");
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("table-pong-{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.muted = true;
        settings.tuning.paddle_height = 120.0;

        settings.save(&path).expect("writable temp dir");
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.expect("just written"), settings);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/table-pong.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(path), Settings::default());
    }
}
