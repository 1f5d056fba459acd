//! Game state and core simulation types
//!
//! Everything the step reads or writes lives in [`GameState`]; the driver owns
//! it and hands it to [`super::tick`] each frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::clamp;
use crate::settings::Tuning;

/// One end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by pointer/keyboard
    Human,
    /// Right paddle, driven by the tracking policy
    Computer,
}

/// Top or bottom wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Who serves the next ball
///
/// The server launches toward the opposite end, so a human serve travels
/// right and a computer serve travels left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServeSide {
    Human,
    Computer,
    #[default]
    Random,
}

impl ServeSide {
    /// The last point's winner serves; no winner means a coin flip
    pub fn from_winner(last_winner: Option<Side>) -> Self {
        match last_winner {
            Some(Side::Human) => ServeSide::Human,
            Some(Side::Computer) => ServeSide::Computer,
            None => ServeSide::Random,
        }
    }

    /// Launch direction, `None` when it must be drawn at random
    pub fn direction_right(&self) -> Option<bool> {
        match self {
            ServeSide::Human => Some(true),
            ServeSide::Computer => Some(false),
            ServeSide::Random => None,
        }
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Simulation frozen; state is still readable
    Paused,
}

/// Something collaborators may want to react to (sound, score text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce { wall: Wall },
    /// Ball bounced off a paddle
    PaddleBounce { side: Side },
    /// Ball left the table; `winner` gained a point
    PointScored { winner: Side },
    /// Scores were zeroed by an explicit reset
    MatchReset,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Authoritative scalar speed; `vel` is rebuilt from it on paddle hits
    pub speed: f32,
}

impl Ball {
    /// Serve a fresh ball from `center`
    ///
    /// With no direction given, left or right is chosen uniformly. The launch
    /// angle is drawn uniformly from the tuning's serve cone.
    pub fn serve<R: Rng + ?Sized>(
        center: Vec2,
        direction_right: Option<bool>,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let right = direction_right.unwrap_or_else(|| rng.random_bool(0.5));
        let max_angle = tuning.serve_max_angle();
        let angle = rng.random_range(-max_angle..=max_angle);
        let sign = if right { 1.0 } else { -1.0 };
        let speed = tuning.serve_speed;

        Self {
            pos: center,
            vel: Vec2::new(sign * speed * angle.cos(), speed * angle.sin()),
            radius: tuning.ball_radius,
            speed,
        }
    }

    /// Advance one tick (pure translation)
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// A paddle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Per-tick movement step
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    /// Get the paddle as a Rect for collision detection
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Write a new top edge, clamped to the playfield
    pub fn set_y(&mut self, proposed: f32, playfield_height: f32) {
        self.y = clamp(proposed, 0.0, playfield_height - self.height);
    }

    /// Move one step in `direction` (-1 up, +1 down)
    pub fn nudge(&mut self, direction: f32, playfield_height: f32) {
        self.set_y(self.y + direction * self.speed, playfield_height);
    }

    /// Bang-bang tracking: step a fixed `speed` toward centering on `target_y`
    /// unless already within `dead_zone` of it
    pub fn track(&mut self, target_y: f32, dead_zone: f32, playfield_height: f32) {
        let target = target_y - self.height / 2.0;
        if (target - self.y).abs() > dead_zone {
            let direction = if target > self.y { 1.0 } else { -1.0 };
            self.nudge(direction, playfield_height);
        }
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human: u32,
    pub computer: u32,
}

impl Score {
    pub fn award(&mut self, winner: Side) {
        match winner {
            Side::Human => self.human += 1,
            Side::Computer => self.computer += 1,
        }
    }

    /// HUD line, human first
    pub fn line(&self) -> String {
        format!("{} — {}", self.human, self.computer)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning in effect for this match
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    pub score: Score,
    /// Who served the ball currently in play
    pub serving_side: ServeSide,
    pub ball: Ball,
    /// Left paddle
    pub human: Paddle,
    /// Right paddle
    pub computer: Paddle,
    /// Ticks simulated while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new match with centered paddles and a random serve
    ///
    /// The tuning is repaired first, so values built in code get the same
    /// checks as values loaded from a settings file.
    pub fn new<R: Rng + ?Sized>(mut tuning: Tuning, rng: &mut R) -> Self {
        if tuning.sanitize() {
            log::warn!("Tuning was repaired before starting the match");
        }

        let start_y = (tuning.playfield_height - tuning.paddle_height) / 2.0;
        let mut human = Paddle::new(
            tuning.paddle_offset,
            0.0,
            tuning.paddle_width,
            tuning.paddle_height,
            tuning.human_paddle_speed,
        );
        human.set_y(start_y, tuning.playfield_height);
        let mut computer = Paddle::new(
            tuning.playfield_width - tuning.paddle_offset - tuning.paddle_width,
            0.0,
            tuning.paddle_width,
            tuning.paddle_height,
            tuning.computer_paddle_speed,
        );
        computer.set_y(start_y, tuning.playfield_height);
        let center = Vec2::new(tuning.playfield_width / 2.0, tuning.playfield_height / 2.0);
        let ball = Ball::serve(center, None, &tuning, rng);

        Self {
            tuning,
            phase: GamePhase::Playing,
            score: Score::default(),
            serving_side: ServeSide::Random,
            ball,
            human,
            computer,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.tuning.playfield_width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.tuning.playfield_height
    }

    /// Middle of the table
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.phase = if paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        };
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.is_paused());
    }

    /// External write of the human paddle's top edge (clamped)
    pub fn set_human_paddle_y(&mut self, y: f32) {
        let height = self.height();
        self.human.set_y(y, height);
    }

    /// Serve a new ball after a point (or on demand) and resume play
    ///
    /// The winner of the last point serves; `None` picks a side at random.
    pub fn reset_ball<R: Rng + ?Sized>(&mut self, last_winner: Option<Side>, rng: &mut R) {
        self.serving_side = ServeSide::from_winner(last_winner);
        self.ball = Ball::serve(
            self.center(),
            self.serving_side.direction_right(),
            &self.tuning,
            rng,
        );
        self.phase = GamePhase::Playing;
        log::debug!(
            "Serve by {:?}: vel=({:.2}, {:.2})",
            self.serving_side,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Zero both scores and serve a random ball
    pub fn reset_match<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = Score::default();
        self.reset_ball(None, rng);
        log::info!("Match reset");
    }
}
