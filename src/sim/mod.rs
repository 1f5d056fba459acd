//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, never scaled by frame time
//! - Randomness only through the injected RNG, only at serve time
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{bounce_angle, paddle_collision, reflect_off_paddle, wall_collision};
pub use geometry::{Rect, circle_rect_collision};
pub use state::{
    Ball, GameEvent, GamePhase, GameState, Paddle, Score, ServeSide, Side, Wall,
};
pub use tick::{TickInput, tick};
