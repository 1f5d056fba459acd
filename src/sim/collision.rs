//! Collision detection and response
//!
//! Walls reflect the ball mirror-like. Paddles redirect it: the reflection
//! angle depends on where along the paddle the ball struck, and every paddle
//! hit speeds the ball up until the cap.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::geometry::circle_rect_collision;
use super::state::{Ball, Paddle, Side, Wall};
use crate::settings::Tuning;

/// Bounce the ball off the top or bottom wall
///
/// The ball is snapped so it touches the wall exactly and `vel.y` is negated.
pub fn wall_collision(ball: &mut Ball, playfield_height: f32) -> Option<Wall> {
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Top)
    } else if ball.pos.y + ball.radius >= playfield_height {
        ball.pos.y = playfield_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Reflection angle for a ball at height `ball_y` striking `paddle`
///
/// Zero at the paddle center, `±max_angle` at its ends. A ball clipping a
/// corner can exceed the max, but never a right angle: past 90° the ball
/// would head back toward the paddle that just struck it.
pub fn bounce_angle(ball_y: f32, paddle: &Paddle, max_angle: f32) -> f32 {
    let half = paddle.height / 2.0;
    let normalized = (ball_y - paddle.center_y()) / half;
    (normalized * max_angle).clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Redirect the ball after it struck `paddle`
///
/// The new horizontal direction points away from whichever half of the table
/// the ball is in (`midline_x` splits the halves), not away from the paddle.
pub fn reflect_off_paddle(ball: &mut Ball, paddle: &Paddle, midline_x: f32, tuning: &Tuning) {
    let angle = bounce_angle(ball.pos.y, paddle, tuning.max_bounce_angle());

    ball.speed = (ball.speed * tuning.paddle_boost).min(tuning.ball_max_speed);

    let direction = if ball.pos.x < midline_x { 1.0 } else { -1.0 };
    ball.vel = Vec2::new(
        direction * ball.speed * angle.cos(),
        ball.speed * angle.sin(),
    );

    if ball.vel.x.abs() < tuning.min_horizontal_speed {
        ball.vel.x = direction * tuning.min_horizontal_speed;
    }
}

/// Test and resolve a hit between the ball and one paddle
///
/// Only checked while the ball travels toward that paddle, so a ball still
/// overlapping right after a bounce is not hit again.
pub fn paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    midline_x: f32,
    tuning: &Tuning,
) -> bool {
    let approaching = match side {
        Side::Human => ball.vel.x < 0.0,
        Side::Computer => ball.vel.x > 0.0,
    };
    if !approaching || !circle_rect_collision(ball.pos, ball.radius, &paddle.as_rect()) {
        return false;
    }

    // Push ball out of paddle
    ball.pos.x = match side {
        Side::Human => paddle.x + paddle.width + ball.radius,
        Side::Computer => paddle.x - ball.radius,
    };
    reflect_off_paddle(ball, paddle, midline_x, tuning);
    true
}
