//! Per-frame simulation tick
//!
//! Core game loop step. Advances exactly one fixed step per call; the host's
//! refresh callback sets the pace.

use rand::Rng;

use super::collision::{paddle_collision, wall_collision};
use super::state::{GameEvent, GameState, Side};

/// Input intents captured once per frame (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Absolute top edge for the human paddle (from mouse/touch), unclamped
    pub human_paddle_y: Option<f32>,
    /// Held keyboard direction: -1 up, +1 down, 0 none
    pub human_nudge: i8,
    /// Pause toggle (space)
    pub toggle_pause: bool,
    /// Force the pause state
    pub set_paused: Option<bool>,
    /// Zero scores and serve a fresh ball (reset button)
    pub reset_match: bool,
}

/// Advance the game state by one step, returning what happened
///
/// Pointer writes, resets and pause changes are applied even while paused;
/// everything else is frozen until play resumes.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(y) = input.human_paddle_y {
        state.set_human_paddle_y(y);
    }

    if input.reset_match {
        state.reset_match(rng);
        events.push(GameEvent::MatchReset);
    }

    if let Some(paused) = input.set_paused {
        state.set_paused(paused);
    }
    if input.toggle_pause {
        state.toggle_pause();
    }

    if state.is_paused() {
        return events;
    }

    state.time_ticks += 1;

    let height = state.height();
    let midline = state.width() / 2.0;

    // Keyboard movement
    if input.human_nudge != 0 {
        state.human.nudge(input.human_nudge.signum() as f32, height);
    }

    // Computer paddle AI
    state
        .computer
        .track(state.ball.pos.y, state.tuning.ai_dead_zone, height);

    state.ball.integrate();

    if let Some(wall) = wall_collision(&mut state.ball, height) {
        log::trace!("Wall bounce ({:?}) at x={:.1}", wall, state.ball.pos.x);
        events.push(GameEvent::WallBounce { wall });
    }

    if paddle_collision(
        &mut state.ball,
        &state.human,
        Side::Human,
        midline,
        &state.tuning,
    ) {
        log::trace!("Human paddle hit, speed {:.2}", state.ball.speed);
        events.push(GameEvent::PaddleBounce { side: Side::Human });
    }

    if paddle_collision(
        &mut state.ball,
        &state.computer,
        Side::Computer,
        midline,
        &state.tuning,
    ) {
        log::trace!("Computer paddle hit, speed {:.2}", state.ball.speed);
        events.push(GameEvent::PaddleBounce {
            side: Side::Computer,
        });
    }

    // Ball out of left or right
    let winner = if state.ball.pos.x + state.ball.radius < 0.0 {
        Some(Side::Computer)
    } else if state.ball.pos.x - state.ball.radius > state.width() {
        Some(Side::Human)
    } else {
        None
    };

    if let Some(winner) = winner {
        state.score.award(winner);
        log::debug!(
            "Point to {:?}: {} (tick {})",
            winner,
            state.score.line(),
            state.time_ticks
        );
        events.push(GameEvent::PointScored { winner });
        state.reset_ball(Some(winner), rng);
    }

    events
}
