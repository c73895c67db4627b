//! Per-frame simulation tick
//!
//! One call advances the match by one display refresh. Movement is in
//! pixels per tick and is not scaled by elapsed time; only the serve
//! countdown consumes `elapsed_ms`.

use super::collision::{bounce_off_walls, resolve_paddle_hit};
use super::input::InputIntent;
use super::opponent::track_ball;
use super::state::{GameState, MatchPhase, Side};
use crate::clamp;

/// What happened during a tick (for HUD updates and stats)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Last paddle to return the ball this tick
    pub paddle_hit: Option<Side>,
    /// Paddle returns this tick; 2 when the ball touches both paddles in one step
    pub paddle_hits: u32,
    /// This side won a point
    pub scored: Option<Side>,
    /// Ball was re-served toward this side
    pub served: Option<Side>,
}

/// Advance the match by one frame
///
/// While serving, only the countdown runs; paddles, ball and any pending
/// pointer target are left untouched until play resumes.
pub fn tick(state: &mut GameState, input: &mut InputIntent, elapsed_ms: f32) -> TickEvents {
    let mut events = TickEvents::default();

    if let MatchPhase::Serving {
        remaining_ms,
        toward,
    } = state.phase
    {
        let remaining_ms = remaining_ms - elapsed_ms.max(0.0);
        if remaining_ms <= 0.0 {
            state.serve(toward);
            events.served = Some(toward);
        } else {
            state.phase = MatchPhase::Serving {
                remaining_ms,
                toward,
            };
        }
        return events;
    }

    state.time_ticks += 1;

    // Player paddle: latest pointer position first, then held keys
    move_player(state, input);

    let field_height = state.config.field_height;
    state.player.clamp_to_field(field_height);
    state.opponent.clamp_to_field(field_height);

    track_ball(&mut state.opponent, state.ball.pos.y, state.config.opponent_dead_zone);
    state.opponent.clamp_to_field(field_height);

    // Single Euler step, no substeps
    state.ball.pos += state.ball.vel;

    if bounce_off_walls(&mut state.ball, field_height) {
        events.wall_bounce = true;
        log::trace!("Wall bounce at x={:.1}", state.ball.pos.x);
    }

    // Left first; a left hit can move the ball out of reach of the right check
    let kick = input.kick_sign().map(|sign| sign * state.config.key_kick);
    if resolve_paddle_hit(&mut state.ball, &state.player, Side::Player, &state.config, kick) {
        events.paddle_hit = Some(Side::Player);
        events.paddle_hits += 1;
        log::debug!("Player hit, ball speed {:.2}", state.ball.speed);
    }
    if resolve_paddle_hit(&mut state.ball, &state.opponent, Side::Opponent, &state.config, None) {
        events.paddle_hit = Some(Side::Opponent);
        events.paddle_hits += 1;
        log::debug!("Opponent hit, ball speed {:.2}", state.ball.speed);
    }

    if let Some(winner) = check_scoring(state) {
        state.score.increment(winner);
        // Serve toward the side that just lost the point
        state.begin_serve_delay(winner.opposite());
        events.scored = Some(winner);
        log::info!(
            "Point to {} ({} - {})",
            winner.as_str(),
            state.score.player,
            state.score.opponent
        );
    }

    events
}

fn move_player(state: &mut GameState, input: &mut InputIntent) {
    let paddle = &mut state.player;

    if let Some(target) = input.take_pointer_target() {
        paddle.y = clamp(
            target - paddle.half_height(),
            0.0,
            state.config.field_height - paddle.height,
        );
    }
    if input.up {
        paddle.y -= paddle.speed;
    }
    if input.down {
        paddle.y += paddle.speed;
    }
}

/// Side that won the point, if the ball fully left the field
fn check_scoring(state: &GameState) -> Option<Side> {
    let ball = &state.ball;
    if ball.pos.x < -ball.radius {
        Some(Side::Opponent)
    } else if ball.pos.x > state.config.field_width + ball.radius {
        Some(Side::Player)
    } else {
        None
    }
}
