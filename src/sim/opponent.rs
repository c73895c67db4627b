//! Scripted opponent
//!
//! Plain pursuit of the ball's current height. No prediction and no
//! difficulty ramp; the opponent is slower than the player, so it lags on
//! steep shots and can be beaten.

use super::state::Paddle;

/// Move `paddle` one step toward `ball_y`, holding still inside `dead_zone`
///
/// Does not clamp; the tick clamps after every move.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, dead_zone: f32) {
    let center = paddle.center_y();
    if center < ball_y - dead_zone {
        paddle.y += paddle.speed;
    } else if center > ball_y + dead_zone {
        paddle.y -= paddle.speed;
    }
}
