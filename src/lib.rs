//! Canvas Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Per-frame simulation (paddles, ball, collisions, scoring, serves)
//! - `renderer`: Draws simulation state onto a 2D drawing surface
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `config`: Tunable geometry and speeds (classic tuning by default)

pub mod config;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};
pub use game::Game;

use glam::Vec2;

/// Default game tuning
pub mod consts {
    /// Nominal display refresh the physics constants are tuned for
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle geometry - both paddles share it
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 12.0;
    /// Player paddle speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Opponent paddle speed, slower than the player so it can be beaten
    pub const OPPONENT_SPEED: f32 = 4.2;
    /// Opponent holds still while its center is within this band of the ball
    pub const OPPONENT_DEAD_ZONE: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Speed multiplier applied on every paddle hit
    pub const BALL_SPEEDUP: f32 = 1.03;

    /// Steepest bounce off a paddle edge (degrees)
    pub const MAX_BOUNCE_DEG: f32 = 75.0;
    /// Serves launch within +/- this angle of horizontal (degrees)
    pub const SERVE_SPREAD_DEG: f32 = 30.0;
    /// Pause between a point and the next serve
    pub const SERVE_DELAY_MS: f32 = 700.0;
    /// Vertical nudge added when the player hits while holding a key
    pub const KEY_KICK: f32 = 0.6;
}

/// Clamp `v` into `[lo, hi]`.
///
/// Total: when `lo > hi` the result is `lo`, where `f32::clamp` would panic.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Map a normalized paddle offset to a bounce angle (radians)
///
/// `relative` is -1 at the paddle top and +1 at the bottom; it is not clamped,
/// so edge contacts slightly past the paddle give slightly steeper angles.
#[inline]
pub fn bounce_angle(relative: f32, max_bounce: f32) -> f32 {
    relative * max_bounce
}

/// Velocity for `speed` along `angle` from horizontal, heading `dir` (+1 right, -1 left)
#[inline]
pub fn launch_velocity(speed: f32, angle: f32, dir: f32) -> Vec2 {
    Vec2::new(dir * (speed * angle.cos()).abs(), speed * angle.sin())
}
