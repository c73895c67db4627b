//! Game configuration
//!
//! Defaults are the tuning in [`crate::consts`]. The browser build
//! always plays with the defaults; the native runner can override any subset
//! of fields from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Field geometry, speeds and timings for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,

    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speedup: f32,
    /// Optional ceiling on ball speed. `None` keeps the classic behavior,
    /// where every paddle hit speeds the ball up without limit.
    pub ball_max_speed: Option<f32>,

    pub max_bounce_deg: f32,
    pub serve_spread_deg: f32,
    pub serve_delay_ms: f32,
    pub key_kick: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            player_speed: PLAYER_SPEED,
            opponent_speed: OPPONENT_SPEED,
            opponent_dead_zone: OPPONENT_DEAD_ZONE,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_speedup: BALL_SPEEDUP,
            ball_max_speed: None,

            max_bounce_deg: MAX_BOUNCE_DEG,
            serve_spread_deg: SERVE_SPREAD_DEG,
            serve_delay_ms: SERVE_DELAY_MS,
            key_kick: KEY_KICK,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON object over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry the simulation cannot keep in-field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("opponent_dead_zone", self.opponent_dead_zone),
            ("serve_delay_ms", self.serve_delay_ms),
            ("key_kick", self.key_kick),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(invalid(field, format!("must not be negative, got {value}")));
            }
        }

        if self.paddle_height > self.field_height {
            return Err(invalid(
                "paddle_height",
                format!(
                    "{} does not fit in a field {} tall",
                    self.paddle_height, self.field_height
                ),
            ));
        }

        if 2.0 * (self.paddle_inset + self.paddle_width) >= self.field_width {
            return Err(invalid(
                "field_width",
                "paddles overlap; widen the field or shrink the paddles".to_string(),
            ));
        }

        if self.ball_speedup < 1.0 {
            return Err(invalid(
                "ball_speedup",
                format!("must be at least 1.0, got {}", self.ball_speedup),
            ));
        }

        for (field, deg) in [
            ("max_bounce_deg", self.max_bounce_deg),
            ("serve_spread_deg", self.serve_spread_deg),
        ] {
            if !(deg > 0.0 && deg < 90.0) {
                return Err(invalid(field, format!("must be within (0, 90), got {deg}")));
            }
        }

        if let Some(max) = self.ball_max_speed {
            if max < self.ball_base_speed {
                return Err(invalid(
                    "ball_max_speed",
                    format!("{max} is below the base speed {}", self.ball_base_speed),
                ));
            }
        }

        Ok(())
    }

    /// Left edge of the player's (left) paddle
    pub fn player_x(&self) -> f32 {
        self.paddle_inset
    }

    /// Left edge of the opponent's (right) paddle
    pub fn opponent_x(&self) -> f32 {
        self.field_width - self.paddle_inset - self.paddle_width
    }

    /// Paddle y that vertically centers a paddle in the field
    pub fn paddle_center_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Largest legal paddle y
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    pub fn max_bounce(&self) -> f32 {
        self.max_bounce_deg.to_radians()
    }

    pub fn serve_spread(&self) -> f32 {
        self.serve_spread_deg.to_radians()
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
