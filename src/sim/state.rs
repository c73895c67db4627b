//! Game state and core simulation types
//!
//! Everything one match needs lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::config::Config;

/// One side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by local input
    Player,
    /// Right paddle, driven by the pursuit controller
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal sign of travel toward this side (+1 right, -1 left)
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball and paddles are simulated every tick
    Playing,
    /// Point just ended; ball is re-served toward `toward` once the countdown runs out
    Serving { remaining_ms: f32, toward: Side },
}

/// A paddle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical distance covered per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, speed: f32, config: &Config) -> Self {
        Self {
            x,
            y: config.paddle_center_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Right edge (the face of the left paddle)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `y` lies within the paddle's vertical span (edges inclusive)
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.bottom()
    }

    /// Keep the paddle inside `[0, field_height - height]`
    pub fn clamp_to_field(&mut self, field_height: f32) {
        self.y = clamp(self.y, 0.0, field_height - self.height);
    }

    pub fn recenter(&mut self, field_height: f32) {
        self.y = (field_height - self.height) / 2.0;
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Cached magnitude of `vel`; exact right after a serve or paddle hit
    pub speed: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed: 0.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Seed the serve RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    /// Ticks simulated while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Create a match and serve the first ball in a random direction
    pub fn new(config: Config, seed: u64) -> Self {
        let player = Paddle::new(config.player_x(), config.player_speed, &config);
        let opponent = Paddle::new(config.opponent_x(), config.opponent_speed, &config);
        let ball = Ball::new(config.ball_radius);

        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player,
            opponent,
            ball,
            score: Score::new(),
            phase: MatchPhase::Playing,
            time_ticks: 0,
        };

        let toward = state.random_side();
        state.serve(toward);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Center of the field, where every serve starts
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.config.field_width / 2.0, self.config.field_height / 2.0)
    }
}
