//! Simulation module
//!
//! All gameplay logic lives here and runs one step per display refresh:
//! - Per-frame movement (no fixed timestep, no delta-time scaling)
//! - Seeded RNG only, so a seed and an input sequence replay exactly
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod opponent;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_walls, hits_left_paddle, hits_right_paddle, reflect, resolve_paddle_hit};
pub use input::{InputIntent, Key, pointer_to_field_y};
pub use opponent::track_ball;
pub use serve::serve_ball;
pub use state::{Ball, GameState, MatchPhase, Paddle, Score, Side};
pub use tick::{TickEvents, tick};
