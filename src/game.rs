//! Frame driver
//!
//! Owns one match plus the player's input intent, and runs exactly one
//! simulation tick and one draw per display refresh.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::consts::FRAME_MS;
use crate::renderer::{Surface, draw_frame};
use crate::sim::{GameState, InputIntent, Score, Side, TickEvents, tick};

/// End-of-run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: Score,
    pub paddle_hits: u64,
    pub longest_rally: u32,
    pub final_ball_speed: f32,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputIntent,
    /// Host timestamp of the previous frame
    last_time: Option<f64>,
    frames: u64,
    // Rally tracking
    rally: u32,
    longest_rally: u32,
    paddle_hits: u64,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
            input: InputIntent::new(),
            last_time: None,
            frames: 0,
            rally: 0,
            longest_rally: 0,
            paddle_hits: 0,
        }
    }

    /// One display refresh: tick once, then draw
    ///
    /// `now_ms` is the host's frame timestamp; it only feeds the serve
    /// countdown. The first frame counts as one nominal refresh.
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> TickEvents {
        let elapsed_ms = match self.last_time {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => FRAME_MS,
        };
        self.last_time = Some(now_ms);

        let events = self.update(elapsed_ms);
        draw_frame(&self.state, surface);
        events
    }

    /// Run a single simulation tick and fold its events into the stats
    pub fn update(&mut self, elapsed_ms: f32) -> TickEvents {
        let events = tick(&mut self.state, &mut self.input, elapsed_ms);
        self.frames += 1;

        if events.paddle_hits > 0 {
            self.paddle_hits += u64::from(events.paddle_hits);
            self.rally += events.paddle_hits;
            self.longest_rally = self.longest_rally.max(self.rally);
        }
        if events.scored.is_some() {
            self.rally = 0;
        }

        events
    }

    /// Restart button: zero scores, recenter paddles, serve toward the opponent
    pub fn restart(&mut self) {
        self.state.restart();
        self.rally = 0;
    }

    /// Score text for one side's HUD element
    pub fn score_text(&self, side: Side) -> String {
        self.state.score.get(side).to_string()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            seed: self.state.seed,
            frames: self.frames,
            score: self.state.score,
            paddle_hits: self.paddle_hits,
            longest_rally: self.longest_rally,
            final_ball_speed: self.state.ball.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NullSurface;
    use crate::sim::MatchPhase;
    use glam::Vec2;

    #[test]
    fn test_frame_advances_one_tick() {
        let mut game = Game::new(Config::default(), 3);
        let before = game.state.ball.pos;
        let vel = game.state.ball.vel;
        game.frame(1000.0, &mut NullSurface);
        assert_eq!(game.frames(), 1);
        assert_eq!(game.state.ball.pos, before + vel);
    }

    #[test]
    fn test_serve_countdown_uses_host_timestamps() {
        let mut game = Game::new(Config::default(), 3);
        game.state.begin_serve_delay(Side::Player);

        game.frame(0.0, &mut NullSurface); // first frame: nominal refresh
        game.frame(500.0, &mut NullSurface);
        assert!(matches!(game.state.phase, MatchPhase::Serving { .. }));

        let events = game.frame(700.0, &mut NullSurface);
        assert_eq!(events.served, Some(Side::Player));
        assert_eq!(game.state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut game = Game::new(Config::default(), 3);
        game.state.begin_serve_delay(Side::Player);
        game.frame(1000.0, &mut NullSurface);
        game.frame(900.0, &mut NullSurface);
        match game.state.phase {
            MatchPhase::Serving { remaining_ms, .. } => {
                assert!((remaining_ms - (700.0 - FRAME_MS)).abs() < 1e-3)
            }
            MatchPhase::Playing => panic!("serve should still be pending"),
        }
    }

    #[test]
    fn test_rally_stats() {
        let mut game = Game::new(Config::default(), 3);
        let opponent = game.state.opponent;
        game.state.ball.pos = Vec2::new(787.0, opponent.center_y());
        game.state.ball.vel = Vec2::new(5.0, 0.0);
        game.state.ball.speed = 5.0;

        game.update(FRAME_MS);
        let summary = game.summary();
        assert_eq!(summary.paddle_hits, 1);
        assert_eq!(summary.longest_rally, 1);
    }

    #[test]
    fn test_double_return_counts_both_hits() {
        let config = Config {
            field_width: 30.0,
            paddle_inset: 0.0,
            ..Config::default()
        };
        let mut game = Game::new(config, 3);
        game.state.ball.pos = Vec2::new(11.0, 250.0);
        game.state.ball.vel = Vec2::new(-1.0, 0.0);
        game.state.ball.speed = 5.0;

        let events = game.update(FRAME_MS);
        assert_eq!(events.paddle_hits, 2);
        let summary = game.summary();
        assert_eq!(summary.paddle_hits, 2);
        assert_eq!(summary.longest_rally, 2);
    }

    #[test]
    fn test_restart_mid_serve() {
        let mut game = Game::new(Config::default(), 3);
        game.state.score.opponent = 4;
        game.state.begin_serve_delay(Side::Player);

        game.restart();
        assert_eq!(game.state.phase, MatchPhase::Playing);
        assert_eq!(game.score_text(Side::Opponent), "0");

        // No stale serve fires later
        for _ in 0..60 {
            let events = game.update(FRAME_MS);
            assert_eq!(events.served, None);
        }
    }

    #[test]
    fn test_summary_serializes() {
        let game = Game::new(Config::default(), 11);
        let json = serde_json::to_string(&game.summary()).unwrap();
        assert!(json.contains("\"seed\":11"));
        assert!(json.contains("\"longest_rally\":0"));
    }
}
