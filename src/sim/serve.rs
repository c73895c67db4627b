//! Serving and restarting

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, GameState, MatchPhase, Side};
use crate::config::Config;
use crate::launch_velocity;

/// Put the ball at `center` at base speed, heading toward `toward`
///
/// The launch angle is drawn uniformly from `[-spread, +spread)` around
/// horizontal; its sign sets the vertical direction.
pub fn serve_ball<R: Rng>(
    ball: &mut Ball,
    center: Vec2,
    config: &Config,
    toward: Side,
    rng: &mut R,
) {
    let spread = config.serve_spread();
    let angle: f32 = rng.random_range(-spread..spread);

    ball.pos = center;
    ball.speed = config.ball_base_speed;
    ball.vel = launch_velocity(ball.speed, angle, toward.direction());
}

impl GameState {
    /// Re-serve the ball immediately and resume play
    pub fn serve(&mut self, toward: Side) {
        let center = self.field_center();
        serve_ball(&mut self.ball, center, &self.config, toward, &mut self.rng);
        self.phase = MatchPhase::Playing;
        log::info!(
            "Serve toward {} at angle {:.1} deg",
            toward.as_str(),
            self.ball.vel.y.atan2(self.ball.vel.x.abs()).to_degrees()
        );
    }

    /// Coin flip for a serve direction
    pub fn random_side(&mut self) -> Side {
        if self.rng.random_bool(0.5) {
            Side::Opponent
        } else {
            Side::Player
        }
    }

    /// Start the serve countdown after a point
    pub fn begin_serve_delay(&mut self, toward: Side) {
        self.phase = MatchPhase::Serving {
            remaining_ms: self.config.serve_delay_ms,
            toward,
        };
    }

    /// Restart button: fresh match, first serve toward the opponent
    pub fn restart(&mut self) {
        self.restart_toward(Some(Side::Opponent));
    }

    /// Zero the score, recenter both paddles and serve at once
    ///
    /// `None` picks the serve direction at random. Any pending serve
    /// countdown is discarded.
    pub fn restart_toward(&mut self, toward: Option<Side>) {
        self.score.reset();
        let field_height = self.config.field_height;
        self.player.recenter(field_height);
        self.opponent.recenter(field_height);

        let toward = match toward {
            Some(side) => side,
            None => self.random_side(),
        };
        log::info!("Match restarted");
        self.serve(toward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_serve_ball_within_spread() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut ball = Ball::new(config.ball_radius);
        let center = Vec2::new(400.0, 250.0);

        for _ in 0..200 {
            serve_ball(&mut ball, center, &config, Side::Opponent, &mut rng);
            assert_eq!(ball.pos, center);
            assert_eq!(ball.speed, config.ball_base_speed);
            assert!(ball.vel.x > 0.0);
            let angle = ball.vel.y.atan2(ball.vel.x);
            assert!(angle.abs() <= config.serve_spread() + 1e-5);
            assert!((ball.vel.length() - ball.speed).abs() < 1e-4);
        }
    }

    #[test]
    fn test_serve_toward_player_goes_left() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(config.ball_radius);
        serve_ball(&mut ball, Vec2::ZERO, &config, Side::Player, &mut rng);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(Config::default(), 42);
        state.score.player = 3;
        state.score.opponent = 5;
        state.player.y = 0.0;
        state.opponent.y = 400.0;
        state.ball.speed = 17.0;
        state.begin_serve_delay(Side::Player);

        state.restart();

        assert_eq!(state.score.player, 0);
        assert_eq!(state.score.opponent, 0);
        assert_eq!(state.player.y, state.config.paddle_center_y());
        assert_eq!(state.opponent.y, state.config.paddle_center_y());
        assert_eq!(state.ball.pos, state.field_center());
        assert_eq!(state.ball.speed, state.config.ball_base_speed);
        assert!(state.ball.vel.x > 0.0, "restart serves toward the opponent");
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_restart_random_direction_is_seeded() {
        let mut a = GameState::new(Config::default(), 5);
        let mut b = GameState::new(Config::default(), 5);
        a.restart_toward(None);
        b.restart_toward(None);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_begin_serve_delay_uses_config() {
        let mut state = GameState::new(Config::default(), 42);
        state.begin_serve_delay(Side::Opponent);
        assert_eq!(
            state.phase,
            MatchPhase::Serving {
                remaining_ms: 700.0,
                toward: Side::Opponent
            }
        );
    }
}
