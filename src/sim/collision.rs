//! Collision detection and response
//!
//! All checks are made on the ball's position after it has moved for the
//! tick. There is no swept test, so a fast ball can skip past a paddle in a
//! single step.

use super::state::{Ball, Paddle, Side};
use crate::config::Config;
use crate::{bounce_angle, launch_velocity};

/// Bounce off the top or bottom wall
///
/// Pushes the ball back inside and flips `vel.y`. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball, field_height: f32) -> bool {
    if ball.top() <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.bottom() >= field_height {
        ball.pos.y = field_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Ball overlaps the left paddle's face (or is anywhere behind it) within its span
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() <= paddle.right() && paddle.spans(ball.pos.y)
}

/// Ball overlaps the right paddle's face (or is anywhere behind it) within its span
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() >= paddle.x && paddle.spans(ball.pos.y)
}

/// Check and resolve a hit on the paddle belonging to `side`
///
/// On contact the ball is moved flush against the paddle face so the same
/// contact cannot fire again next tick, then [`reflect`] is applied.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    config: &Config,
    kick: Option<f32>,
) -> bool {
    let hit = match side {
        Side::Player => hits_left_paddle(ball, paddle),
        Side::Opponent => hits_right_paddle(ball, paddle),
    };
    if !hit {
        return false;
    }

    ball.pos.x = match side {
        Side::Player => paddle.right() + ball.radius,
        Side::Opponent => paddle.x - ball.radius,
    };
    reflect(ball, paddle, side, config, kick);
    true
}

/// Recompute the ball's velocity after it touches `paddle`
///
/// The ball speeds up by `ball_speedup` (capped only if `ball_max_speed` is
/// set) and leaves at an angle proportional to how far from the paddle
/// center it hit, up to `max_bounce_deg`. `kick` is an extra vertical nudge
/// (signed) added after the bounce; the cached speed does not include it.
pub fn reflect(ball: &mut Ball, paddle: &Paddle, side: Side, config: &Config, kick: Option<f32>) {
    ball.speed *= config.ball_speedup;
    if let Some(max) = config.ball_max_speed {
        ball.speed = ball.speed.min(max);
    }

    let relative = (ball.pos.y - paddle.center_y()) / paddle.half_height();
    let angle = bounce_angle(relative, config.max_bounce());

    // Leave heading toward the other side
    ball.vel = launch_velocity(ball.speed, angle, side.opposite().direction());

    if let Some(kick) = kick {
        ball.vel.y += kick;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, Paddle, Paddle) {
        let config = Config::new();
        let player = Paddle::new(config.player_x(), config.player_speed, &config);
        let opponent = Paddle::new(config.opponent_x(), config.opponent_speed, &config);
        (config, player, opponent)
    }

    fn ball_at(config: &Config, pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: config.ball_radius,
            speed: vel.length(),
        }
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (config, _, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(400.0, 5.0), Vec2::new(4.0, -3.0));

        assert!(bounce_off_walls(&mut ball, config.field_height));
        assert_eq!(ball.pos.y, config.ball_radius, "Ball should be pushed out of wall");
        assert_eq!(ball.vel, Vec2::new(4.0, 3.0), "Only vy flips");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (config, _, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(400.0, 497.0), Vec2::new(4.0, 3.0));

        assert!(bounce_off_walls(&mut ball, config.field_height));
        assert_eq!(ball.pos.y, config.field_height - config.ball_radius);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_no_wall_bounce_mid_field() {
        let (config, _, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(400.0, 250.0), Vec2::new(4.0, 3.0));
        assert!(!bounce_off_walls(&mut ball, config.field_height));
        assert_eq!(ball.vel, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(30.0, player.center_y()), Vec2::new(-5.0, 0.0));

        assert!(resolve_paddle_hit(&mut ball, &player, Side::Player, &config, None));
        assert!(ball.vel.x > 0.0, "Ball should bounce right after hitting left paddle");
        assert_eq!(ball.pos.x, player.right() + ball.radius);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (config, _, opponent) = setup();
        let mut ball = ball_at(&config, Vec2::new(770.0, opponent.center_y()), Vec2::new(5.0, 0.0));

        assert!(resolve_paddle_hit(&mut ball, &opponent, Side::Opponent, &config, None));
        assert!(ball.vel.x < 0.0, "Ball should bounce left after hitting right paddle");
        assert_eq!(ball.pos.x, opponent.x - ball.radius);
    }

    #[test]
    fn test_miss_outside_paddle_span() {
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(20.0, player.y - 1.0), Vec2::new(-5.0, 0.0));
        assert!(!resolve_paddle_hit(&mut ball, &player, Side::Player, &config, None));
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_contact_is_position_only() {
        // A ball already moving away but still overlapping is reflected again;
        // the hit test has no direction check.
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(30.0, player.center_y()), Vec2::new(5.0, 0.0));
        assert!(resolve_paddle_hit(&mut ball, &player, Side::Player, &config, None));
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_center_hit_goes_straight_back() {
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(30.0, player.center_y()), Vec2::new(-5.0, 0.0));
        ball.vel.y = 2.0;
        reflect(&mut ball, &player, Side::Player, &config, None);

        assert_eq!(ball.vel.y, 0.0);
        assert!((ball.vel.x - 5.0 * 1.03).abs() < 1e-5);
    }

    #[test]
    fn test_speed_increases_on_hit() {
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(30.0, player.y + 20.0), Vec2::new(-5.0, 0.0));
        reflect(&mut ball, &player, Side::Player, &config, None);

        assert!((ball.speed - 5.0 * config.ball_speedup).abs() < 1e-5);
        assert!((ball.vel.length() - ball.speed).abs() < 1e-4);
    }

    #[test]
    fn test_optional_speed_cap() {
        let (mut config, player, _) = setup();
        config.ball_max_speed = Some(10.0);
        let mut ball = ball_at(&config, Vec2::new(30.0, player.center_y()), Vec2::new(-9.9, 0.0));
        reflect(&mut ball, &player, Side::Player, &config, None);
        assert_eq!(ball.speed, 10.0);
    }

    #[test]
    fn test_trajectory_affected_by_hit_position() {
        let (config, player, _) = setup();

        let mut top = ball_at(&config, Vec2::new(30.0, player.y + 1.0), Vec2::new(-5.0, 0.0));
        reflect(&mut top, &player, Side::Player, &config, None);
        assert!(top.vel.y < 0.0, "Top hit deflects upward");

        let mut bottom = ball_at(&config, Vec2::new(30.0, player.bottom() - 1.0), Vec2::new(-5.0, 0.0));
        reflect(&mut bottom, &player, Side::Player, &config, None);
        assert!(bottom.vel.y > 0.0, "Bottom hit deflects downward");
    }

    #[test]
    fn test_edge_hit_uses_max_bounce() {
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(30.0, player.bottom()), Vec2::new(-5.0, 0.0));
        reflect(&mut ball, &player, Side::Player, &config, None);

        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle - config.max_bounce()).abs() < 1e-4);
    }

    #[test]
    fn test_kick_added_after_bounce() {
        let (config, player, _) = setup();
        let mut ball = ball_at(&config, Vec2::new(30.0, player.center_y()), Vec2::new(-5.0, 0.0));
        reflect(&mut ball, &player, Side::Player, &config, Some(-config.key_kick));

        assert!((ball.vel.y + 0.6).abs() < 1e-6);
        assert!((ball.speed - 5.15).abs() < 1e-5, "Kick does not change cached speed");
    }
}
