//! Beachball physics
//!
//! Per-tick Euler integration under constant gravity, damped bounces off the
//! screen edges, and a dominant-axis bounce off the player. While grabbed the
//! ball just follows the cursor.

use glam::{IVec2, Vec2};

use super::collision::{Rect, aabb_intersect};
use super::state::Ball;
use crate::consts::*;

const BALL_MAX_X: f32 = (SCREEN_WIDTH - BALL_WIDTH) as f32;
const BALL_MAX_Y: f32 = (SCREEN_HEIGHT - BALL_HEIGHT) as f32;

/// Advance the ball by one tick
///
/// `player` is the player's box after this tick's movement. Player contact is
/// ignored while `platform_loss` is latched.
pub fn update_ball(ball: &mut Ball, player: &Rect, cursor: IVec2, platform_loss: bool) {
    if ball.grabbed {
        let centered = cursor - IVec2::new(BALL_WIDTH / 2, BALL_HEIGHT / 2);
        ball.pos = clamp_to_screen(centered.as_vec2());
        ball.vel = Vec2::ZERO;
        return;
    }

    ball.vel.y += FREE_ROAM_GRAVITY;
    ball.pos += ball.vel;

    bounce_off_walls(ball);

    if !platform_loss {
        bounce_off_player(ball, player);
        ball.pos = clamp_to_screen(ball.pos);
    }
}

fn clamp_to_screen(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x.clamp(0.0, BALL_MAX_X), pos.y.clamp(0.0, BALL_MAX_Y))
}

/// Clamp to the screen edges, inverting and damping velocity on each axis hit
fn bounce_off_walls(ball: &mut Ball) {
    if ball.pos.x < 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x *= -BOUNCE_FACTOR;
    } else if ball.pos.x > BALL_MAX_X {
        ball.pos.x = BALL_MAX_X;
        ball.vel.x *= -BOUNCE_FACTOR;
    }

    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y *= -BOUNCE_FACTOR;
    } else if ball.pos.y > BALL_MAX_Y {
        ball.pos.y = BALL_MAX_Y;
        ball.vel.y *= -BOUNCE_FACTOR;
        // Come to rest instead of micro-bouncing forever
        if ball.vel.y.abs() < FREE_ROAM_GRAVITY {
            ball.vel.y = 0.0;
        }
    }
}

/// Push the ball out of the player along the axis of greater center offset
fn bounce_off_player(ball: &mut Ball, player: &Rect) {
    let ball_box = ball.rect();
    if !aabb_intersect(player, &ball_box) {
        return;
    }

    let delta = ball_box.center() - player.center();

    if delta.x.abs() > delta.y.abs() {
        ball.vel.x = (ball.vel.x * -BOUNCE_FACTOR).copysign(delta.x as f32);
        ball.pos.x = if delta.x > 0 {
            player.right() as f32
        } else {
            (player.x - BALL_WIDTH) as f32
        };
    } else {
        ball.vel.y = (ball.vel.y * -BOUNCE_FACTOR).copysign(delta.y as f32);
        ball.pos.y = if delta.y > 0 {
            player.bottom() as f32
        } else {
            (player.y - BALL_HEIGHT) as f32
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    /// Player box far away from anything the tests touch
    fn far_player() -> Rect {
        Rect::new(0, 0, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            grabbed: false,
        }
    }

    #[test]
    fn test_gravity_then_integrate() {
        let mut ball = ball_at(300.0, 200.0, 3.0, 1.0);
        update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        assert!((ball.vel.y - 1.5).abs() < EPS);
        assert!((ball.pos.x - 303.0).abs() < EPS);
        assert!((ball.pos.y - 201.5).abs() < EPS);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut ball = ball_at(614.0, 200.0, 6.0, 0.0);
        update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        assert_eq!(ball.pos.x, (SCREEN_WIDTH - BALL_WIDTH) as f32);
        assert!((ball.vel.x - (-6.0 * 0.8)).abs() < EPS);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = ball_at(2.0, 200.0, -5.0, 0.0);
        update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        assert_eq!(ball.pos.x, 0.0);
        assert!((ball.vel.x - 4.0).abs() < EPS);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut ball = ball_at(300.0, 3.0, 0.0, -10.0);
        update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        // Gravity first: -9.5, then bounce
        assert_eq!(ball.pos.y, 0.0);
        assert!((ball.vel.y - 7.6).abs() < EPS);
    }

    #[test]
    fn test_floor_bounce_damps() {
        let mut ball = ball_at(300.0, 450.0, 0.0, 9.5);
        update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        // vy = 10.0 after gravity, crosses 455 and bounces
        assert_eq!(ball.pos.y, (SCREEN_HEIGHT - BALL_HEIGHT) as f32);
        assert!((ball.vel.y - (-8.0)).abs() < EPS);
    }

    #[test]
    fn test_floor_bounce_comes_to_rest() {
        // Resting on the floor: gravity pushes it 0.5 below, bounce gives -0.4
        let mut ball = ball_at(300.0, 455.0, 0.0, 0.0);
        update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        assert_eq!(ball.pos.y, 455.0);
        assert_eq!(ball.vel.y, 0.0);

        // And stays there
        for _ in 0..10 {
            update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
        }
        assert_eq!(ball.pos.y, 455.0);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_falling_ball_reaches_floor() {
        let mut ball = ball_at(300.0, 440.0, 0.0, 0.0);
        let mut bounced = false;
        for _ in 0..20 {
            let old_vy = ball.vel.y + FREE_ROAM_GRAVITY;
            update_ball(&mut ball, &far_player(), IVec2::ZERO, false);
            if ball.pos.y == 455.0 && !bounced {
                bounced = true;
                let expected = -old_vy * BOUNCE_FACTOR;
                if expected.abs() < FREE_ROAM_GRAVITY {
                    assert_eq!(ball.vel.y, 0.0);
                } else {
                    assert!((ball.vel.y - expected).abs() < EPS);
                }
            }
        }
        assert!(bounced);
    }

    #[test]
    fn test_player_bounce_horizontal() {
        // Ball just inside the player's right edge, moving left
        let player = Rect::new(200, 200, PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut ball = ball_at(258.0, 220.0, -4.0, -0.5);
        update_ball(&mut ball, &player, IVec2::ZERO, false);
        // Pushed out to the right, moving right
        assert_eq!(ball.pos.x, 264.0);
        assert!((ball.vel.x - 3.2).abs() < EPS);
        // Y untouched by the resolution
        assert!(ball.vel.y.abs() < EPS);
    }

    #[test]
    fn test_player_bounce_vertical_from_above() {
        // Ball landing on the player's head
        let player = Rect::new(200, 200, PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut ball = ball_at(220.0, 176.0, 0.0, 5.0);
        update_ball(&mut ball, &player, IVec2::ZERO, false);
        assert_eq!(ball.pos.y, (200 - BALL_HEIGHT) as f32);
        assert!((ball.vel.y - (-4.4)).abs() < EPS);
    }

    #[test]
    fn test_player_bounce_sign_follows_displacement() {
        // Ball below the player moving down still gets pushed down
        let player = Rect::new(200, 200, PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut ball = ball_at(220.0, 250.0, 0.0, 2.0);
        update_ball(&mut ball, &player, IVec2::ZERO, false);
        assert_eq!(ball.pos.y, 264.0);
        assert!(ball.vel.y > 0.0);
        assert!((ball.vel.y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_player_ignored_after_loss() {
        let player = Rect::new(200, 200, PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut ball = ball_at(220.0, 176.0, 0.0, 5.0);
        update_ball(&mut ball, &player, IVec2::ZERO, true);
        assert!((ball.pos.y - 181.5).abs() < EPS);
        assert!((ball.vel.y - 5.5).abs() < EPS);
    }

    #[test]
    fn test_player_push_stays_on_screen() {
        // Player hugging the left wall shoves the ball leftward past the edge
        let player = Rect::new(0, 200, PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut ball = ball_at(2.0, 220.0, -1.0, -0.5);
        update_ball(&mut ball, &player, IVec2::ZERO, false);
        assert!(ball.pos.x >= 0.0);
    }

    #[test]
    fn test_grabbed_ball_follows_cursor() {
        let mut ball = ball_at(300.0, 50.0, 3.0, 2.0);
        ball.grabbed = true;
        update_ball(&mut ball, &far_player(), IVec2::new(100, 100), false);
        assert_eq!(ball.pos, Vec2::new(88.0, 88.0));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_grabbed_ball_clamped() {
        let mut ball = ball_at(300.0, 50.0, 0.0, 0.0);
        ball.grabbed = true;
        update_ball(&mut ball, &far_player(), IVec2::new(639, 479), false);
        assert_eq!(ball.pos, Vec2::new(616.0, 455.0));
        update_ball(&mut ball, &far_player(), IVec2::new(0, 0), false);
        assert_eq!(ball.pos, Vec2::ZERO);
    }
}
