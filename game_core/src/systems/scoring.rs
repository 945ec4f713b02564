use crate::{Ball, Config, Events, Score, Side};
use glam::Vec2;
use hecs::World;

/// Check if the ball crossed the goal line on `goal` side (scoring)
///
/// Crossing the left line scores for the right player and serves toward the
/// right; crossing the right line scores for the left player and serves toward
/// the left.
pub fn check_scoring(
    world: &mut World,
    goal: Side,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let serve_vx = match goal {
            Side::Left if ball.pos.x <= 0.0 => {
                // Right player scores
                score.increment_right();
                events.right_scored = true;
                config.ball_serve_speed
            }
            Side::Right if ball.pos.x >= config.arena_width - ball.size => {
                // Left player scores
                score.increment_left();
                events.left_scored = true;
                -config.ball_serve_speed
            }
            _ => continue,
        };

        ball.serve(config.serve_position(ball.size), Vec2::new(serve_vx, 0.0));
    }
}
