use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        let floor = config.arena_height - ball.size;
        if ball.pos.y >= floor {
            ball.pos.y = floor;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball collision against the paddle on `side`
///
/// Only a ball travelling toward the paddle can hit it, so a ball that was
/// just reflected cannot bounce twice. On a hit the ball is placed flush
/// against the paddle face and its vertical speed becomes proportional to the
/// distance between ball center and paddle center.
pub fn collide_paddle(world: &mut World, side: Side, config: &Config, events: &mut Events) {
    // Collect paddle data without holding the borrow
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p);

    let Some(paddle) = paddle else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let approaching = match side {
            Side::Left => ball.vel.x < 0.0,
            Side::Right => ball.vel.x > 0.0,
        };
        if !approaching || !ball.bounds().touches(&paddle.bounds()) {
            continue;
        }

        ball.vel.x = -ball.vel.x;
        ball.pos.x = match side {
            Side::Left => paddle.pos.x + paddle.size.x,
            Side::Right => paddle.pos.x - ball.size,
        };
        ball.vel.y = config.deflection_gain * (ball.center_y() - paddle.center_y());

        events.ball_hit_paddle = true;
    }
}
