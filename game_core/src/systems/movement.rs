use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents, then consume the intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        // Up and down are applied one after the other, not resolved to a single direction
        if intent.up {
            paddle.pos.y -= paddle.speed * time.dt;
        }
        if intent.down {
            paddle.pos.y += paddle.speed * time.dt;
        }

        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
        intent.clear();
    }
}

/// Move ball based on velocity (one explicit Euler step)
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
