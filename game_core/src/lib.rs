pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use systems::{Direction, InputOutcome, KeyCommand, KeySource, KEY_ESC, KEY_INTERRUPT};

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one step of the Pong simulation
///
/// `time.dt` is used as-is: there is no clamping and no sub-stepping, so a
/// very large step can carry the ball through several checks at once. The
/// checks always run in the same order.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world, time);

    // 2. Top/bottom walls
    bounce_walls(world, config, events);

    // 3. Ball crossed the left goal line
    check_scoring(world, Side::Left, config, score, events);

    // 4. Paddles, left then right
    collide_paddle(world, Side::Left, config, events);
    collide_paddle(world, Side::Right, config, events);

    // 5. Ball crossed the right goal line
    check_scoring(world, Side::Right, config, score, events);

    time.now += time.dt;
}

/// Helper to create a paddle entity, vertically centered on its side
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.paddle_spawn_y());
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((
        Paddle::new(side, pos, size, config.paddle_speed),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}

/// One running session: playfield configuration, score, ball and paddles
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
}

impl Game {
    /// Set up a fresh session: both paddles centered, ball served from the
    /// middle with the opening velocity
    pub fn init(config: Config) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(
            &mut world,
            config.serve_position(config.ball_size),
            config.ball_opening_velocity,
            config.ball_size,
        );

        Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
        }
    }

    /// Advance physics by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
    }

    /// Drain pending keys, then move the paddles for a frame of `dt` seconds
    ///
    /// Returns [`InputOutcome::Quit`] as soon as a quit key is read; paddles do
    /// not move on that frame.
    pub fn apply_input<K: KeySource + ?Sized>(&mut self, dt: f32, keys: &mut K) -> InputOutcome {
        let outcome = ingest_keys(&mut self.world, keys);
        if outcome == InputOutcome::Quit {
            return outcome;
        }

        let frame = Time::new(dt, self.time.now);
        move_paddles(&mut self.world, &frame, &self.config);
        outcome
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Snapshot of the ball
    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Snapshot of the paddle on `side`
    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Place the ball and set its velocity
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move the paddle on `side` to `y`, clamped to the playfield
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.pos.y = y;
            }
        }
    }
}
