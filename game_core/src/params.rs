/// Game tuning parameters for terminal Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (world units, origin top-left, y grows downward)
    pub const ARENA_WIDTH: f32 = 160.0;
    pub const ARENA_HEIGHT: f32 = 128.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 4.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 60.0; // units per second
    pub const LEFT_PADDLE_X: f32 = 6.0;
    pub const RIGHT_PADDLE_X: f32 = 140.0;

    // Ball
    pub const BALL_SIZE: f32 = 3.0;
    pub const BALL_SERVE_SPEED: f32 = 120.0;
    pub const BALL_OPENING_VX: f32 = 120.0;
    pub const BALL_OPENING_VY: f32 = 60.0;

    // Vertical speed gained per unit of offset from the paddle center
    pub const DEFLECTION_GAIN: f32 = 2.0;
}
