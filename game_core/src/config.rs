use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub ball_size: f32,
    pub ball_serve_speed: f32,
    pub ball_opening_velocity: Vec2,
    pub deflection_gain: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            ball_size: Params::BALL_SIZE,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_opening_velocity: Vec2::new(Params::BALL_OPENING_VX, Params::BALL_OPENING_VY),
            deflection_gain: Params::DEFLECTION_GAIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    /// Y position (top edge) that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle top edge to `[0, H - h]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let max = self.arena_height - self.paddle_height;
        if y < 0.0 {
            0.0
        } else if y > max {
            max
        } else {
            y
        }
    }

    /// Top-left corner that centers a ball of `size` in the playfield
    pub fn serve_position(&self, size: f32) -> Vec2 {
        Vec2::new(
            (self.arena_width - size) / 2.0,
            (self.arena_height - size) / 2.0,
        )
    }
}
