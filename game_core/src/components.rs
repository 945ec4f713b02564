use glam::Vec2;

use crate::map::Aabb;

/// Which half of the court a paddle (or goal line) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a player's paddle, moves only vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Width, height
    pub speed: f32, // Vertical units per second
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Ball component - a square ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Put the ball back in play at `pos` with a fresh velocity
    pub fn serve(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
    }
}

/// Movement intent for a paddle during the current frame
///
/// Flags rather than a direction: both may be set at once, in which case the
/// moves cancel out when applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.up = false;
        self.down = false;
    }
}
