/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }
}

/// Events that occurred during the last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn any_score(&self) -> bool {
        self.left_scored || self.right_scored
    }
}
