//! Client-side tuning: grid scale, glyphs and loop pacing

use std::time::Duration;

/// Minimum seconds between two rendered frames.
///
/// Often described as "10 FPS", but 0.01 s is ~100 Hz. With the frame
/// sleep below the loop ticks at ~60 Hz, so in practice every
/// tick renders.
pub const RENDER_INTERVAL: f32 = 0.01;
/// Pause at the end of every loop iteration
pub const FRAME_SLEEP_MS: u64 = 16;
/// World units per character cell. Cells are taller than wide, so the
/// vertical scale is larger to keep the court roughly square on screen.
pub const CELL_WIDTH: u32 = 4;
pub const CELL_HEIGHT: u32 = 8;

/// Characters used for each kind of cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub background: u8,
    pub net: u8,
    pub paddle: u8,
    pub ball: u8,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            background: b'.',
            net: b':',
            paddle: b'|',
            ball: b'O',
        }
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub cell_width: u32,
    pub cell_height: u32,
    pub glyphs: Glyphs,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            glyphs: Glyphs::default(),
        }
    }
}

/// Game loop pacing
#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    pub render_interval: f32,
    pub frame_sleep: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            render_interval: RENDER_INTERVAL,
            frame_sleep: Duration::from_millis(FRAME_SLEEP_MS),
        }
    }
}
