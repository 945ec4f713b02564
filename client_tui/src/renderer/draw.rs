//! Per-cell sampling of the playfield

use game_core::{Aabb, Game, Side};
use glam::Vec2;

use crate::config::Glyphs;

/// The shapes a frame is drawn from, captured once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scene {
    pub paddles: [Option<Aabb>; 2],
    pub ball: Option<Aabb>,
}

impl Scene {
    pub fn capture(game: &Game) -> Self {
        Self {
            paddles: [
                game.paddle(Side::Left).map(|p| p.bounds()),
                game.paddle(Side::Right).map(|p| p.bounds()),
            ],
            ball: game.ball().map(|b| b.bounds()),
        }
    }
}

/// Sampling point of a cell, in world units
pub fn cell_center(cx: usize, cy: usize, cell: Vec2) -> Vec2 {
    Vec2::new(
        cx as f32 * cell.x + cell.x * 0.5,
        cy as f32 * cell.y + cell.y * 0.5,
    )
}

/// Full world-space extent of a cell
pub fn cell_bounds(cx: usize, cy: usize, cell: Vec2) -> Aabb {
    Aabb::from_pos_size(Vec2::new(cx as f32 * cell.x, cy as f32 * cell.y), cell)
}

/// Pick the glyph for cell (`cx`, `cy`)
///
/// Paddles are sampled at the cell center. The ball is tested against the
/// whole cell so a ball smaller than a cell never falls between samples, and
/// it is checked last so it covers the net and paddles.
pub fn cell_glyph(
    scene: &Scene,
    glyphs: &Glyphs,
    cell: Vec2,
    net_column: usize,
    cx: usize,
    cy: usize,
) -> u8 {
    let mut glyph = glyphs.background;

    if cx == net_column {
        glyph = glyphs.net;
    }

    let center = cell_center(cx, cy, cell);
    if scene.paddles.iter().flatten().any(|p| p.contains(center)) {
        glyph = glyphs.paddle;
    }

    if let Some(ball) = scene.ball {
        if cell_bounds(cx, cy, cell).overlaps(&ball) {
            glyph = glyphs.ball;
        }
    }

    glyph
}
