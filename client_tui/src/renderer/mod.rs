pub mod draw;

use std::io::Write;

use game_core::{Config, Game};
use glam::Vec2;
use log::warn;

use crate::config::RenderConfig;
use draw::Scene;

/// Moves the cursor to the top-left corner so each frame overwrites the last
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Raw mode turns off output newline translation, so lines end in CR LF
pub const LINE_BREAK: &[u8] = b"\r\n";
/// Room for the cursor sequence and the score line
const HEADER_CAPACITY: usize = 64 + 128;

/// ASCII rasterizer with a reusable frame buffer
pub struct Renderer {
    config: RenderConfig,
    cell: Vec2,
    columns: usize,
    rows: usize,
    frame: Vec<u8>,
}

impl Renderer {
    pub fn new(config: RenderConfig, game_config: &Config) -> Self {
        let cell_width = config.cell_width.max(1);
        let cell_height = config.cell_height.max(1);
        let columns = (game_config.arena_width.max(0.0) as u32 / cell_width) as usize;
        let rows = (game_config.arena_height.max(0.0) as u32 / cell_height) as usize;

        Self {
            config,
            cell: Vec2::new(cell_width as f32, cell_height as f32),
            columns,
            rows,
            frame: Vec::new(),
        }
    }

    /// Grid size in character cells (columns, rows)
    pub fn grid_size(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Bytes currently reserved for the frame buffer
    pub fn capacity(&self) -> usize {
        self.frame.capacity()
    }

    fn required_capacity(&self) -> usize {
        HEADER_CAPACITY + self.rows * (self.columns + LINE_BREAK.len())
    }

    /// Draw the current game state into the frame buffer
    ///
    /// Returns `None` when the buffer cannot grow to the required size; the
    /// caller just skips that frame.
    pub fn rasterize(&mut self, game: &Game) -> Option<&[u8]> {
        let needed = self.required_capacity();
        self.frame.clear();
        // No-op once the buffer is large enough
        if let Err(err) = self.frame.try_reserve(needed) {
            warn!("Skipping frame, cannot reserve {} bytes: {}", needed, err);
            return None;
        }

        let score = game.score();
        self.frame.extend_from_slice(CURSOR_HOME);
        if let Err(err) = write!(self.frame, "L={}  R={}", score.left, score.right) {
            warn!("Skipping frame, cannot format score line: {}", err);
            return None;
        }
        self.frame.extend_from_slice(LINE_BREAK);
        self.frame.extend_from_slice(LINE_BREAK);

        let scene = Scene::capture(game);
        let net_column = self.columns / 2;
        for cy in 0..self.rows {
            for cx in 0..self.columns {
                let glyphs = &self.config.glyphs;
                let glyph = draw::cell_glyph(&scene, glyphs, self.cell, net_column, cx, cy);
                self.frame.push(glyph);
            }
            self.frame.extend_from_slice(LINE_BREAK);
        }

        Some(self.frame.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    fn rows_of(frame: &[u8]) -> Vec<String> {
        let text = std::str::from_utf8(frame).unwrap();
        let text = text.strip_prefix("\x1b[H").unwrap();
        text.split("\r\n").map(str::to_owned).collect()
    }

    fn setup() -> (Game, Renderer) {
        let config = Config::new();
        let renderer = Renderer::new(RenderConfig::default(), &config);
        (Game::init(config), renderer)
    }

    #[test]
    fn test_grid_size() {
        let (_game, renderer) = setup();
        assert_eq!(renderer.grid_size(), (40, 16));
    }

    #[test]
    fn test_frame_layout() {
        let (game, mut renderer) = setup();
        let rows = rows_of(renderer.rasterize(&game).unwrap());

        assert_eq!(rows[0], "L=0  R=0");
        assert_eq!(rows[1], "");
        // 16 grid rows and the empty tail after the final line break
        assert_eq!(rows.len(), 2 + 16 + 1);
        assert_eq!(rows[18], "");
        assert!(rows[2..18].iter().all(|r| r.len() == 40));
    }

    #[test]
    fn test_initial_scene_glyphs() {
        let (game, mut renderer) = setup();
        let rows = rows_of(renderer.rasterize(&game).unwrap());
        let grid: Vec<&[u8]> = rows[2..18].iter().map(|r| r.as_bytes()).collect();

        // Paddles span y 54..74: rows 7 and 8 sample inside
        assert_eq!(grid[7][1], b'|');
        assert_eq!(grid[8][1], b'|');
        assert_eq!(grid[6][1], b'.');
        assert_eq!(grid[9][1], b'.');
        assert_eq!(grid[7][35], b'|');
        assert_eq!(grid[8][35], b'|');

        // Ball spans 78.5..81.5 x 62.5..65.5
        assert_eq!(grid[7][19], b'O');
        assert_eq!(grid[7][20], b'O');
        assert_eq!(grid[8][19], b'O');
        assert_eq!(grid[8][20], b'O');

        // Net everywhere else in the center column
        assert_eq!(grid[0][20], b':');
        assert_eq!(grid[15][20], b':');
        assert_eq!(grid[0][0], b'.');
    }

    #[test]
    fn test_score_line_updates() {
        let (mut game, mut renderer) = setup();
        game.score.left = 3;
        game.score.right = 12;
        let rows = rows_of(renderer.rasterize(&game).unwrap());
        assert_eq!(rows[0], "L=3  R=12");
    }

    #[test]
    fn test_repeated_rasterize_is_stable() {
        let (mut game, mut renderer) = setup();
        game.set_paddle_y(Side::Left, 10.0);

        let first = renderer.rasterize(&game).unwrap().to_vec();
        let capacity = renderer.capacity();
        assert!(capacity >= first.len());

        for _ in 0..10 {
            let again = renderer.rasterize(&game).unwrap();
            assert_eq!(again, first.as_slice(), "Unchanged state renders identically");
        }
        assert_eq!(renderer.capacity(), capacity, "Buffer is reused, not regrown");
    }

    #[test]
    fn test_custom_glyphs() {
        let config = Config::new();
        let mut render_config = RenderConfig::default();
        render_config.glyphs.background = b' ';
        render_config.glyphs.ball = b'@';
        let mut renderer = Renderer::new(render_config, &config);
        let game = Game::init(config);

        let rows = rows_of(renderer.rasterize(&game).unwrap());
        assert_eq!(rows[2].as_bytes()[0], b' ');
        assert_eq!(rows[9].as_bytes()[19], b'@');
    }
}
