use anyhow::Result;

use crate::game::Point;

/// What occupies a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    SnakeHead,
    SnakeBody,
    Food,
}

impl Glyph {
    pub fn symbol(&self) -> char {
        match self {
            Glyph::SnakeHead => 'O',
            Glyph::SnakeBody => 'o',
            Glyph::Food => 'X',
        }
    }
}

/// Drawing surface the game loop renders onto. Drawing calls only stage
/// content; nothing is shown until [`Display::refresh`].
pub trait Display {
    /// Size the surface to the board, border included.
    fn resize(&mut self, height: u16, width: u16) -> Result<()>;

    fn clear(&mut self);

    /// Outline the outermost rows and columns.
    fn draw_border(&mut self);

    fn draw_cell(&mut self, at: Point, glyph: Glyph);

    fn draw_text(&mut self, y: i32, x: i32, text: &str);

    fn refresh(&mut self) -> Result<()>;
}
