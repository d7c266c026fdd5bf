use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::display::{Display, Glyph};
use crate::game::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    style: Style,
}

impl Cell {
    const BLANK: Cell = Cell {
        symbol: ' ',
        style: Style::new(),
    };
}

/// Character grid staged between refreshes.
#[derive(Debug, Clone)]
pub struct Canvas {
    height: u16,
    width: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::BLANK; usize::from(height) * usize::from(width)],
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn resize(&mut self, height: u16, width: u16) {
        *self = Self::new(height, width);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cells outside the grid are dropped.
    pub fn put(&mut self, y: i32, x: i32, symbol: char, style: Style) {
        if let Some(index) = self.index(y, x) {
            self.cells[index] = Cell { symbol, style };
        }
    }

    pub fn symbol_at(&self, y: i32, x: i32) -> Option<char> {
        self.index(y, x).map(|index| self.cells[index].symbol)
    }

    /// One line per row, with runs of equally styled cells merged into a span.
    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.width == 0 {
            return Vec::new();
        }

        self.cells
            .chunks(usize::from(self.width))
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = Style::new();

                for cell in row {
                    if cell.style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = cell.style;
                    run.push(cell.symbol);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }

                Line::from(spans)
            })
            .collect()
    }

    fn index(&self, y: i32, x: i32) -> Option<usize> {
        let y = u16::try_from(y).ok().filter(|y| *y < self.height)?;
        let x = u16::try_from(x).ok().filter(|x| *x < self.width)?;
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

fn glyph_style(glyph: Glyph) -> Style {
    match glyph {
        Glyph::SnakeHead => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Glyph::SnakeBody => Style::default().fg(Color::Green),
        Glyph::Food => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// [`Display`] backed by a ratatui terminal. The board is drawn in the
/// top-left corner of the terminal.
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            canvas: Canvas::new(0, 0),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl<B: Backend> Display for TerminalDisplay<B> {
    fn resize(&mut self, height: u16, width: u16) -> Result<()> {
        self.canvas.resize(height, width);
        self.terminal.clear().context("Failed to clear terminal")?;
        Ok(())
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_border(&mut self) {
        let (height, width) = (
            i32::from(self.canvas.height()),
            i32::from(self.canvas.width()),
        );
        if height == 0 || width == 0 {
            return;
        }

        let style = Style::default().fg(Color::White);
        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            self.canvas.put(0, x, ch, style);
            self.canvas.put(height - 1, x, ch, style);
        }
        for y in 1..height - 1 {
            self.canvas.put(y, 0, '|', style);
            self.canvas.put(y, width - 1, '|', style);
        }
    }

    fn draw_cell(&mut self, at: Point, glyph: Glyph) {
        self.canvas.put(at.y, at.x, glyph.symbol(), glyph_style(glyph));
    }

    fn draw_text(&mut self, y: i32, x: i32, text: &str) {
        let style = Style::default().fg(Color::Yellow);
        for (i, ch) in text.chars().enumerate() {
            self.canvas.put(y, x + i as i32, ch, style);
        }
    }

    fn refresh(&mut self) -> Result<()> {
        let (height, width) = (self.canvas.height(), self.canvas.width());
        let lines = self.canvas.lines();

        self.terminal
            .draw(|frame| {
                let area = frame.area();

                if area.height < height || area.width < width {
                    let notice = Paragraph::new(vec![
                        Line::from(Span::styled(
                            "Terminal too small",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(format!(
                            "need {width}x{height}, have {}x{}",
                            area.width, area.height
                        )),
                    ])
                    .alignment(Alignment::Center);
                    frame.render_widget(notice, area);
                } else {
                    let board = Rect::new(area.x, area.y, width, height);
                    frame.render_widget(Paragraph::new(lines), board);
                }
            })
            .context("Failed to draw frame")?;

        Ok(())
    }
}
