//! Fixed-tick game loop.
//!
//! Each tick renders, polls input once, steps the engine and then sleeps out
//! the remainder of `1 / speed` seconds measured from the start of the tick.

use anyhow::{Context, Result};
use tokio::time::{Instant, sleep_until};

use crate::game::{GameEngine, GameState, Phase};
use crate::input::InputSource;
use crate::render::{Display, Glyph};

/// Column the end-of-game lines start at.
const MESSAGE_OFFSET: i32 = 3;

pub struct GameLoop<D: Display, I: InputSource> {
    engine: GameEngine,
    state: GameState,
    display: D,
    input: I,
}

impl<D: Display, I: InputSource> GameLoop<D, I> {
    pub fn new(mut engine: GameEngine, display: D, input: I) -> Result<Self> {
        let state = engine.reset().context("Failed to set up the board")?;
        Ok(Self::with_state(engine, state, display, input))
    }

    /// Start from an existing state instead of a fresh board.
    pub fn with_state(engine: GameEngine, state: GameState, display: D, input: I) -> Self {
        Self {
            engine,
            state,
            display,
            input,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Play until a terminal phase, show the end-of-game message and wait
    /// for one key press.
    pub async fn run(&mut self) -> Result<Phase> {
        let config = self.engine.config();
        let (height, width) = (config.window_height, config.window_width);
        self.display
            .resize(height, width)
            .context("Failed to size the board")?;

        loop {
            let tick_start = Instant::now();

            self.render()?;

            let command = self.input.poll_command()?;
            let result = self.engine.step(&mut self.state, command);

            if result.terminated {
                self.finish(result.phase).await?;
                return Ok(result.phase);
            }

            sleep_until(tick_start + self.state.tick_interval()).await;
        }
    }

    fn render(&mut self) -> Result<()> {
        let state = &self.state;

        self.display.clear();
        self.display.draw_border();
        self.display.draw_text(
            0,
            state.board_width / 2 - 5,
            &format!("Score: {}", state.score),
        );

        self.display.draw_cell(state.snake.head(), Glyph::SnakeHead);
        for segment in state.snake.segments().skip(1) {
            self.display.draw_cell(segment, Glyph::SnakeBody);
        }
        self.display.draw_cell(state.food.position, Glyph::Food);

        self.display.refresh().context("Failed to refresh the board")
    }

    async fn finish(&mut self, phase: Phase) -> Result<()> {
        let headline = phase.headline().unwrap_or_default();
        let score = format!("Score: {}", self.state.score);
        let lines = [headline, score.as_str(), "", "Press any key to quit the game."];

        self.display.clear();
        self.display.draw_border();
        let top = self.state.board_height / 2;
        for (i, line) in lines.iter().enumerate() {
            self.display.draw_text(top + i as i32, MESSAGE_OFFSET, line);
        }
        self.display
            .refresh()
            .context("Failed to show the end-of-game message")?;

        self.input.wait_for_key().await
    }
}
