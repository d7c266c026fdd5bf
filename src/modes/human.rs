use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tracing::info;

use crate::game::{GameConfig, GameEngine, Phase};
use crate::game_loop::GameLoop;
use crate::input::CrosstermInput;
use crate::render::TerminalDisplay;

/// Keyboard-driven session on the real terminal.
pub struct HumanMode {
    config: GameConfig,
    seed: Option<u64>,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        Self { config, seed }
    }

    pub async fn run(&self) -> Result<Phase> {
        // Board problems are reported before the terminal is taken over
        let mut engine = match self.seed {
            Some(seed) => GameEngine::with_seed(self.config.clone(), seed),
            None => GameEngine::new(self.config.clone()),
        };
        let state = engine.reset().context("Failed to set up the board")?;

        let terminal = setup_terminal()?;
        let mut game = GameLoop::with_state(
            engine,
            state,
            TerminalDisplay::new(terminal),
            CrosstermInput::new(),
        );

        let result = game.run().await;

        // Cleanup terminal
        let cleanup = restore_terminal(game.display_mut().terminal_mut());
        let phase = result?;
        cleanup?;

        info!(
            ?phase,
            score = game.state().score,
            length = game.state().snake.len(),
            "session over"
        );
        Ok(phase)
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen")?;
    Ok(())
}
