use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;

use super::handler::InputHandler;
use crate::game::Command;

/// Where the game loop gets player commands from.
pub trait InputSource {
    /// At most one command per call. Never blocks.
    fn poll_command(&mut self) -> Result<Option<Command>>;

    /// Resolves on the next key press.
    fn wait_for_key(&mut self) -> impl Future<Output = Result<()>>;
}

/// Commands typed but not yet applied, handed out one per tick in the order
/// they were typed. A queued quit jumps the line and drops the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.pending.extend(commands);
    }

    pub fn next_command(&mut self) -> Option<Command> {
        if self.pending.contains(&Command::Quit) {
            self.pending.clear();
            return Some(Command::Quit);
        }
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Keyboard input read through crossterm.
pub struct CrosstermInput {
    handler: InputHandler,
    queue: CommandQueue,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
            queue: CommandQueue::new(),
        }
    }

    fn pending_presses(&self) -> Result<Vec<KeyEvent>> {
        let mut presses = Vec::new();

        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                // Only process key press events, not release
                if key.kind == KeyEventKind::Press {
                    presses.push(key);
                }
            }
        }

        Ok(presses)
    }
}

impl Default for CrosstermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for CrosstermInput {
    fn poll_command(&mut self) -> Result<Option<Command>> {
        let presses = self.pending_presses()?;
        let handler = &self.handler;
        self.queue
            .extend(presses.into_iter().filter_map(|key| handler.handle_key_event(key)));
        Ok(self.queue.next_command())
    }

    async fn wait_for_key(&mut self) -> Result<()> {
        // keys mashed during the last tick should not dismiss the message
        self.pending_presses()?;
        self.queue.clear();

        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            if let Event::Key(key) = event.context("Failed to read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }

        Ok(())
    }
}
