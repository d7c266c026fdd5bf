//! Term Snake - a turn-paced Snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module): snake body, collisions, food, engine
//! - The fixed-tick game loop (game_loop module)
//! - Display and input collaborators (render, input modules)
//! - The interactive terminal session (modes module)

pub mod error;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;

pub use error::{ConfigError, GameError};
