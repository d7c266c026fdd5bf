//! Core game logic module for Snake
//!
//! This module contains the snake body, collision rules, food placement and
//! the per-tick engine, without any I/O or rendering dependencies.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod point;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use collision::CollisionType;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::{Food, FoodSpawner};
pub use point::Point;
pub use snake::{GrowthModel, IndexPolicy, Snake};
pub use state::{GameState, Phase, SpeedPolicy};
