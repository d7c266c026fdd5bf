use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::snake::Snake;

/// Where a session stands. Only `Playing` moves on; the rest are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Hit a wall or itself
    Lost,
    /// Quit by the player
    Ended,
    /// Filled the board
    Won,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// Headline shown on the end-of-game screen.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Phase::Playing => None,
            Phase::Lost => Some("You LOST!"),
            Phase::Ended => Some("You ended the game!"),
            Phase::Won => Some("Congrats! You WON!"),
        }
    }
}

/// How speed grows per food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPolicy {
    /// speed += increment
    #[default]
    Additive,
    /// speed *= 1 + increment
    Multiplicative,
}

impl SpeedPolicy {
    pub fn apply(&self, speed: f64, increment: f64) -> f64 {
        match self {
            SpeedPolicy::Additive => speed + increment,
            SpeedPolicy::Multiplicative => speed * (1.0 + increment),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub board_height: i32,
    pub board_width: i32,
    pub score: u32,
    /// Ticks per second
    pub speed: f64,
    pub phase: Phase,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, board_height: i32, board_width: i32, speed: f64) -> Self {
        Self {
            snake,
            food,
            board_height,
            board_width,
            score: 0,
            speed,
            phase: Phase::Playing,
            steps: 0,
        }
    }

    /// Time budget of one tick at the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GrowthModel, Point};

    fn state(speed: f64) -> GameState {
        GameState::new(
            Snake::new(Point::new(5, 5), 3, GrowthModel::Extrapolate).unwrap(),
            Food::new(Point::new(2, 2), 10, 10),
            10,
            10,
            speed,
        )
    }

    #[test]
    fn test_new_state_is_playing() {
        let s = state(2.0);
        assert!(s.is_playing());
        assert_eq!(s.score, 0);
        assert_eq!(s.steps, 0);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(state(2.0).tick_interval(), Duration::from_millis(500));
        assert_eq!(state(4.0).tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_speed_policies() {
        assert_eq!(SpeedPolicy::Additive.apply(2.0, 0.5), 2.5);
        assert!((SpeedPolicy::Multiplicative.apply(10.0, 0.05) - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_phases() {
        assert!(!Phase::Playing.is_terminal());
        for phase in [Phase::Lost, Phase::Ended, Phase::Won] {
            assert!(phase.is_terminal());
            assert!(phase.headline().is_some());
        }
    }
}
