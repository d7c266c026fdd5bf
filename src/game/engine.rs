use tracing::{debug, info};

use super::{
    action::Command,
    collision::{self, CollisionType},
    config::GameConfig,
    food::{Food, FoodSpawner},
    point::Point,
    snake::Snake,
    state::{GameState, Phase},
};
use crate::error::GameError;

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Phase after the step
    pub phase: Phase,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let spawner = FoodSpawner::new(None, config.food_attempts);
        Self { config, spawner }
    }

    /// Same as [`GameEngine::new`] with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let spawner = FoodSpawner::new(Some(seed), config.food_attempts);
        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a session: snake centred on the board heading right, food placed
    /// off the snake.
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let (height, width) = (self.config.board_height(), self.config.board_width());

        let snake = Snake::new(
            Point::new(height / 2, width / 2),
            self.config.initial_size,
            self.config.growth_model,
        )?
        .with_index_policy(self.config.index_policy);

        let position = self
            .spawner
            .place_avoiding(&snake, height, width)
            .ok_or(GameError::BoardFull)?;

        info!(
            height,
            width,
            speed = self.config.initial_speed,
            "session started"
        );

        Ok(GameState::new(
            snake,
            Food::new(position, height, width),
            height,
            width,
            self.config.initial_speed,
        ))
    }

    /// Execute one tick: apply the command, move, eat, then check collisions.
    pub fn step(&mut self, state: &mut GameState, command: Option<Command>) -> StepResult {
        if state.phase.is_terminal() {
            return StepResult {
                phase: state.phase,
                terminated: true,
                info: StepInfo::default(),
            };
        }

        match command {
            Some(Command::Quit) => {
                state.phase = Phase::Ended;
                info!(score = state.score, steps = state.steps, "session ended by player");
                return StepResult {
                    phase: state.phase,
                    terminated: true,
                    info: StepInfo::default(),
                };
            }
            Some(Command::Turn(direction)) => state.snake.change_direction(direction),
            None => {
                // Keep current heading
            }
        }

        state.snake.advance();
        state.steps += 1;

        let ate_food = collision::food_collision(state.snake.head(), state.food.position);
        let mut board_full = false;

        if ate_food {
            state.score += 1;
            state.snake.grow_at_tail();
            state.speed = self
                .config
                .speed_policy
                .apply(state.speed, self.config.speed_increment);

            // placed after growing so the new tail is avoided too
            match self
                .spawner
                .place_avoiding(&state.snake, state.board_height, state.board_width)
            {
                Some(position) => state.food.position = position,
                None => board_full = true,
            }

            debug!(
                score = state.score,
                length = state.snake.len(),
                speed = state.speed,
                "food eaten"
            );
        }

        let collision_type =
            collision::detect(&state.snake, state.board_height, state.board_width);

        if let Some(kind) = collision_type {
            state.phase = Phase::Lost;
            info!(?kind, score = state.score, steps = state.steps, "snake crashed");
        } else if board_full {
            state.phase = Phase::Won;
            info!(score = state.score, steps = state.steps, "board filled");
        }

        StepResult {
            phase: state.phase,
            terminated: state.phase.is_terminal(),
            info: StepInfo {
                ate_food,
                collision_type,
            },
        }
    }
}
