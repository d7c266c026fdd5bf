use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

// Unit offsets as (dy, dx), indexed by `Direction as usize`.
const DELTAS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the unit offset (dy, dx) for moving in this direction.
    /// Rows grow downwards, so `Up` decreases y.
    pub fn delta(&self) -> (i32, i32) {
        DELTAS[*self as usize]
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Direction matching an offset of exactly one cell, if any.
    pub fn from_delta(dy: i32, dx: i32) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.delta() == (dy, dx))
    }
}

/// Abstract command decoded from player input.
///
/// The absence of a command within a tick means "keep the current heading".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Head in this direction on the next move
    Turn(Direction),
    /// End the session
    Quit,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Turn(direction)
    }
}
