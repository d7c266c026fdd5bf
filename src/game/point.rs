use super::action::Direction;

/// A cell on the board. (0, 0) is the top-left corner, y grows downwards and
/// x grows rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

impl Point {
    pub fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// Move position by delta
    pub fn offset(&self, dy: i32, dx: i32) -> Self {
        Self {
            y: self.y + dy,
            x: self.x + dx,
        }
    }

    /// Move position one cell in a direction
    pub fn moved(&self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        self.offset(dy, dx)
    }

    /// Direction of the single step leading from `self` to `other`, if the two
    /// cells are 4-adjacent.
    pub fn direction_to(&self, other: Point) -> Option<Direction> {
        Direction::from_delta(other.y - self.y, other.x - self.x)
    }

    pub fn manhattan(&self, other: Point) -> i32 {
        (self.y - other.y).abs() + (self.x - other.x).abs()
    }
}
