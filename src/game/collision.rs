use super::point::Point;
use super::snake::Snake;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// True if `head` sits on the border: row 0, the last row, column 0 or the
/// last column. The playable interior is strictly inside; cells beyond the
/// border are not reported.
pub fn wall_collision(head: Point, board_height: i32, board_width: i32) -> bool {
    head.y == 0 || head.y == board_height - 1 || head.x == 0 || head.x == board_width - 1
}

/// True if the head shares a cell with any other segment. A single segment
/// snake never collides with itself.
pub fn self_collision(snake: &Snake) -> bool {
    if snake.len() == 1 {
        return false;
    }

    let head = snake.head();
    snake.segments().skip(1).any(|segment| segment == head)
}

pub fn food_collision(head: Point, food: Point) -> bool {
    head == food
}

/// Wall first, then self.
pub fn detect(snake: &Snake, board_height: i32, board_width: i32) -> Option<CollisionType> {
    if wall_collision(snake.head(), board_height, board_width) {
        Some(CollisionType::Wall)
    } else if self_collision(snake) {
        Some(CollisionType::SelfCollision)
    } else {
        None
    }
}
