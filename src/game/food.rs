use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::warn;

use super::point::Point;
use super::snake::Snake;

/// The food item and the board it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    /// (board height, board width)
    pub bounds: (i32, i32),
}

impl Food {
    pub fn new(position: Point, board_height: i32, board_width: i32) -> Self {
        Self {
            position,
            bounds: (board_height, board_width),
        }
    }

    /// Whether `point` lies in `[1, height - 2] x [1, width - 2]`.
    pub fn interior_contains(&self, point: Point) -> bool {
        let (max_y, max_x) = self.bounds;
        (1..=max_y - 2).contains(&point.y) && (1..=max_x - 2).contains(&point.x)
    }
}

/// Places food on free interior cells.
pub struct FoodSpawner {
    rng: StdRng,
    max_attempts: usize,
}

impl FoodSpawner {
    /// `seed` makes placement reproducible; `None` seeds from the OS.
    pub fn new(seed: Option<u64>, max_attempts: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Draw uniform interior cells until one is off the snake. After
    /// `max_attempts` misses, pick uniformly among the remaining free cells.
    /// Returns `None` when the snake covers the whole interior.
    pub fn place_avoiding(
        &mut self,
        snake: &Snake,
        board_height: i32,
        board_width: i32,
    ) -> Option<Point> {
        let (max_y, max_x) = (board_height - 2, board_width - 2);
        if max_y < 1 || max_x < 1 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let candidate = Point::new(self.rng.gen_range(1..=max_y), self.rng.gen_range(1..=max_x));
            if !snake.contains(candidate) {
                return Some(candidate);
            }
        }

        let free: Vec<Point> = (1..=max_y)
            .flat_map(|y| (1..=max_x).map(move |x| Point::new(y, x)))
            .filter(|p| !snake.contains(*p))
            .collect();

        warn!(
            attempts = self.max_attempts,
            free_cells = free.len(),
            "food sampling exhausted, scanning free cells"
        );

        free.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GrowthModel};

    fn snake_from(cells: Vec<Point>) -> Snake {
        Snake::from_segments(cells, Direction::Right, GrowthModel::Extrapolate).unwrap()
    }

    fn interior(h: i32, w: i32) -> Vec<Point> {
        (1..h - 1)
            .flat_map(|y| (1..w - 1).map(move |x| Point::new(y, x)))
            .collect()
    }

    #[test]
    fn test_placement_stays_inside_and_off_snake() {
        let mut spawner = FoodSpawner::new(Some(1), 64);
        let snake = Snake::new(Point::new(10, 10), 8, GrowthModel::Extrapolate).unwrap();
        let food = Food::new(Point::new(1, 1), 20, 20);

        for _ in 0..1000 {
            let p = spawner.place_avoiding(&snake, 20, 20).unwrap();
            assert!(food.interior_contains(p), "{p:?}");
            assert!(!snake.contains(p), "{p:?}");
        }
    }

    #[test]
    fn test_nearly_full_board_finds_last_cell() {
        let cells = interior(10, 10);
        let free = cells[37];
        let occupied: Vec<Point> = cells.into_iter().filter(|p| *p != free).collect();
        let snake = snake_from(occupied);

        let mut spawner = FoodSpawner::new(Some(3), 4);
        for _ in 0..20 {
            assert_eq!(spawner.place_avoiding(&snake, 10, 10), Some(free));
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let snake = snake_from(interior(10, 10));
        let mut spawner = FoodSpawner::new(Some(5), 16);
        assert_eq!(spawner.place_avoiding(&snake, 10, 10), None);
    }

    #[test]
    fn test_random_snakes_never_overlapped() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut spawner = FoodSpawner::new(Some(12), 8);
        let all = interior(12, 12);

        for _ in 0..200 {
            let take = rng.gen_range(1..all.len());
            let mut cells = all.clone();
            cells.shuffle(&mut rng);
            cells.truncate(take);

            let snake = snake_from(cells);
            let p = spawner.place_avoiding(&snake, 12, 12).unwrap();
            assert!(!snake.contains(p));
        }
    }

    #[test]
    fn test_seeded_spawners_agree() {
        let snake = Snake::new(Point::new(10, 10), 3, GrowthModel::Extrapolate).unwrap();
        let mut a = FoodSpawner::new(Some(99), 64);
        let mut b = FoodSpawner::new(Some(99), 64);
        for _ in 0..10 {
            assert_eq!(
                a.place_avoiding(&snake, 20, 20),
                b.place_avoiding(&snake, 20, 20)
            );
        }
    }
}
