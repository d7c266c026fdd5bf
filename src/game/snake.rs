use std::collections::VecDeque;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::point::Point;
use crate::error::GameError;

/// How the body works out where a new tail segment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GrowthModel {
    /// Continue the line from the penultimate segment through the tail.
    #[default]
    Extrapolate,
    /// Replay the turns the head made: the tail heading changes each time the
    /// tail reaches a recorded turning point.
    TurningPoints,
}

/// What [`Snake::segment_at`] does with an index past the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Out-of-range indices resolve to the tail
    #[default]
    Clamp,
    /// Out-of-range indices are an error
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Turn {
    at: Point,
    heading: Direction,
}

#[derive(Debug, Clone, PartialEq)]
enum Growth {
    Extrapolate,
    TurningPoints {
        /// Oldest turn (closest to the tail) at the front.
        turns: VecDeque<Turn>,
        tail_heading: Direction,
        last_moved: Direction,
    },
}

impl Growth {
    fn derive(model: GrowthModel, body: &VecDeque<Point>, heading: Direction) -> Self {
        match model {
            GrowthModel::Extrapolate => Growth::Extrapolate,
            GrowthModel::TurningPoints => {
                let n = body.len();
                let last_moved = if n > 1 {
                    body[1].direction_to(body[0]).unwrap_or(heading)
                } else {
                    heading
                };
                let tail_heading = if n > 1 {
                    body[n - 1].direction_to(body[n - 2]).unwrap_or(heading)
                } else {
                    heading
                };

                let mut turns = VecDeque::new();
                for i in (1..n.saturating_sub(1)).rev() {
                    let incoming = body[i + 1].direction_to(body[i]);
                    let outgoing = body[i].direction_to(body[i - 1]);
                    if let (Some(incoming), Some(outgoing)) = (incoming, outgoing) {
                        if incoming != outgoing {
                            turns.push_back(Turn {
                                at: body[i],
                                heading: outgoing,
                            });
                        }
                    }
                }

                Growth::TurningPoints {
                    turns,
                    tail_heading,
                    last_moved,
                }
            }
        }
    }

    fn model(&self) -> GrowthModel {
        match self {
            Growth::Extrapolate => GrowthModel::Extrapolate,
            Growth::TurningPoints { .. } => GrowthModel::TurningPoints,
        }
    }

    fn before_move(&mut self, head: Point, heading: Direction) {
        if let Growth::TurningPoints {
            turns, last_moved, ..
        } = self
        {
            if heading != *last_moved {
                turns.push_back(Turn { at: head, heading });
                *last_moved = heading;
            }
        }
    }

    fn after_move(&mut self, tail: Point, len: usize) {
        if let Growth::TurningPoints {
            turns,
            tail_heading,
            last_moved,
        } = self
        {
            // the head is the tail, so every turn is already behind it
            if len == 1 {
                turns.clear();
                *tail_heading = *last_moved;
                return;
            }

            while let Some(turn) = turns.front().copied() {
                if turn.at != tail {
                    break;
                }
                *tail_heading = turn.heading;
                turns.pop_front();
            }
        }
    }
}

/// The snake: an ordered body from head (index 0) to tail, plus the heading
/// applied on the next move.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Point>,
    heading: Direction,
    growth: Growth,
    index_policy: IndexPolicy,
}

impl Snake {
    /// Lay out a snake of `size` segments horizontally, head at `head` and the
    /// rest trailing to the left, heading right.
    pub fn new(head: Point, size: usize, model: GrowthModel) -> Result<Self, GameError> {
        if size < 2 {
            return Err(GameError::SnakeTooShort(size));
        }

        let body = (0..size as i32).map(|i| head.offset(0, -i));
        Self::from_segments(body, Direction::Right, model)
    }

    /// Build a snake from explicit segments, head first. Any non-empty body is
    /// accepted, including a single segment.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Point>,
        heading: Direction,
        model: GrowthModel,
    ) -> Result<Self, GameError> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::EmptyBody);
        }

        let growth = Growth::derive(model, &body, heading);
        Ok(Self {
            body,
            heading,
            growth,
            index_policy: IndexPolicy::default(),
        })
    }

    pub fn with_index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index_policy = policy;
        self
    }

    /// Set the heading for the next move. Reversing into the neck is allowed
    /// here; the collision check catches it after the move.
    pub fn change_direction(&mut self, direction: Direction) {
        self.heading = direction;
    }

    /// Advance one cell along the heading: the old tail is dropped and the new
    /// head is pushed at the front, so the length is unchanged.
    pub fn advance(&mut self) {
        let head = self.head();
        self.growth.before_move(head, self.heading);

        self.body.push_front(head.moved(self.heading));
        self.body.pop_back();

        let tail = self.tail();
        self.growth.after_move(tail, self.body.len());
    }

    /// Append one segment beyond the tail, in the direction the tail is
    /// travelling. A single-segment snake grows opposite to its heading.
    pub fn grow_at_tail(&mut self) {
        let tail = self.tail();
        let n = self.body.len();

        let extension = if n == 1 {
            tail.moved(self.heading.opposite())
        } else {
            match &self.growth {
                Growth::Extrapolate => {
                    let penultimate = self.body[n - 2];
                    tail.offset(tail.y - penultimate.y, tail.x - penultimate.x)
                }
                Growth::TurningPoints { tail_heading, .. } => {
                    tail.moved(tail_heading.opposite())
                }
            }
        };

        self.body.push_back(extension);

        if n == 1 {
            self.growth = Growth::derive(self.growth.model(), &self.body, self.heading);
        }
    }

    /// Get the head position
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    /// Segment at `index`, resolved past the tail according to the snake's
    /// [`IndexPolicy`].
    pub fn segment_at(&self, index: usize) -> Result<Point, GameError> {
        match self.body.get(index) {
            Some(point) => Ok(*point),
            None => match self.index_policy {
                IndexPolicy::Clamp => Ok(self.tail()),
                IndexPolicy::Strict => Err(GameError::SegmentOutOfRange {
                    index,
                    len: self.body.len(),
                }),
            },
        }
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
        self.body.iter().copied()
    }

    /// Check if position is occupied by any segment, head included
    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn growth_model(&self) -> GrowthModel {
        self.growth.model()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
