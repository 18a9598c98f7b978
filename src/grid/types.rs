use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];
        DIRECTIONS.iter()
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step in screen space: x grows to the right, y grows downwards.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Left => "Left",
                Direction::Right => "Right",
                Direction::Up => "Up",
                Direction::Down => "Down",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The adjacent cell, with no regard for the edges of any board.
    #[must_use]
    pub const fn neighbour(self, direction: Direction) -> Coord {
        let (dx, dy) = direction.delta();
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for direction in Direction::iter() {
            assert_ne!(direction.opposite(), *direction);
            assert_eq!(direction.opposite().opposite(), *direction);
        }
    }

    #[test]
    fn neighbour_follows_screen_axes() {
        let c = Coord::new(5, 5);
        assert_eq!(c.neighbour(Direction::Right), Coord::new(6, 5));
        assert_eq!(c.neighbour(Direction::Left), Coord::new(4, 5));
        assert_eq!(c.neighbour(Direction::Up), Coord::new(5, 4));
        assert_eq!(c.neighbour(Direction::Down), Coord::new(5, 6));
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(json, "\"up\"");
        let parsed: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(parsed, Direction::Left);
    }
}
