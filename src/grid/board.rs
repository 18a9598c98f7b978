use super::types::{Coord, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:    i64,
    pub height:   i64,
    pub wrapping: bool,
}

impl Board {
    #[must_use]
    pub const fn square(size: i64) -> Self {
        Self {
            width:    size,
            height:   size,
            wrapping: true,
        }
    }

    #[must_use]
    pub const fn with_wrapping(self, wrapping: bool) -> Self {
        Self { wrapping, ..self }
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    /// Where a head at `coord` lands after one step in `direction`.
    ///
    /// Wrapping boards are toroidal, so the result always lies on the board.
    /// Solid boards return the raw neighbour, which may be off the board.
    pub const fn step(&self, coord: Coord, direction: Direction) -> Coord {
        let next = coord.neighbour(direction);
        if self.wrapping {
            Coord {
                x: next.x.rem_euclid(self.width),
                y: next.y.rem_euclid(self.height),
            }
        } else {
            next
        }
    }

    pub const fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Coord { x, y }))
    }
}
