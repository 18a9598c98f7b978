use std::collections::HashSet;

use log::trace;
use rand::{seq::IteratorRandom, Rng};

use super::snake::Snake;
use crate::grid::{Board, Coord};

/// Picks a uniformly random cell that is not part of the snake, not a wall,
/// and not listed in `avoid`.
///
/// Sampling is attempted `attempts` times; if every draw is rejected the free
/// cells are enumerated and one is chosen from those instead, so a crowded
/// board still resolves. `None` means there is no free cell at all.
pub fn random_position<R: Rng>(
    rng: &mut R,
    board: &Board,
    snake: &Snake,
    walls: &HashSet<Coord>,
    avoid: &[Coord],
    attempts: usize,
) -> Option<Coord> {
    let is_free = |coord: &Coord| {
        !snake.is_occupying(*coord)
            && !walls.contains(coord)
            && !avoid.contains(coord)
    };

    for _ in 0..attempts {
        let candidate = Coord {
            x: rng.gen_range(0..board.width),
            y: rng.gen_range(0..board.height),
        };
        if is_free(&candidate) {
            return Some(candidate);
        }
    }

    trace!(
        "no free cell after {attempts} draws, choosing from the free set \
         instead"
    );
    board.cells().filter(is_free).choose(rng)
}

/// A single pickup on the board. Regular food, and each end of a portal pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Coord,
}

impl Food {
    pub fn spawn<R: Rng>(
        rng: &mut R,
        board: &Board,
        snake: &Snake,
        walls: &HashSet<Coord>,
        avoid: &[Coord],
        attempts: usize,
    ) -> Option<Food> {
        random_position(rng, board, snake, walls, avoid, attempts)
            .map(|position| Food { position })
    }

    /// Moves this food somewhere else. Leaves it untouched and returns
    /// `false` if the board has no room.
    pub fn respawn<R: Rng>(
        &mut self,
        rng: &mut R,
        board: &Board,
        snake: &Snake,
        walls: &HashSet<Coord>,
        attempts: usize,
    ) -> bool {
        match random_position(rng, board, snake, walls, &[], attempts) {
            Some(position) => {
                self.position = position;
                true
            },
            None => false,
        }
    }
}

/// Both ends of a portal. The two are never on the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portals {
    pub entry: Food,
    pub exit:  Food,
}

impl Portals {
    pub fn spawn<R: Rng>(
        rng: &mut R,
        board: &Board,
        snake: &Snake,
        walls: &HashSet<Coord>,
        avoid: &[Coord],
        attempts: usize,
    ) -> Option<Portals> {
        let entry = Food::spawn(rng, board, snake, walls, avoid, attempts)?;

        let mut avoid = avoid.to_vec();
        avoid.push(entry.position);
        let exit = Food::spawn(rng, board, snake, walls, &avoid, attempts)?;

        Some(Portals { entry, exit })
    }

    /// If `coord` is on either end, the position of the other end.
    pub fn partner(&self, coord: Coord) -> Option<Coord> {
        if coord == self.entry.position {
            Some(self.exit.position)
        } else if coord == self.exit.position {
            Some(self.entry.position)
        } else {
            None
        }
    }
}
