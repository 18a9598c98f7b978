use std::collections::VecDeque;

use crate::grid::{Board, Coord, Direction};

/// Body is stored head-first; it is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body:      VecDeque<Coord>,
    direction: Direction,
    growing:   bool,
}

impl Snake {
    pub fn new(head: Coord, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
            growing: false,
        }
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn tail(&self) -> Coord {
        self.body[self.body.len() - 1]
    }

    pub const fn body(&self) -> &VecDeque<Coord> {
        &self.body
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Pushes a new head one cell along the current heading and drops the
    /// tail, unless a grow was requested since the last advance.
    pub fn advance(&mut self, board: &Board) {
        let head = board.step(self.head(), self.direction);

        if self.growing {
            self.growing = false;
        } else {
            self.body.pop_back();
        }

        self.body.push_front(head);
    }

    /// Takes effect on the next advance.
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// Turning straight back into the neck is ignored. Returns whether the
    /// heading was accepted; the last accepted heading before an advance wins.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Moves the head in place, leaving the rest of the body where it is.
    pub fn teleport_head(&mut self, to: Coord) {
        self.body[0] = to;
    }

    pub fn has_collided(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn is_out_of_bounds(&self, board: &Board) -> bool {
        !board.contains(self.head())
    }

    pub fn is_occupying(&self, coord: Coord) -> bool {
        self.body.contains(&coord)
    }

    /// Whether stepping into `coord` next would hit the body. The tail is
    /// excluded when it is about to move out of the way.
    pub fn would_bite(&self, coord: Coord) -> bool {
        let len = if self.growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(len).any(|segment| *segment == coord)
    }

    #[cfg(test)]
    pub(crate) fn from_body(
        body: impl IntoIterator<Item = Coord>,
        direction: Direction,
    ) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
            growing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::square(20)
    }

    #[test]
    fn reversal_is_rejected() {
        for current in Direction::iter() {
            for requested in Direction::iter() {
                let mut snake = Snake::new(Coord::new(10, 10), *current);
                let accepted = snake.change_direction(*requested);
                if *requested == current.opposite() {
                    assert!(!accepted);
                    assert_eq!(snake.direction(), *current);
                } else {
                    assert!(accepted);
                    assert_eq!(snake.direction(), *requested);
                }
            }
        }
    }

    #[test]
    fn last_turn_before_advance_wins() {
        let mut snake = Snake::new(Coord::new(10, 10), Direction::Right);
        assert!(snake.change_direction(Direction::Up));
        assert!(snake.change_direction(Direction::Left));
        snake.advance(&board());
        assert_eq!(snake.head(), Coord::new(9, 10));
    }

    #[test]
    fn reversing_a_queued_turn_is_rejected() {
        let mut snake = Snake::new(Coord::new(10, 10), Direction::Right);
        assert!(snake.change_direction(Direction::Up));
        assert!(!snake.change_direction(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);
        snake.advance(&board());
        assert_eq!(snake.head(), Coord::new(10, 9));
    }

    #[test]
    fn advance_then_grow() {
        let mut snake = Snake::new(Coord::new(10, 10), Direction::Right);
        snake.advance(&board());
        assert_eq!(snake.head(), Coord::new(11, 10));
        assert_eq!(snake.len(), 1);

        snake.grow();
        snake.advance(&board());
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Coord::new(12, 10));
        assert_eq!(snake.tail(), Coord::new(11, 10));
        assert!(!snake.is_growing());
    }

    #[test]
    fn repeated_grow_only_adds_one() {
        let mut snake = Snake::new(Coord::new(10, 10), Direction::Right);
        snake.grow();
        snake.grow();
        snake.advance(&board());
        snake.advance(&board());
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn wraps_instead_of_leaving_board() {
        let mut snake = Snake::new(Coord::new(0, 10), Direction::Left);
        snake.advance(&board());
        assert_eq!(snake.head(), Coord::new(19, 10));
        assert!(!snake.is_out_of_bounds(&board()));
    }

    #[test]
    fn leaves_solid_board() {
        let solid = board().with_wrapping(false);
        let mut snake = Snake::new(Coord::new(0, 10), Direction::Left);
        snake.advance(&solid);
        assert!(snake.is_out_of_bounds(&solid));
    }

    #[test]
    fn collision_means_head_repeats() {
        let snake = Snake::from_body(
            [
                Coord::new(5, 5),
                Coord::new(5, 6),
                Coord::new(6, 6),
                Coord::new(6, 5),
                Coord::new(5, 5),
            ],
            Direction::Up,
        );
        assert!(snake.has_collided());

        let snake = Snake::from_body(
            [Coord::new(5, 5), Coord::new(5, 6), Coord::new(6, 6)],
            Direction::Up,
        );
        assert!(!snake.has_collided());
    }

    #[test]
    fn occupancy_covers_whole_body() {
        let snake = Snake::from_body(
            [Coord::new(5, 5), Coord::new(4, 5), Coord::new(3, 5)],
            Direction::Right,
        );
        assert!(snake.is_occupying(Coord::new(5, 5)));
        assert!(snake.is_occupying(Coord::new(3, 5)));
        assert!(!snake.is_occupying(Coord::new(6, 5)));
        assert!(snake.would_bite(Coord::new(4, 5)));
        assert!(!snake.would_bite(Coord::new(3, 5)));
    }

    #[test]
    fn teleport_moves_only_head() {
        let mut snake = Snake::from_body(
            [Coord::new(5, 5), Coord::new(4, 5)],
            Direction::Right,
        );
        snake.teleport_head(Coord::new(12, 3));
        assert_eq!(snake.head(), Coord::new(12, 3));
        assert_eq!(snake.tail(), Coord::new(4, 5));
    }
}
