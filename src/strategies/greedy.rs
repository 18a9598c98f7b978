use color_eyre::{eyre::eyre, Result};
use itertools::Itertools;
use log::trace;

use super::Strategy;
use crate::{
    game::GameState,
    grid::{utils::toroidal_distance, Coord, Direction},
};

/// Heads for the nearest pickup, refusing any move that would end the game
/// on the spot. Boxed in, it just keeps going.
pub struct Greedy;

impl Greedy {
    fn is_safe(game: &GameState, next: Coord) -> bool {
        let board = game.board();
        let mode = game.mode();

        if mode.checks_bounds() && !board.contains(next) {
            return false;
        }
        if mode.checks_walls() && game.walls().contains(&next) {
            return false;
        }
        !(mode.checks_self() && game.snake().would_bite(next))
    }
}

impl Strategy for Greedy {
    fn get_direction(&self, game: &GameState) -> Result<Direction> {
        let snake = game.snake();
        let board = game.board();
        let head = snake.head();
        let targets = game.pickups().positions();
        trace!("chasing {} from {head}", targets.iter().join(", "));

        let nearest = |coord: Coord| {
            targets
                .iter()
                .map(|target| toroidal_distance(&board, coord, *target))
                .min()
        };

        let best = Direction::iter()
            .copied()
            .filter(|d| *d != snake.direction().opposite())
            .map(|d| (d, board.step(head, d)))
            .filter(|(_, next)| Self::is_safe(game, *next))
            .min_by_key(|(_, next)| nearest(*next));

        match best {
            Some((direction, next)) => {
                trace!("heading {direction} to {next}");
                Ok(direction)
            },
            None if targets.is_empty() => {
                Err(eyre!("nothing to chase and nowhere safe to go"))
            },
            None => {
                trace!("boxed in at {head}, carrying on {}", snake.direction());
                Ok(snake.direction())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Mode};

    fn game(mode: Mode) -> GameState {
        GameState::new(
            GameConfig {
                seed: Some(17),
                ..Default::default()
            },
            mode,
        )
        .unwrap()
    }

    #[test]
    fn reaches_food() {
        let mut game = game(Mode::Classic);
        let before = game.score();
        for _ in 0..60 {
            let direction = Greedy.get_direction(&game).unwrap();
            game.turn(direction);
            game.advance();
            if game.score() > before {
                return;
            }
        }
        panic!("greedy never reached the food");
    }

    #[test]
    fn never_reverses() {
        let game = game(Mode::NoDie);
        let direction = Greedy.get_direction(&game).unwrap();
        assert_ne!(direction, game.snake().direction().opposite());
    }
}
