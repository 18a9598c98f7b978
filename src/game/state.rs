use std::{collections::HashSet, fmt, time::Duration};

use color_eyre::{eyre::eyre, Result};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    config::GameConfig,
    event::Event,
    food::{random_position, Food, Portals},
    mode::{GameOverReason, Mode, Reward},
    snake::Snake,
};
use crate::grid::{Board, Coord, Direction};

/// What the snake is chasing. Portal mode swaps the single food for a pair
/// of portals when play starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickups {
    Food(Food),
    Portals(Portals),
}

impl Pickups {
    pub fn positions(&self) -> Vec<Coord> {
        match self {
            Pickups::Food(food) => vec![food.position],
            Pickups::Portals(portals) => {
                vec![portals.entry.position, portals.exit.position]
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    config:        GameConfig,
    mode:          Mode,
    snake:         Snake,
    pickups:       Pickups,
    walls:         HashSet<Coord>,
    score:         u32,
    best_score:    u32,
    move_interval: Duration,
    rng:           StdRng,
}

impl GameState {
    /// # Errors
    ///
    /// Fails if the config doesn't validate.
    pub fn new(config: GameConfig, mode: Mode) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Snake::new(config.start, config.start_direction);
        let move_interval = config.move_interval();

        let mut game = GameState {
            config,
            mode,
            snake,
            pickups: Pickups::Food(Food {
                position: Coord::new(0, 0),
            }),
            walls: HashSet::new(),
            score: 0,
            best_score: 0,
            move_interval,
            rng,
        };
        game.reset()?;

        Ok(game)
    }

    /// The board as seen by the current mode, edge policy included.
    pub const fn board(&self) -> Board {
        self.config
            .board()
            .with_wrapping(self.mode.wraps(self.config.boundary))
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn snake(&self) -> &Snake {
        &self.snake
    }

    pub const fn pickups(&self) -> Pickups {
        self.pickups
    }

    pub const fn food(&self) -> Option<Food> {
        match self.pickups {
            Pickups::Food(food) => Some(food),
            Pickups::Portals(_) => None,
        }
    }

    pub const fn portals(&self) -> Option<Portals> {
        match self.pickups {
            Pickups::Portals(portals) => Some(portals),
            Pickups::Food(_) => None,
        }
    }

    pub const fn walls(&self) -> &HashSet<Coord> {
        &self.walls
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    pub const fn move_interval(&self) -> Duration {
        self.move_interval
    }

    /// Fresh snake, zero score, no walls, default speed. Best score survives.
    ///
    /// # Errors
    ///
    /// Fails if there's nowhere to put the first food.
    pub fn reset(&mut self) -> Result<()> {
        self.snake = Snake::new(self.config.start, self.config.start_direction);
        self.score = 0;
        self.move_interval = self.config.move_interval();
        self.walls.clear();

        let board = self.board();
        let food = Food::spawn(
            &mut self.rng,
            &board,
            &self.snake,
            &self.walls,
            &[],
            self.config.placement_attempts,
        )
        .ok_or_else(|| no_room(&board))?;
        self.pickups = Pickups::Food(food);

        Ok(())
    }

    /// Switches rules. Always a full reset.
    ///
    /// # Errors
    ///
    /// See [`GameState::reset`].
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        info!("switching mode from {} to {mode}", self.mode);
        self.mode = mode;
        self.reset()
    }

    pub fn reset_move_interval(&mut self) {
        self.move_interval = self.config.move_interval();
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        self.snake.change_direction(direction)
    }

    /// Lays out pickups for a round of play: a fresh portal pair in portal
    /// mode, otherwise the food moves somewhere clear of the walls.
    ///
    /// # Errors
    ///
    /// Fails if the board has no room left.
    pub fn prepare(&mut self) -> Result<()> {
        let board = self.board();
        let attempts = self.config.placement_attempts;

        self.pickups = if self.mode.uses_portals() {
            let portals = Portals::spawn(
                &mut self.rng,
                &board,
                &self.snake,
                &self.walls,
                &[],
                attempts,
            )
            .ok_or_else(|| no_room(&board))?;
            Pickups::Portals(portals)
        } else {
            let food = Food::spawn(
                &mut self.rng,
                &board,
                &self.snake,
                &self.walls,
                &[],
                attempts,
            )
            .ok_or_else(|| no_room(&board))?;
            Pickups::Food(food)
        };

        Ok(())
    }

    /// One discrete step: move, check hazards, resolve whatever the head
    /// landed on.
    ///
    /// A lethal step ends with [`Event::GameOver`] and leaves the board as it
    /// was at the moment of death; resetting is up to the caller.
    pub fn advance(&mut self) -> Vec<Event> {
        let board = self.board();
        self.snake.advance(&board);

        let head = self.snake.head();
        let mut events = vec![Event::Moved { head }];
        debug!(
            "snake moves {} to {head}, length {}",
            self.snake.direction(),
            self.snake.len()
        );

        let outcome = self
            .mode
            .hazard(&self.snake, &board, &self.walls)
            .or_else(|| match self.mode.reward() {
                Reward::Food {
                    spawn_wall,
                    speed_up,
                } => self.eat_food(&board, spawn_wall, speed_up, &mut events),
                Reward::Portal => self.enter_portal(&board, &mut events),
            });

        if let Some(reason) = outcome {
            info!(
                "game over in {} mode: snake {reason} at {head} with a score \
                 of {}",
                self.mode, self.score
            );
            events.push(Event::GameOver {
                reason,
                score: self.score,
            });
        }

        events
    }

    fn eat_food(
        &mut self,
        board: &Board,
        spawn_wall: bool,
        speed_up: bool,
        events: &mut Vec<Event>,
    ) -> Option<GameOverReason> {
        let Pickups::Food(mut food) = self.pickups else {
            return None;
        };
        if self.snake.head() != food.position {
            return None;
        }

        self.snake.grow();
        events.push(self.add_point());

        if spawn_wall {
            let Some(at) = random_position(
                &mut self.rng,
                board,
                &self.snake,
                &self.walls,
                &[food.position],
                self.config.placement_attempts,
            ) else {
                return Some(GameOverReason::BoardFull);
            };
            debug!("new wall at {at}");
            self.walls.insert(at);
            events.push(Event::WallAdded { at });
        }

        if speed_up {
            self.move_interval = self
                .move_interval
                .mul_f64(self.config.speed_factor)
                .max(self.config.min_move_interval());
            events.push(Event::SpeedChanged {
                interval: self.move_interval,
            });
        }

        if !food.respawn(
            &mut self.rng,
            board,
            &self.snake,
            &self.walls,
            self.config.placement_attempts,
        ) {
            return Some(GameOverReason::BoardFull);
        }
        self.pickups = Pickups::Food(food);

        None
    }

    fn enter_portal(
        &mut self,
        board: &Board,
        events: &mut Vec<Event>,
    ) -> Option<GameOverReason> {
        let portals = match self.pickups {
            Pickups::Portals(portals) => portals,
            // Portals only appear once play starts; until then it's plain food.
            Pickups::Food(_) => {
                return self.eat_food(board, false, false, events);
            },
        };
        let from = self.snake.head();
        let to = portals.partner(from)?;

        self.snake.teleport_head(to);
        events.push(Event::Teleported { from, to });
        debug!("snake jumps through the portal from {from} to {to}");

        self.snake.grow();
        events.push(self.add_point());

        let used = [portals.entry.position, portals.exit.position];
        let attempts = self.config.placement_attempts;
        let respawned = Portals::spawn(
            &mut self.rng,
            board,
            &self.snake,
            &self.walls,
            &used,
            attempts,
        )
        .or_else(|| {
            Portals::spawn(
                &mut self.rng,
                board,
                &self.snake,
                &self.walls,
                &[],
                attempts,
            )
        });

        match respawned {
            Some(portals) => {
                self.pickups = Pickups::Portals(portals);
                None
            },
            None => Some(GameOverReason::BoardFull),
        }
    }

    fn add_point(&mut self) -> Event {
        self.score += 1;
        self.best_score = self.best_score.max(self.score);
        Event::ScoreChanged {
            score: self.score,
            best:  self.best_score,
        }
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, snake: Snake, pickups: Pickups) {
        self.snake = snake;
        self.pickups = pickups;
    }
}

fn no_room(board: &Board) -> color_eyre::Report {
    eyre!(
        "no free cell left on the {}x{} board",
        board.width,
        board.height
    )
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        for y in 0..board.height {
            for x in 0..board.width {
                let c = Coord { x, y };
                let cell = if c == self.snake.head() {
                    '@'
                } else if self.snake.is_occupying(c) {
                    'o'
                } else if self.walls.contains(&c) {
                    '#'
                } else {
                    match self.pickups {
                        Pickups::Food(food) if food.position == c => '*',
                        Pickups::Portals(portals)
                            if portals.entry.position == c =>
                        {
                            'A'
                        },
                        Pickups::Portals(portals)
                            if portals.exit.position == c =>
                        {
                            'B'
                        },
                        _ => '.',
                    }
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
