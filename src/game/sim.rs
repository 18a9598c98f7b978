use std::time::Duration;

use color_eyre::Result;
use log::{debug, info};

use super::{
    config::GameConfig,
    event::Event,
    mode::Mode,
    state::GameState,
};
use crate::grid::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Stopped,
    Playing,
}

/// Drives a [`GameState`] from a host clock.
///
/// The host calls [`Simulation::tick`] as often as it likes (once per frame,
/// typically) with the current time. At most one discrete step happens per
/// tick, and only once the move interval has passed since the last one; time
/// that piles up while the host is slow is dropped rather than caught up.
#[derive(Debug, Clone)]
pub struct Simulation {
    game:      GameState,
    status:    Status,
    last_move: Duration,
}

impl Simulation {
    /// # Errors
    ///
    /// Fails if the config doesn't validate.
    pub fn new(config: GameConfig, mode: Mode) -> Result<Self> {
        Ok(Self {
            game:      GameState::new(config, mode)?,
            status:    Status::Stopped,
            last_move: Duration::ZERO,
        })
    }

    pub const fn game(&self) -> &GameState {
        &self.game
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn is_playing(&self) -> bool {
        matches!(self.status, Status::Playing)
    }

    /// Begins (or resumes) play, measuring the first move from `now`.
    ///
    /// # Errors
    ///
    /// Fails if the food or portals can't be placed.
    pub fn start(&mut self, now: Duration) -> Result<()> {
        if self.is_playing() {
            return Ok(());
        }
        self.game.prepare()?;
        self.status = Status::Playing;
        self.last_move = now;
        info!("playing {} mode", self.game.mode());
        Ok(())
    }

    /// Stops the clock but keeps the snake and score. Speed goes back to the
    /// default.
    pub fn pause(&mut self) {
        self.status = Status::Stopped;
        self.game.reset_move_interval();
        debug!("paused with a score of {}", self.game.score());
    }

    /// Stops the clock and resets the game.
    ///
    /// # Errors
    ///
    /// See [`GameState::reset`].
    pub fn stop(&mut self) -> Result<()> {
        self.status = Status::Stopped;
        self.game.reset()
    }

    /// Switching rules mid-game isn't allowed, so this stops play first.
    ///
    /// # Errors
    ///
    /// See [`GameState::reset`].
    pub fn select_mode(&mut self, mode: Mode) -> Result<()> {
        self.status = Status::Stopped;
        self.game.set_mode(mode)
    }

    /// Queues a heading for the next step. Ignored unless playing.
    pub fn turn(&mut self, direction: Direction) -> bool {
        self.is_playing() && self.game.turn(direction)
    }

    /// # Errors
    ///
    /// Fails only if a game over couldn't reset the board.
    pub fn tick(&mut self, now: Duration) -> Result<Vec<Event>> {
        if !self.is_playing() {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        if now.saturating_sub(self.last_move) >= self.game.move_interval() {
            events = self.game.advance();
            if events.iter().any(Event::is_game_over) {
                self.stop()?;
            } else {
                self.last_move = now;
            }
        }
        events.push(Event::Redraw);

        Ok(events)
    }
}
