use std::time::Duration;

use color_eyre::{eyre::eyre, Result};
use serde::{Deserialize, Serialize};

use crate::grid::{Board, Coord, Direction};

/// Largest side length `validate` accepts.
pub const MAX_GRID_SIZE: i64 = 1_000;

/// What the edge of the board does in modes that treat leaving it as lethal.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Every mode wraps around, so the bounds check never fires.
    #[default]
    Wrap,
    /// classic, walls and speed stop at the edge and die past it.
    Solid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size:            i64,
    pub start:                Coord,
    pub start_direction:      Direction,
    pub move_interval_ms:     u64,
    pub min_move_interval_ms: u64,
    /// Multiplier applied to the move interval on every eat in speed mode.
    pub speed_factor:         f64,
    pub boundary:             Boundary,
    /// Random draws before placement falls back to scanning free cells.
    pub placement_attempts:   usize,
    pub seed:                 Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size:            20,
            start:                Coord::new(10, 10),
            start_direction:      Direction::Right,
            move_interval_ms:     200,
            min_move_interval_ms: 50,
            speed_factor:         0.9,
            boundary:             Boundary::Wrap,
            placement_attempts:   64,
            seed:                 None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_grid_size(grid_size: i64) -> Self {
        Self {
            grid_size,
            start: Coord::new(grid_size / 2, grid_size / 2),
            ..Default::default()
        }
    }

    pub const fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }

    pub const fn min_move_interval(&self) -> Duration {
        Duration::from_millis(self.min_move_interval_ms)
    }

    pub const fn board(&self) -> Board {
        Board::square(self.grid_size)
    }

    /// # Errors
    ///
    /// Fails if the settings can't produce a playable game.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(eyre!(
                "grid size must be between 2 and {MAX_GRID_SIZE}, got {}",
                self.grid_size
            ));
        }
        if !self.board().contains(self.start) {
            return Err(eyre!(
                "start position {} is outside the {}x{} grid",
                self.start,
                self.grid_size,
                self.grid_size
            ));
        }
        if self.move_interval_ms == 0 {
            return Err(eyre!("move interval must be above zero"));
        }
        if self.min_move_interval_ms > self.move_interval_ms {
            return Err(eyre!(
                "minimum move interval ({} ms) is above the default ({} ms)",
                self.min_move_interval_ms,
                self.move_interval_ms
            ));
        }
        if !(self.speed_factor > 0.0 && self.speed_factor <= 1.0) {
            return Err(eyre!(
                "speed factor must be in (0, 1], got {}",
                self.speed_factor
            ));
        }
        if self.placement_attempts == 0 {
            return Err(eyre!("placement attempts must be above zero"));
        }
        Ok(())
    }
}
