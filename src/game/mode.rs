use std::{collections::HashSet, fmt, slice::Iter, str::FromStr};

use color_eyre::{eyre::eyre, Report};
use serde::{Deserialize, Serialize};

use super::{config::Boundary, snake::Snake};
use crate::grid::{Board, Coord};

#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Classic,
    Walls,
    Speed,
    Portal,
    NoDie,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GameOverReason {
    OutOfBounds,
    SelfCollision,
    Wall,
    /// There was nowhere left to put food, a wall, or a portal.
    BoardFull,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GameOverReason::OutOfBounds => "left the board",
                GameOverReason::SelfCollision => "bit itself",
                GameOverReason::Wall => "hit a wall",
                GameOverReason::BoardFull => "ran out of room",
            }
        )
    }
}

/// What happens when the head reaches a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    /// Grow, score, respawn the food. Optionally drop a new wall and/or
    /// speed the game up.
    Food { spawn_wall: bool, speed_up: bool },
    /// Jump to the other end, grow, score, respawn both ends.
    Portal,
}

impl Mode {
    pub fn iter() -> Iter<'static, Mode> {
        static MODES: [Mode; 5] = [
            Mode::Classic,
            Mode::Walls,
            Mode::Speed,
            Mode::Portal,
            Mode::NoDie,
        ];
        MODES.iter()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Walls => "walls",
            Mode::Speed => "speed",
            Mode::Portal => "portal",
            Mode::NoDie => "no-die",
        }
    }

    pub const fn checks_bounds(self) -> bool {
        matches!(self, Mode::Classic | Mode::Walls | Mode::Speed)
    }

    pub const fn checks_self(self) -> bool {
        self.checks_bounds()
    }

    pub const fn checks_walls(self) -> bool {
        matches!(self, Mode::Walls)
    }

    /// Modes that can't die from leaving the board always wrap.
    pub const fn wraps(self, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Wrap => true,
            Boundary::Solid => !self.checks_bounds(),
        }
    }

    pub const fn uses_portals(self) -> bool {
        matches!(self, Mode::Portal)
    }

    /// Checks the lethal conditions this mode cares about, after a move.
    pub fn hazard(
        self,
        snake: &Snake,
        board: &Board,
        walls: &HashSet<Coord>,
    ) -> Option<GameOverReason> {
        if self.checks_bounds() && snake.is_out_of_bounds(board) {
            Some(GameOverReason::OutOfBounds)
        } else if self.checks_self() && snake.has_collided() {
            Some(GameOverReason::SelfCollision)
        } else if self.checks_walls() && walls.contains(&snake.head()) {
            Some(GameOverReason::Wall)
        } else {
            None
        }
    }

    pub const fn reward(self) -> Reward {
        match self {
            Mode::Classic | Mode::NoDie => Reward::Food {
                spawn_wall: false,
                speed_up:   false,
            },
            Mode::Walls => Reward::Food {
                spawn_wall: true,
                speed_up:   false,
            },
            Mode::Speed => Reward::Food {
                spawn_wall: false,
                speed_up:   true,
            },
            Mode::Portal => Reward::Portal,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| {
                eyre!(
                    "unknown mode {s:?}, expected one of: classic, walls, \
                     speed, portal, no-die"
                )
            })
    }
}
