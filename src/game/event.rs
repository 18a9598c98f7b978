use std::time::Duration;

use serde::Serialize;

use super::mode::GameOverReason;
use crate::grid::Coord;

/// State changes reported to whoever is presenting the game.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    Moved { head: Coord },
    ScoreChanged { score: u32, best: u32 },
    Teleported { from: Coord, to: Coord },
    WallAdded { at: Coord },
    SpeedChanged { interval: Duration },
    /// The game has already been reset by the time this is seen.
    GameOver { reason: GameOverReason, score: u32 },
    Redraw,
}

impl Event {
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Event::GameOver { .. })
    }
}
