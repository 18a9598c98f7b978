pub mod greedy;

use color_eyre::Result;
pub use greedy::Greedy;

use crate::{game::GameState, grid::Direction};

pub trait Strategy {
    /// # Errors
    ///
    /// Can fail if the game state leaves the strategy nothing to work with.
    fn get_direction(&self, game: &GameState) -> Result<Direction>;
}
