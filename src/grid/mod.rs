//! The shared coordinate space: cells, headings, and the board's edge policy.

pub mod board;
pub mod types;
pub mod utils;

pub use board::Board;
pub use types::{Coord, Direction};
