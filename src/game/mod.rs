pub mod config;
pub mod event;
pub mod food;
pub mod mode;
pub mod sim;
pub mod snake;
pub mod state;

pub use config::{Boundary, GameConfig};
pub use event::Event;
pub use food::{Food, Portals};
pub use mode::{GameOverReason, Mode, Reward};
pub use sim::{Simulation, Status};
pub use snake::Snake;
pub use state::{GameState, Pickups};
