mod food;
mod grid;
mod rng;
mod session;
mod snake;
mod state;
mod types;

pub use food::{Food, GameError, place_food};
pub use grid::{Grid, Step};
pub use rng::GameRng;
pub use session::{GameSession, GameView, InputSource, NullView, PlayerIntent};
pub use snake::{INITIAL_SNAKE_LENGTH, Snake};
pub use state::GameState;
pub use types::{Cell, Direction, EdgeWalls, EndReason, GamePhase, Point};
