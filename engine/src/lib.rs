pub mod config;
pub mod game;
pub mod logger;
pub mod record;

pub use config::{ConfigError, ConfigStore, GameConfig, LastUsed, MapDefinition, Validate};
pub use game::{
    Cell, Direction, EdgeWalls, EndReason, Food, GameError, GamePhase, GameRng, GameSession,
    GameState, GameView, Grid, INITIAL_SNAKE_LENGTH, InputSource, NullView, PlayerIntent, Point,
    Snake, Step,
};
pub use record::{
    Frame, FrameRecorder, RECORD_FILE_EXTENSION, RecordError, RecordLog, RecordPlayer,
};
