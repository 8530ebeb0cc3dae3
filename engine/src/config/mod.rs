mod game_config;
mod map;
mod store;
mod validate;

pub use game_config::GameConfig;
pub use map::MapDefinition;
pub use store::{ConfigError, ConfigStore, LastUsed};
pub use validate::Validate;
