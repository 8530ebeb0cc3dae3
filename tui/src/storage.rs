use std::path::{Path, PathBuf};

use snake_engine::record::RECORD_FILE_EXTENSION;
use snake_engine::{ConfigError, ConfigStore, GameConfig, LastUsed, MapDefinition};

use crate::leaderboard::Leaderboard;

/// File layout under the data directory: `config/`, `map/` and `record/`
/// subdirectories plus the leaderboard, mirroring how the game has always
/// organized its files on disk.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ensure_layout(&self) -> std::io::Result<()> {
        for dir in ["config", "map", "record", "leaderboard"] {
            std::fs::create_dir_all(self.root.join(dir))?;
        }
        Ok(())
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("snake_tui.log")
    }

    pub fn config_store(&self, name: &str) -> ConfigStore<GameConfig> {
        ConfigStore::new(self.root.join("config").join(format!("{}.yaml", name)))
    }

    pub fn map_store(&self, name: &str) -> ConfigStore<MapDefinition> {
        ConfigStore::new(self.root.join("map").join(format!("{}.yaml", name)))
    }

    pub fn leaderboard_store(&self) -> ConfigStore<Leaderboard> {
        ConfigStore::new(self.root.join("leaderboard").join("leaderboard.yaml"))
    }

    pub fn last_config(&self) -> LastUsed {
        LastUsed::new(self.root.join("config").join("last"))
    }

    pub fn last_map(&self) -> LastUsed {
        LastUsed::new(self.root.join("map").join("last"))
    }

    pub fn record_dir(&self) -> PathBuf {
        self.root.join("record")
    }

    /// Record names may be given with or without the `.rec` extension.
    pub fn record_path(&self, name: &str) -> PathBuf {
        let has_extension = Path::new(name)
            .extension()
            .is_some_and(|ext| ext == RECORD_FILE_EXTENSION);
        if has_extension {
            self.record_dir().join(name)
        } else {
            self.record_dir()
                .join(format!("{}.{}", name, RECORD_FILE_EXTENSION))
        }
    }

    /// Writes the default config and map on first start and points the
    /// last-used markers at them, so a fresh directory is playable.
    pub fn ensure_defaults(&self) -> Result<(), ConfigError> {
        let default_config = self.config_store("default");
        if !default_config.exists() {
            default_config.save(&GameConfig::default())?;
        }
        let default_map = self.map_store("default");
        if !default_map.exists() {
            default_map.save(&MapDefinition::default())?;
        }

        let last_config = self.last_config();
        if last_config.get().is_none() {
            last_config.set(default_config.path())?;
        }
        let last_map = self.last_map();
        if last_map.get().is_none() {
            last_map.set(default_map.path())?;
        }
        Ok(())
    }

    pub fn active_config(&self) -> Result<(PathBuf, GameConfig), ConfigError> {
        let path = self
            .last_config()
            .get()
            .unwrap_or_else(|| self.config_store("default").path().to_path_buf());
        let store: ConfigStore<GameConfig> = ConfigStore::new(path.clone());
        let config = store.load()?;
        Ok((path, config))
    }

    pub fn active_map(&self) -> Result<(PathBuf, MapDefinition), ConfigError> {
        let path = self
            .last_map()
            .get()
            .unwrap_or_else(|| self.map_store("default").path().to_path_buf());
        let store: ConfigStore<MapDefinition> = ConfigStore::new(path.clone());
        let map = store.load()?;
        Ok((path, map))
    }
}
