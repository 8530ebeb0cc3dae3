use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::validate::Validate;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Loads and saves one YAML-serialized, validated value at a fixed path.
/// A missing file yields the type's default rather than an error.
pub struct ConfigStore<TConfig> {
    path: PathBuf,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigStore<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _config: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<TConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let config: TConfig =
            serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;
        let content =
            serde_yaml_ng::to_string(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Pointer file tracking the most recently used config or map, one path per
/// file, as the game remembers selections across runs.
pub struct LastUsed {
    pointer: PathBuf,
}

impl LastUsed {
    pub fn new(pointer: PathBuf) -> Self {
        Self { pointer }
    }

    pub fn get(&self) -> Option<PathBuf> {
        let content = std::fs::read_to_string(&self.pointer).ok()?;
        let line = content.lines().next()?.trim();
        if line.is_empty() {
            None
        } else {
            Some(PathBuf::from(line))
        }
    }

    pub fn set(&self, target: &Path) -> Result<(), ConfigError> {
        std::fs::write(&self.pointer, format!("{}\n", target.display()))?;
        Ok(())
    }
}
