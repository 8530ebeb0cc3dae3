use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::validate::Validate;

const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// 1-10; the snake advances one cell every `1000 / difficulty` ms.
    pub difficulty: u32,
    /// Negative (conventionally -1) means "seed from the current time".
    pub random_seed: i64,
    pub food_count: usize,
    /// Probabilities of a new food being worth 1, 2 and 3 points.
    pub food_probabilities: [f64; 3],
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.difficulty))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: 1,
            random_seed: -1,
            food_count: 1,
            food_probabilities: [0.6, 0.3, 0.1],
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.difficulty < 1 || self.difficulty > 10 {
            return Err("difficulty must be between 1 and 10".to_string());
        }
        if self.food_count < 1 || self.food_count > 5 {
            return Err("food count must be between 1 and 5".to_string());
        }
        for p in self.food_probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err("food probabilities must be between 0.0 and 1.0".to_string());
            }
        }
        let sum: f64 = self.food_probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err("food probabilities must sum to 1.0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_difficulty_range() {
        let mut config = GameConfig::default();
        config.difficulty = 0;
        assert!(config.validate().is_err());
        config.difficulty = 11;
        assert!(config.validate().is_err());
        config.difficulty = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_food_count_range() {
        let mut config = GameConfig::default();
        config.food_count = 0;
        assert!(config.validate().is_err());
        config.food_count = 6;
        assert!(config.validate().is_err());
        config.food_count = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_probabilities_must_sum_to_one() {
        let mut config = GameConfig::default();
        config.food_probabilities = [0.5, 0.3, 0.1];
        assert!(config.validate().is_err());
        config.food_probabilities = [0.1, 0.3, 0.6];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_probabilities_must_be_in_unit_interval() {
        let mut config = GameConfig::default();
        config.food_probabilities = [1.5, -0.3, -0.2];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_interval_follows_difficulty() {
        let mut config = GameConfig::default();
        config.difficulty = 4;
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }
}
