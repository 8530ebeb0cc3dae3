use serde::{Deserialize, Serialize};

use snake_engine::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
    pub time: String,
    pub config_path: String,
    pub map_path: String,
}

impl LeaderboardEntry {
    /// Stamps a fresh entry with the local date and time.
    pub fn now(name: String, score: u32, config_path: String, map_path: String) -> Self {
        let now = chrono::Local::now();
        Self {
            name,
            score,
            date: now.format("%Y/%m/%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            config_path,
            map_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn add(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        self.sort();
    }

    /// Best score first; entries with equal scores keep insertion order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

impl Validate for Leaderboard {
    fn validate(&self) -> Result<(), String> {
        for entry in &self.entries {
            if entry.name.is_empty() {
                return Err("leaderboard entry with an empty name".to_string());
            }
        }
        Ok(())
    }
}
