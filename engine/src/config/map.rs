use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::game::{EdgeWalls, INITIAL_SNAKE_LENGTH, Point};

use super::validate::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    pub width: usize,
    pub height: usize,
    pub walls: EdgeWalls,
    /// Interior coordinates, `[1, width] x [1, height]`.
    #[serde(default)]
    pub obstacles: Vec<Point>,
}

impl MapDefinition {
    /// Where the snake starts: head at the map center, body extending left.
    pub fn spawn_cells(&self) -> Vec<Point> {
        let head = self.spawn_head();
        (0..INITIAL_SNAKE_LENGTH)
            .map(|i| Point::new(head.x - i, head.y))
            .collect()
    }

    pub fn spawn_head(&self) -> Point {
        Point::new(self.width / 2 + 1, self.height / 2 + 1)
    }
}

impl Default for MapDefinition {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            walls: EdgeWalls::solid(),
            obstacles: Vec::new(),
        }
    }
}

impl Validate for MapDefinition {
    fn validate(&self) -> Result<(), String> {
        if self.width < 8 || self.width > 20 {
            return Err("map width must be between 8 and 20".to_string());
        }
        if self.height < 8 || self.height > 20 {
            return Err("map height must be between 8 and 20".to_string());
        }

        let mut seen = HashSet::new();
        let spawn: HashSet<Point> = self.spawn_cells().into_iter().collect();
        for &p in &self.obstacles {
            if p.x < 1 || p.x > self.width || p.y < 1 || p.y > self.height {
                return Err(format!(
                    "obstacle ({}, {}) is outside the map interior",
                    p.x, p.y
                ));
            }
            if !seen.insert(p) {
                return Err(format!("duplicate obstacle at ({}, {})", p.x, p.y));
            }
            if spawn.contains(&p) {
                return Err(format!(
                    "obstacle ({}, {}) blocks the snake spawn area",
                    p.x, p.y
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_is_valid() {
        assert!(MapDefinition::default().validate().is_ok());
    }

    #[test]
    fn test_dimension_ranges() {
        let mut map = MapDefinition::default();
        map.width = 7;
        assert!(map.validate().is_err());
        map.width = 21;
        assert!(map.validate().is_err());
        map.width = 20;
        assert!(map.validate().is_ok());
        map.height = 7;
        assert!(map.validate().is_err());
    }

    #[test]
    fn test_obstacles_must_be_interior() {
        let mut map = MapDefinition::default();
        map.obstacles = vec![Point::new(0, 5)];
        assert!(map.validate().is_err());
        map.obstacles = vec![Point::new(16, 5)];
        assert!(map.validate().is_err());
        map.obstacles = vec![Point::new(15, 15)];
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_duplicate_obstacles_rejected() {
        let mut map = MapDefinition::default();
        map.obstacles = vec![Point::new(3, 3), Point::new(3, 3)];
        assert!(map.validate().is_err());
    }

    #[test]
    fn test_obstacle_on_spawn_rejected() {
        let mut map = MapDefinition::default();
        // 15x15 spawns the head at (8, 8) with the body back through (5, 8).
        map.obstacles = vec![Point::new(6, 8)];
        assert!(map.validate().is_err());
        map.obstacles = vec![Point::new(6, 9)];
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_spawn_cells() {
        let map = MapDefinition::default();
        assert_eq!(
            map.spawn_cells(),
            vec![
                Point::new(8, 8),
                Point::new(7, 8),
                Point::new(6, 8),
                Point::new(5, 8),
            ]
        );
    }
}
