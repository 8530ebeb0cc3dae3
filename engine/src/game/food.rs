use crate::log;

use super::grid::Grid;
use super::rng::GameRng;
use super::types::{Cell, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub pos: Point,
    pub value: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Every interior cell is occupied; no legal food placement exists.
    AllocationExhausted,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::AllocationExhausted => {
                write!(f, "no empty cell left to place food on")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Picks an empty interior cell by rejection sampling and assigns a point
/// value from the cumulative probability thresholds: r < p1 gives 1,
/// r < p1 + p2 gives 2, anything else 3. The draw order (position first,
/// then value) is part of the seeded-determinism contract.
pub fn place_food(
    grid: &Grid,
    probabilities: [f64; 3],
    rng: &mut GameRng,
) -> Result<Food, GameError> {
    if !grid.has_empty_interior() {
        return Err(GameError::AllocationExhausted);
    }

    let pos = loop {
        let x = rng.random_range(1..=grid.width());
        let y = rng.random_range(1..=grid.height());
        let candidate = Point::new(x, y);
        if grid.cell(candidate) == Cell::Empty {
            break candidate;
        }
    };

    let r: f64 = rng.random();
    let value = if r < probabilities[0] {
        1
    } else if r < probabilities[0] + probabilities[1] {
        2
    } else {
        3
    };

    log!("food worth {} placed at ({}, {})", value, pos.x, pos.y);
    Ok(Food { pos, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::EdgeWalls;

    #[test]
    fn test_placement_lands_on_empty_interior_cell() {
        let mut grid = Grid::new(8, 8, EdgeWalls::solid());
        // Leave a single free cell.
        for y in 1..=8 {
            for x in 1..=8 {
                if (x, y) != (3, 7) {
                    grid.set_cell(Point::new(x, y), Cell::Obstacle);
                }
            }
        }
        let mut rng = GameRng::new(7);
        let food = place_food(&grid, [0.6, 0.3, 0.1], &mut rng).unwrap();
        assert_eq!(food.pos, Point::new(3, 7));
        assert!((1..=3).contains(&food.value));
    }

    #[test]
    fn test_full_interior_is_exhausted() {
        let mut grid = Grid::new(8, 8, EdgeWalls::solid());
        for y in 1..=8 {
            for x in 1..=8 {
                grid.set_cell(Point::new(x, y), Cell::Obstacle);
            }
        }
        let mut rng = GameRng::new(7);
        let result = place_food(&grid, [0.6, 0.3, 0.1], &mut rng);
        assert_eq!(result, Err(GameError::AllocationExhausted));
    }

    #[test]
    fn test_value_thresholds_are_closed_open() {
        // With p1 = 1.0 every draw r in [0, 1) satisfies r < p1.
        let grid = Grid::new(8, 8, EdgeWalls::solid());
        let mut rng = GameRng::new(99);
        for _ in 0..50 {
            let food = place_food(&grid, [1.0, 0.0, 0.0], &mut rng).unwrap();
            assert_eq!(food.value, 1);
        }

        // With p1 = 0 and p2 = 0 everything falls through to 3.
        let mut rng = GameRng::new(99);
        for _ in 0..50 {
            let food = place_food(&grid, [0.0, 0.0, 1.0], &mut rng).unwrap();
            assert_eq!(food.value, 3);
        }
    }

    #[test]
    fn test_same_seed_places_identically() {
        let grid = Grid::new(12, 9, EdgeWalls::solid());
        let mut a = GameRng::new(2024);
        let mut b = GameRng::new(2024);
        for _ in 0..20 {
            let fa = place_food(&grid, [0.6, 0.3, 0.1], &mut a).unwrap();
            let fb = place_food(&grid, [0.6, 0.3, 0.1], &mut b).unwrap();
            assert_eq!(fa, fb);
        }
    }
}
