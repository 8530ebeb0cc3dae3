use crate::config::{GameConfig, MapDefinition};
use crate::log;

use super::food::{self, Food, GameError};
use super::grid::Grid;
use super::rng::GameRng;
use super::snake::{INITIAL_SNAKE_LENGTH, Snake};
use super::types::{Cell, Direction, EndReason, GamePhase, Point};

/// Authoritative state of one game. Mutated exactly once per tick by
/// `update`; everything else only reads.
pub struct GameState {
    snake: Snake,
    grid: Grid,
    foods: Vec<Food>,
    obstacles: Vec<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    phase: GamePhase,
    end_reason: Option<EndReason>,
    food_probabilities: [f64; 3],
}

impl GameState {
    pub fn new(
        config: &GameConfig,
        map: &MapDefinition,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        let mut grid = Grid::new(map.width, map.height, map.walls);

        let snake = Snake::new(map.spawn_head(), INITIAL_SNAKE_LENGTH);
        grid.set_cell(snake.head(), Cell::SnakeHead);
        for &segment in snake.segments().skip(1) {
            grid.set_cell(segment, Cell::SnakeBody);
        }

        for &obstacle in &map.obstacles {
            grid.set_cell(obstacle, Cell::Obstacle);
        }

        let mut state = Self {
            snake,
            grid,
            foods: Vec::with_capacity(config.food_count),
            obstacles: map.obstacles.clone(),
            direction: Direction::Right,
            pending_direction: None,
            score: 0,
            phase: GamePhase::Running,
            end_reason: None,
            food_probabilities: config.food_probabilities,
        };

        for _ in 0..config.food_count {
            let food = food::place_food(&state.grid, state.food_probabilities, rng)?;
            state.grid.set_cell(food.pos, Cell::Food(food.value));
            state.foods.push(food);
        }

        Ok(state)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Requests a direction change for the next tick. The latest accepted
    /// request wins; an exact reversal of the current direction is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase == GamePhase::Running && !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
        }
    }

    pub fn quit(&mut self) {
        if self.phase != GamePhase::Over {
            self.end(EndReason::Quit);
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.phase = GamePhase::Over;
        self.end_reason = Some(reason);
        log!("game over: {} (score {})", reason, self.score);
    }

    /// One simulation tick. Fatal conditions flip the phase to `Over` and
    /// leave the grid untouched for that step.
    pub fn update(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        if self.phase != GamePhase::Running {
            return Ok(());
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let step = self.grid.resolve(self.snake.head(), self.direction);
        if step.crossed_wall {
            self.end(EndReason::WallCollision);
            return Ok(());
        }

        let candidate = step.point;
        if self.snake.hits_body_excluding_tail(candidate) {
            self.end(EndReason::SelfCollision);
            return Ok(());
        }
        if self.obstacles.contains(&candidate) {
            self.end(EndReason::ObstacleCollision);
            return Ok(());
        }

        let eaten_slot = self.foods.iter().position(|f| f.pos == candidate);

        let freed_tail = self.snake.advance(candidate);
        self.grid.set_cell(freed_tail, Cell::Empty);
        self.grid.set_cell(candidate, Cell::SnakeHead);
        if let Some(&neck) = self.snake.segments().nth(1) {
            self.grid.set_cell(neck, Cell::SnakeBody);
        }

        if let Some(slot) = eaten_slot {
            let value = self.foods[slot].value;
            self.score += u32::from(value);
            self.snake.grow_back(freed_tail);
            self.grid.set_cell(freed_tail, Cell::SnakeBody);
            log!(
                "ate food worth {} at ({}, {}), score {}",
                value,
                candidate.x,
                candidate.y,
                self.score
            );

            let replacement = food::place_food(&self.grid, self.food_probabilities, rng)?;
            self.grid.set_cell(replacement.pos, Cell::Food(replacement.value));
            self.foods[slot] = replacement;
        }

        Ok(())
    }
}
