use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeWalls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeWalls {
    pub fn solid() -> Self {
        Self {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }

    pub fn open() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }
}

/// One cell of the playing field, including the border ring. The character
/// encoding is the durable on-disk representation of record files and must
/// not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    SnakeHead,
    SnakeBody,
    Food(u8),
    Obstacle,
    WallHorizontal,
    WallVertical,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::SnakeHead => '#',
            Cell::SnakeBody => '*',
            Cell::Food(1) => '1',
            Cell::Food(2) => '2',
            Cell::Food(_) => '3',
            Cell::Obstacle => 'O',
            Cell::WallHorizontal => '-',
            Cell::WallVertical => '|',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Empty),
            '#' => Some(Cell::SnakeHead),
            '*' => Some(Cell::SnakeBody),
            '1' => Some(Cell::Food(1)),
            '2' => Some(Cell::Food(2)),
            '3' => Some(Cell::Food(3)),
            'O' => Some(Cell::Obstacle),
            '-' => Some(Cell::WallHorizontal),
            '|' => Some(Cell::WallVertical),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    ObstacleCollision,
    Quit,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::WallCollision => "wall collision",
            EndReason::SelfCollision => "self collision",
            EndReason::ObstacleCollision => "obstacle collision",
            EndReason::Quit => "player quit",
        };
        write!(f, "{}", text)
    }
}
