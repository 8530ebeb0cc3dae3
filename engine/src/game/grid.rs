use super::types::{Cell, Direction, EdgeWalls, Point};

/// Result of resolving one step through the grid. When `crossed_wall` is set
/// the point is the unwrapped candidate and must not be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub point: Point,
    pub crossed_wall: bool,
}

/// Interior cells live at `[1, width] x [1, height]`; the surrounding ring
/// (x = 0, x = width + 1, y = 0, y = height + 1) only ever renders walls and
/// never holds gameplay entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    walls: EdgeWalls,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize, walls: EdgeWalls) -> Self {
        let mut grid = Self {
            width,
            height,
            walls,
            cells: vec![Cell::Empty; (width + 2) * (height + 2)],
        };
        grid.paint_borders();
        grid
    }

    // Left and right first, then up and down, so that horizontal wall rows
    // overwrite the corner cells. Record files depend on this ordering.
    fn paint_borders(&mut self) {
        if self.walls.left {
            for y in 0..=self.height + 1 {
                self.set_cell(Point::new(0, y), Cell::WallVertical);
            }
        }
        if self.walls.right {
            for y in 0..=self.height + 1 {
                self.set_cell(Point::new(self.width + 1, y), Cell::WallVertical);
            }
        }
        if self.walls.up {
            for x in 0..=self.width + 1 {
                self.set_cell(Point::new(x, 0), Cell::WallHorizontal);
            }
        }
        if self.walls.down {
            for x in 0..=self.width + 1 {
                self.set_cell(Point::new(x, self.height + 1), Cell::WallHorizontal);
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn walls(&self) -> EdgeWalls {
        self.walls
    }

    fn index(&self, point: Point) -> usize {
        point.y * (self.width + 2) + point.x
    }

    pub fn cell(&self, point: Point) -> Cell {
        self.cells[self.index(point)]
    }

    pub fn set_cell(&mut self, point: Point, cell: Cell) {
        let index = self.index(point);
        self.cells[index] = cell;
    }

    pub fn has_empty_interior(&self) -> bool {
        for y in 1..=self.height {
            for x in 1..=self.width {
                if self.cell(Point::new(x, y)) == Cell::Empty {
                    return true;
                }
            }
        }
        false
    }

    /// Pure coordinate resolution: steps `from` one cell in `direction`,
    /// wrapping across open edges and flagging crossings of wall edges.
    /// `from` must be an interior point.
    pub fn resolve(&self, from: Point, direction: Direction) -> Step {
        let mut point = match direction {
            Direction::Up => Point::new(from.x, from.y - 1),
            Direction::Down => Point::new(from.x, from.y + 1),
            Direction::Left => Point::new(from.x - 1, from.y),
            Direction::Right => Point::new(from.x + 1, from.y),
        };

        if point.y == 0 {
            if self.walls.up {
                return Step {
                    point,
                    crossed_wall: true,
                };
            }
            point.y = self.height;
        }
        if point.y == self.height + 1 {
            if self.walls.down {
                return Step {
                    point,
                    crossed_wall: true,
                };
            }
            point.y = 1;
        }
        if point.x == 0 {
            if self.walls.left {
                return Step {
                    point,
                    crossed_wall: true,
                };
            }
            point.x = self.width;
        }
        if point.x == self.width + 1 {
            if self.walls.right {
                return Step {
                    point,
                    crossed_wall: true,
                };
            }
            point.x = 1;
        }

        Step {
            point,
            crossed_wall: false,
        }
    }

    /// Copies all rows, border ring included, for frame capture.
    pub fn snapshot_rows(&self) -> Vec<Vec<Cell>> {
        let stride = self.width + 2;
        (0..=self.height + 1)
            .map(|y| self.cells[y * stride..(y + 1) * stride].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_edges_wrap_to_exact_opposite() {
        let grid = Grid::new(10, 8, EdgeWalls::open());

        let step = grid.resolve(Point::new(4, 8), Direction::Down);
        assert_eq!(step, Step { point: Point::new(4, 1), crossed_wall: false });

        let step = grid.resolve(Point::new(4, 1), Direction::Up);
        assert_eq!(step, Step { point: Point::new(4, 8), crossed_wall: false });

        let step = grid.resolve(Point::new(1, 5), Direction::Left);
        assert_eq!(step, Step { point: Point::new(10, 5), crossed_wall: false });

        let step = grid.resolve(Point::new(10, 5), Direction::Right);
        assert_eq!(step, Step { point: Point::new(1, 5), crossed_wall: false });
    }

    #[test]
    fn test_wall_edges_report_crossing() {
        let grid = Grid::new(10, 8, EdgeWalls::solid());

        assert!(grid.resolve(Point::new(4, 1), Direction::Up).crossed_wall);
        assert!(grid.resolve(Point::new(4, 8), Direction::Down).crossed_wall);
        assert!(grid.resolve(Point::new(1, 5), Direction::Left).crossed_wall);
        assert!(grid.resolve(Point::new(10, 5), Direction::Right).crossed_wall);
    }

    #[test]
    fn test_interior_step_is_plain() {
        let grid = Grid::new(10, 8, EdgeWalls::solid());
        let step = grid.resolve(Point::new(5, 5), Direction::Right);
        assert_eq!(step, Step { point: Point::new(6, 5), crossed_wall: false });
    }

    #[test]
    fn test_mixed_edges_resolve_independently() {
        let walls = EdgeWalls {
            up: true,
            down: false,
            left: false,
            right: true,
        };
        let grid = Grid::new(10, 8, walls);

        assert!(grid.resolve(Point::new(4, 1), Direction::Up).crossed_wall);
        assert_eq!(
            grid.resolve(Point::new(4, 8), Direction::Down).point,
            Point::new(4, 1)
        );
        assert_eq!(
            grid.resolve(Point::new(1, 5), Direction::Left).point,
            Point::new(10, 5)
        );
        assert!(grid.resolve(Point::new(10, 5), Direction::Right).crossed_wall);
    }

    #[test]
    fn test_border_painting_and_corner_overwrite() {
        let grid = Grid::new(8, 8, EdgeWalls::solid());
        // Horizontal rows win the corners.
        assert_eq!(grid.cell(Point::new(0, 0)), Cell::WallHorizontal);
        assert_eq!(grid.cell(Point::new(9, 9)), Cell::WallHorizontal);
        assert_eq!(grid.cell(Point::new(0, 4)), Cell::WallVertical);
        assert_eq!(grid.cell(Point::new(9, 4)), Cell::WallVertical);
        assert_eq!(grid.cell(Point::new(4, 0)), Cell::WallHorizontal);
        assert_eq!(grid.cell(Point::new(4, 9)), Cell::WallHorizontal);

        let open = Grid::new(8, 8, EdgeWalls::open());
        assert_eq!(open.cell(Point::new(0, 4)), Cell::Empty);
        assert_eq!(open.cell(Point::new(4, 0)), Cell::Empty);
    }

    #[test]
    fn test_left_wall_only_keeps_its_corners() {
        let walls = EdgeWalls {
            up: false,
            down: false,
            left: true,
            right: false,
        };
        let grid = Grid::new(8, 8, walls);
        assert_eq!(grid.cell(Point::new(0, 0)), Cell::WallVertical);
        assert_eq!(grid.cell(Point::new(0, 9)), Cell::WallVertical);
        assert_eq!(grid.cell(Point::new(9, 0)), Cell::Empty);
    }

    #[test]
    fn test_has_empty_interior() {
        let mut grid = Grid::new(8, 8, EdgeWalls::solid());
        assert!(grid.has_empty_interior());
        for y in 1..=8 {
            for x in 1..=8 {
                grid.set_cell(Point::new(x, y), Cell::Obstacle);
            }
        }
        assert!(!grid.has_empty_interior());
    }
}
