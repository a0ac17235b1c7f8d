//! A rectangular grid maze, the standard workout for the search algorithms.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::search::heuristics::Planar;

/// A position in the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MazeLocation {
    pub row: usize,
    pub col: usize,
}

impl MazeLocation {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Planar for MazeLocation {
    fn coordinates(&self) -> (f64, f64) {
        (self.row as f64, self.col as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Cell::Empty => ' ',
            Cell::Blocked => 'X',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Path => '*',
        };
        write!(f, "{}", glyph)
    }
}

/// A grid of cells with a start and a goal, where blocked cells cannot be
/// entered. Movement is 4-connected.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    cols: usize,
    pub start: MazeLocation,
    pub goal: MazeLocation,
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    /// Builds a maze by blocking each cell independently with probability
    /// `sparseness`. The start and goal cells are never blocked. Deterministic
    /// for a given RNG state, so a seeded RNG reproduces the same maze.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        sparseness: f64,
        start: MazeLocation,
        goal: MazeLocation,
        rng: &mut R,
    ) -> Self {
        let mut grid = vec![vec![Cell::Empty; cols]; rows];
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen::<f64>() < sparseness {
                    *cell = Cell::Blocked;
                }
            }
        }
        let mut maze = Self {
            rows,
            cols,
            start,
            goal,
            grid,
        };
        maze.grid[start.row][start.col] = Cell::Start;
        maze.grid[goal.row][goal.col] = Cell::Goal;
        maze
    }

    /// Builds a maze with an explicit list of blocked cells.
    pub fn with_blocked(
        rows: usize,
        cols: usize,
        start: MazeLocation,
        goal: MazeLocation,
        blocked: &[MazeLocation],
    ) -> Self {
        let mut grid = vec![vec![Cell::Empty; cols]; rows];
        for location in blocked {
            grid[location.row][location.col] = Cell::Blocked;
        }
        grid[start.row][start.col] = Cell::Start;
        grid[goal.row][goal.col] = Cell::Goal;
        Self {
            rows,
            cols,
            start,
            goal,
            grid,
        }
    }

    pub fn goal_reached(&self, location: &MazeLocation) -> bool {
        *location == self.goal
    }

    /// The unblocked 4-neighbours of `location`, in down, up, right, left
    /// order.
    pub fn successors(&self, location: &MazeLocation) -> Vec<MazeLocation> {
        let mut result = Vec::with_capacity(4);
        let MazeLocation { row, col } = *location;
        if row + 1 < self.rows && self.grid[row + 1][col] != Cell::Blocked {
            result.push(MazeLocation::new(row + 1, col));
        }
        if row > 0 && self.grid[row - 1][col] != Cell::Blocked {
            result.push(MazeLocation::new(row - 1, col));
        }
        if col + 1 < self.cols && self.grid[row][col + 1] != Cell::Blocked {
            result.push(MazeLocation::new(row, col + 1));
        }
        if col > 0 && self.grid[row][col - 1] != Cell::Blocked {
            result.push(MazeLocation::new(row, col - 1));
        }
        result
    }

    /// Marks a solution path on the grid for rendering. Start and goal keep
    /// their own glyphs.
    pub fn mark_path(&mut self, path: &[MazeLocation]) {
        for location in path {
            if *location != self.start && *location != self.goal {
                self.grid[location.row][location.col] = Cell::Path;
            }
        }
    }

    /// Removes a previously marked path.
    pub fn clear_path(&mut self) {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == Cell::Path {
                    *cell = Cell::Empty;
                }
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
