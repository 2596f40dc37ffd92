//! # terrain_pathfinding
//!
//! Pathfinding over a weighted terrain grid. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with 4-directional movement and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Cells are
//! [Open](TerrainKind::Open), [Grassland](TerrainKind::Grassland) or
//! [Swampland](TerrainKind::Swampland), each with its own entry cost, or an impassable
//! [Obstacle](TerrainKind::Obstacle). Maintains
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of passable
//! cells to avoid flood-filling the grid when no path exists.
//!
//! Around the search sit the pieces of the small path-finding game it was written for: a
//! headless [GridEditor](editor::GridEditor) modelling the tool bar and cell clicks, and a
//! [Playback](playback::Playback) that turns a path into timed key frames for a moving token.
mod astar_search;
pub mod editor;
pub mod playback;
pub mod solver;
pub mod terrain;
pub mod terrain_grid;

use core::fmt;
use grid_util::point::Point;
use std::time::Duration;

pub use editor::{ClickOutcome, GridEditor, Tool};
pub use playback::Playback;
pub use solver::{
    find_path, find_path_with_cost, path_cost, AstarSolver, DijkstraSolver, GridSolver,
};
pub use terrain::TerrainKind;
pub use terrain_grid::{ParseGridError, TerrainGrid};

/// Side length of the square board used by the game.
pub const DEFAULT_GRID_SIZE: usize = 16;
/// Time the token spends on each cell of a path during playback.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(500);

/// A cell position on a [TerrainGrid], given as row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Coordinate {
        Coordinate::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`. Panics if either does not fit in an `i32`.
impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Point {
        let x = i32::try_from(coord.col).expect("column does not fit in a grid point");
        let y = i32::try_from(coord.row).expect("row does not fit in a grid point");
        Point::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
