use crate::terrain::TerrainKind;
use crate::Coordinate;
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Errors produced when reading a [TerrainGrid] from its ASCII map format.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("map contains no rows")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown terrain glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}

/// [TerrainGrid] stores a [TerrainKind] per cell in a [SimpleValueGrid] and keeps track of which
/// passable cells are connected using a [UnionFind] structure, so that a search towards an
/// unreachable goal can be rejected without exploring the grid.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    cells: SimpleValueGrid<TerrainKind>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TerrainGrid {
    /// Creates a `width` by `height` grid of [TerrainKind::Open] cells. Both extents must lie
    /// in `1..=i32::MAX`, the range addressable by the underlying storage.
    pub fn new(width: usize, height: usize) -> TerrainGrid {
        assert!(
            width > 0 && height > 0,
            "grid extent must be at least 1x1, got {width}x{height}"
        );
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid extent {width}x{height} exceeds the addressable range"
        );
        let mut grid = TerrainGrid {
            cells: SimpleValueGrid::new(width, height, TerrainKind::Open),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.height() && coord.col < self.width()
    }

    fn check_bounds(&self, coord: Coordinate) {
        assert!(
            self.in_bounds(coord),
            "{} is outside of the {}x{} grid",
            coord,
            self.width(),
            self.height()
        );
    }

    fn get_ix(&self, coord: Coordinate) -> usize {
        coord.row * self.width() + coord.col
    }

    pub fn kind_of(&self, coord: Coordinate) -> TerrainKind {
        self.check_bounds(coord);
        let p = Point::from(coord);
        self.cells.get(p.x, p.y)
    }

    /// Cost of entering `coord`, [None] if it holds an obstacle.
    pub fn cost_of(&self, coord: Coordinate) -> Option<u32> {
        self.kind_of(coord).cost()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart into multiple.
    pub fn set(&mut self, coord: Coordinate, kind: TerrainKind) {
        let previous = self.kind_of(coord);
        if previous.is_passable() && !kind.is_passable() {
            self.components_dirty = true;
        } else if kind.is_passable() {
            let ix = self.get_ix(coord);
            for n in self.neighbors(coord) {
                if self.kind_of(n).is_passable() {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        let p = Point::from(coord);
        self.cells.set(p.x, p.y, kind);
    }

    /// Overwrites every cell with `kind`.
    pub fn fill(&mut self, kind: TerrainKind) {
        for coord in self.coordinates().collect::<Vec<_>>() {
            let p = Point::from(coord);
            self.cells.set(p.x, p.y, kind);
        }
        self.generate_components();
    }

    /// All coordinates of the grid in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        iproduct!(0..self.height(), 0..self.width()).map(|(row, col)| Coordinate::new(row, col))
    }

    /// The in-bounds orthogonal neighbours of `coord`, always ordered east, south, west, north.
    pub fn neighbors(&self, coord: Coordinate) -> SmallVec<[Coordinate; 4]> {
        let mut neighbors = SmallVec::new();
        if coord.col + 1 < self.width() {
            neighbors.push(Coordinate::new(coord.row, coord.col + 1));
        }
        if coord.row + 1 < self.height() {
            neighbors.push(Coordinate::new(coord.row + 1, coord.col));
        }
        if coord.col > 0 {
            neighbors.push(Coordinate::new(coord.row, coord.col - 1));
        }
        if coord.row > 0 {
            neighbors.push(Coordinate::new(coord.row - 1, coord.col));
        }
        neighbors
    }

    /// The neighbours of `coord` that can be entered, paired with their entry cost.
    pub fn neighborhood_points_and_cost(
        &self,
        coord: Coordinate,
    ) -> SmallVec<[(Coordinate, u32); 4]> {
        self.neighbors(coord)
            .into_iter()
            .filter_map(|n| self.cost_of(n).map(|cost| (n, cost)))
            .collect()
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, coord: Coordinate) -> usize {
        self.check_bounds(coord);
        self.components.find(self.get_ix(coord))
    }

    /// Checks whether a path from `start` to `goal` can exist. The start cell is never entered,
    /// so it may hold any terrain; the goal must be passable and share a component with the
    /// start or with one of its passable neighbours. Only meaningful while the components are
    /// not dirty.
    pub fn reachable(&self, start: Coordinate, goal: Coordinate) -> bool {
        self.check_bounds(start);
        self.check_bounds(goal);
        if start == goal {
            return true;
        }
        if !self.kind_of(goal).is_passable() {
            return false;
        }
        let goal_ix = self.get_ix(goal);
        if self.kind_of(start).is_passable() {
            return self.components.equiv(self.get_ix(start), goal_ix);
        }
        self.neighbors(start).into_iter().any(|n| {
            self.kind_of(n).is_passable() && self.components.equiv(self.get_ix(n), goal_ix)
        })
    }

    /// Checks if no path from `start` to `goal` can exist.
    pub fn unreachable(&self, start: Coordinate, goal: Coordinate) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for coord in self.coordinates().collect::<Vec<_>>() {
            if !self.kind_of(coord).is_passable() {
                continue;
            }
            let parent_ix = self.get_ix(coord);
            // East and south suffice, the other two directions are covered from the neighbour
            let linked = [
                Coordinate::new(coord.row, coord.col + 1),
                Coordinate::new(coord.row + 1, coord.col),
            ]
            .into_iter()
            .filter(|&n| self.in_bounds(n) && self.kind_of(n).is_passable())
            .map(|n| self.get_ix(n))
            .collect::<SmallVec<[usize; 2]>>();
            for ix in linked {
                self.components.union(parent_ix, ix);
            }
        }
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| self.kind_of(Coordinate::new(row, col)).glyph())
                    .collect::<String>()
            })
            .join("\n");
        writeln!(f, "{}", rows)
    }
}

/// Reads the ASCII map format written by [Display](fmt::Display): one line per row, one glyph
/// per cell. Blank lines and surrounding whitespace are ignored.
impl FromStr for TerrainGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<TerrainGrid, ParseGridError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect::<Vec<char>>())
            .collect::<Vec<_>>();
        let width = rows.first().ok_or(ParseGridError::Empty)?.len();
        let mut grid = TerrainGrid::new(width, rows.len());
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != width {
                return Err(ParseGridError::RaggedRow {
                    row,
                    expected: width,
                    found: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                let kind = TerrainKind::from_glyph(glyph)
                    .ok_or(ParseGridError::UnknownGlyph { glyph, row, col })?;
                let p = Point::from(Coordinate::new(row, col));
                grid.cells.set(p.x, p.y, kind);
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}
