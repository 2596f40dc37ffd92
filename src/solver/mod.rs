use crate::{astar_search::astar, terrain_grid::TerrainGrid, Coordinate};
use itertools::Itertools;
use log::{info, warn};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

pub use astar::AstarSolver;
pub use dijkstra::DijkstraSolver;

/// Total cost of walking `path`: the entry cost of every cell after the first. [None] if the
/// path is empty, leaves the grid, makes a move that is not a single orthogonal step or enters
/// an obstacle.
pub fn path_cost(grid: &TerrainGrid, path: &[Coordinate]) -> Option<u32> {
    let first = path.first()?;
    if !grid.in_bounds(*first) {
        return None;
    }
    path.iter().tuple_windows().try_fold(0, |total, (a, b)| {
        if !a.is_adjacent(b) || !grid.in_bounds(*b) {
            return None;
        }
        grid.cost_of(*b).map(|cost| total + cost)
    })
}

/// Computes a minimum-cost path from `start` to `goal` with [AstarSolver]. An empty path means
/// the goal cannot be reached.
pub fn find_path(grid: &TerrainGrid, start: Coordinate, goal: Coordinate) -> Vec<Coordinate> {
    AstarSolver::new().find_path(grid, start, goal)
}

/// Like [find_path], also returning the cost of the path.
pub fn find_path_with_cost(
    grid: &TerrainGrid,
    start: Coordinate,
    goal: Coordinate,
) -> Option<(Vec<Coordinate>, u32)> {
    AstarSolver::new().find_path_with_cost(grid, start, goal)
}

pub trait GridSolver {
    /// Estimate of the cost from `p1` to `p2`. Must never exceed the real cost for the found
    /// paths to be optimal.
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> u32;

    fn successors(
        &self,
        grid: &TerrainGrid,
        node: &Coordinate,
    ) -> SmallVec<[(Coordinate, u32); 4]> {
        grid.neighborhood_points_and_cost(*node)
    }

    fn get_path_cost(&self, grid: &TerrainGrid, path: &[Coordinate]) -> Option<u32> {
        path_cost(grid, path)
    }

    /// Computes a path and its cost. Only cells entered by a move are required to be passable,
    /// so `start` may hold any terrain. Panics if `start` or `goal` lies outside of the grid.
    fn find_path_with_cost(
        &self,
        grid: &TerrainGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<(Vec<Coordinate>, u32)> {
        for endpoint in [start, goal] {
            assert!(
                grid.in_bounds(endpoint),
                "{} is outside of the {}x{} grid",
                endpoint,
                grid.width(),
                grid.height()
            );
        }
        let components_valid = !grid.components_dirty;
        // Check if start and goal are on the same connected component.
        if components_valid && grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        let result = astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        if result.is_none() {
            if components_valid {
                warn!("Reachable goal could not be pathed to, is the component structure correct?");
            } else {
                info!("{} is not reachable from {}", goal, start);
            }
        }
        result
    }

    /// Computes a path from `start` to `goal`, both included. Returns an empty path if no path
    /// exists.
    fn find_path(
        &self,
        grid: &TerrainGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Vec<Coordinate> {
        self.find_path_with_cost(grid, start, goal)
            .map(|(path, _cost)| path)
            .unwrap_or_default()
    }
}
