use crate::{solver::GridSolver, Coordinate};

/// A* with the Manhattan distance as heuristic. Every step costs at least 1 and moves are
/// orthogonal, so the estimate never exceeds the real cost and the first path found is optimal.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> u32 {
        p1.manhattan_distance(p2) as u32
    }
}
