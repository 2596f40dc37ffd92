use crate::{solver::GridSolver, Coordinate};

/// Uniform-cost search. Expands more nodes than [AstarSolver](crate::AstarSolver) but needs no
/// estimate, which makes it a reference for optimal path costs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstarSolver, TerrainGrid};

    #[test]
    fn agrees_with_astar() {
        let grid: TerrainGrid = "
            ..g..
            #sgs.
            ..#..
            .ss#.
            ....."
            .parse()
            .unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(4, 4);
        let (_, dijkstra_cost) = DijkstraSolver.find_path_with_cost(&grid, start, goal).unwrap();
        let (_, astar_cost) = AstarSolver::new().find_path_with_cost(&grid, start, goal).unwrap();
        assert_eq!(dijkstra_cost, astar_cost);
    }
}
