use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use terrain_pathfinding::{
    AstarSolver, Coordinate, DijkstraSolver, GridSolver, TerrainGrid, TerrainKind,
};

fn random_grid(n: usize, rng: &mut StdRng) -> TerrainGrid {
    let mut grid = TerrainGrid::new(n, n);
    for coord in grid.coordinates().collect::<Vec<_>>() {
        let kind = match rng.gen_range(0..10) {
            0..=1 => TerrainKind::Obstacle,
            2..=3 => TerrainKind::Grassland,
            4 => TerrainKind::Swampland,
            _ => TerrainKind::Open,
        };
        grid.set(coord, kind);
    }
    grid.generate_components();
    grid
}

fn random_scenarios(
    grid: &TerrainGrid,
    count: usize,
    rng: &mut StdRng,
) -> Vec<(Coordinate, Coordinate)> {
    let mut random_coordinate =
        || Coordinate::new(rng.gen_range(0..grid.height()), rng.gen_range(0..grid.width()));
    (0..count)
        .map(|_| (random_coordinate(), random_coordinate()))
        .collect()
}

fn bench_solver<S: GridSolver>(
    c: &mut Criterion,
    name: &str,
    solver: &S,
    grid: &TerrainGrid,
    scenarios: &[(Coordinate, Coordinate)],
) {
    c.bench_function(name, |b| {
        b.iter(|| {
            for (start, end) in scenarios {
                black_box(solver.find_path(grid, *start, *end));
            }
        })
    });
}

fn terrain_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [16, 64] {
        let grid = random_grid(n, &mut rng);
        let scenarios = random_scenarios(&grid, 100, &mut rng);
        bench_solver(c, &format!("{n}x{n}, A*"), &AstarSolver::new(), &grid, &scenarios);
        bench_solver(c, &format!("{n}x{n}, Dijkstra"), &DijkstraSolver, &grid, &scenarios);
    }
}

criterion_group!(benches, terrain_bench);
criterion_main!(benches);
