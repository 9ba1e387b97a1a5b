//! Criterion micro-benchmarks for maze generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazewright_core::{Coord, MazeAlgorithm};
use mazewright_grid::Grid;
use mazewright_maze::{carve_maze, generate_perfect_maze, DensityMaze, PerfectMaze};
use mazewright_process::Process;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZE: usize = 49;

/// Benchmark: bare lattice carving, no pipeline around it.
fn bench_carvers(c: &mut Criterion) {
    for algorithm in MazeAlgorithm::ALL {
        c.bench_function(&format!("carve49_{}", algorithm.name()), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let mut grid = Grid::new(SIZE).unwrap();
                grid.fill(mazewright_core::CellKind::Wall);
                black_box(carve_maze(algorithm, &mut grid, Coord::new(1, 1), &mut rng));
            });
        });
    }
}

/// Benchmark: full perfect-maze pipeline, batch against stepwise.
fn bench_pipeline(c: &mut Criterion) {
    let (start, end) = (Coord::new(1, 1), Coord::new(47, 47));
    c.bench_function("perfect49_batch", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            let mut grid = Grid::new(SIZE).unwrap();
            generate_perfect_maze(&mut grid, MazeAlgorithm::Prims, start, end, &mut rng).unwrap();
            black_box(grid);
        });
    });
    c.bench_function("perfect49_stepwise", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let grid = Grid::new(SIZE).unwrap();
            let mut maze = PerfectMaze::seeded(grid, MazeAlgorithm::Prims, start, end, seed).unwrap();
            black_box(maze.run_to_end().unwrap());
        });
    });
}

/// Benchmark: density maze at the default and the densest setting.
fn bench_density(c: &mut Criterion) {
    let (start, end) = (Coord::new(1, 1), Coord::new(23, 23));
    for density in [0.3, 0.9] {
        c.bench_function(&format!("density25_{density}"), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let maze = DensityMaze::new(density).endpoints(start, end);
            b.iter(|| {
                let mut grid = Grid::new(25).unwrap();
                black_box(maze.generate(&mut grid, &mut rng));
            });
        });
    }
}

criterion_group!(benches, bench_carvers, bench_pipeline, bench_density);
criterion_main!(benches);
