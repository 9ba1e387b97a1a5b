//! Integration tests for the grid's public surface: endpoint placement,
//! wall generation, and reachability working together.

use mazewright_core::{CellKind, Coord};
use mazewright_grid::{Corner, Grid};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn in_corner_region(grid: &Grid, c: Coord) -> bool {
    Corner::ALL.iter().any(|&k| grid.corner_cells(k).contains(&c))
}

#[test]
fn endpoints_on_open_grid_are_always_connected() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for size in 5..=20 {
        let grid = Grid::new(size).unwrap();
        let (start, end) = grid.random_start_end(&mut rng).unwrap();
        assert!(grid.is_solvable(start, end));
    }
}

#[test]
fn full_density_walls_disconnect_endpoints() {
    let mut grid = Grid::new(9).unwrap();
    let start = Coord::new(1, 1);
    let end = Coord::new(7, 7);
    grid.stamp_endpoints(start, end);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    grid.generate_walls(1.0, &mut rng);
    assert!(!grid.is_solvable(start, end));
    assert_eq!(grid.count(CellKind::Wall), 79);
}

proptest! {
    #[test]
    fn random_endpoints_distinct_and_cornered(seed in any::<u64>(), size in 4usize..=50) {
        let grid = Grid::new(size).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (start, end) = grid.random_start_end(&mut rng).unwrap();
        prop_assert_ne!(start, end);
        prop_assert!(grid.is_interior(start) && grid.is_interior(end));
        prop_assert!(in_corner_region(&grid, start));
        prop_assert!(in_corner_region(&grid, end));
    }

    #[test]
    fn wall_density_is_roughly_honoured(seed in any::<u64>()) {
        let mut grid = Grid::new(40).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        grid.generate_walls(0.3, &mut rng);
        let ratio = grid.count(CellKind::Wall) as f64 / grid.cell_count() as f64;
        prop_assert!((0.2..0.4).contains(&ratio), "ratio {ratio}");
    }
}
