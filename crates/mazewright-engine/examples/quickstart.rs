//! Mazewright Quickstart: a board, one observed search, and a race.
//!
//! Demonstrates:
//!   1. Building a solvable perfect maze from a `BoardConfig`
//!   2. Running A* under a `Runner` and watching its events
//!   3. Racing all six searches and reading the report
//!
//! Run with:
//!   cargo run --example quickstart

use std::thread;
use std::time::Duration;

use mazewright_core::{MazeAlgorithm, MazeMode, SearchAlgorithm};
use mazewright_engine::{Board, BoardConfig, PacingConfig, Race, RunEvent, Runner};

// ─── Board parameters ───────────────────────────────────────────

const SIZE: usize = 21;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ─── 1. Board ───────────────────────────────────────────────
    let config = BoardConfig {
        size: SIZE,
        mode: MazeMode::PerfectMaze,
        maze_algorithm: MazeAlgorithm::Wilsons,
        seed: Some(SEED),
        ..BoardConfig::default()
    };
    let board = Board::generate(&config)?;
    println!("{} maze, start {} end {}", config.maze_algorithm, board.start, board.end);
    println!("{}", board.grid.render());

    // ─── 2. One observed search ─────────────────────────────────
    // Events are consumed on a second thread while the run paces
    // itself on this one.
    let (tx, rx) = crossbeam_channel::unbounded();
    let pacing = PacingConfig {
        step_delay: Duration::from_millis(1),
        snapshot_every: 10,
        ..PacingConfig::default()
    };
    let runner = Runner::new(pacing)?.with_events(tx);
    let watcher = thread::spawn(move || {
        let mut snapshots = 0;
        for event in rx {
            match event {
                RunEvent::Step { .. } => snapshots += 1,
                RunEvent::Completed { steps, path, .. } => {
                    let len = path.map_or(0, |p| p.len());
                    println!("A* finished after {steps} steps, route of {len} cells");
                }
                other => println!("{other:?}"),
            }
        }
        snapshots
    });
    let report = runner.run_search(SearchAlgorithm::AStar, &board.grid, board.start, board.end)?;
    drop(runner);
    let snapshots = watcher.join().map_err(|_| "watcher thread panicked")?;
    println!(
        "{snapshots} snapshots, {} µs active",
        report.metrics.active_us()
    );
    println!("{}", report.lane.grid.render());

    // ─── 3. Race ────────────────────────────────────────────────
    let race = Race::new(PacingConfig::unpaced())?;
    let result = race.run(&board.grid, board.start, board.end, &SearchAlgorithm::ALL)?;
    for lane in &result.lanes {
        println!(
            "{:<18} {:>5} steps  route {:?}",
            lane.name,
            lane.steps,
            lane.path_len()
        );
    }
    if let Some(winner) = result.winner() {
        println!("winner: {}", winner.name);
    }
    println!("finish order: {:?}", result.finish_order().collect::<Vec<_>>());
    Ok(())
}
