//! Side-by-side maze generation.

use crossbeam_channel::Sender;
use mazewright_core::{Coord, MazeAlgorithm};
use mazewright_grid::Grid;
use mazewright_maze::PerfectMaze;
use mazewright_process::Process;
use rand::Rng;

use crate::config::{check_size, ConfigError, PacingConfig};
use crate::control::RunControl;
use crate::event::RunEvent;
use crate::lane::{Lane, LaneReport, Outcome, Scheduler};
use crate::metrics::RunMetrics;

/// Result of a [`MazeRace`].
#[derive(Clone, Debug)]
pub struct MazeRaceReport {
    /// Start shared by all three mazes.
    pub start: Coord,
    /// End shared by all three mazes.
    pub end: Coord,
    /// One lane per generator, in [`MazeAlgorithm::ALL`] order.
    pub mazes: Vec<LaneReport>,
    /// Counters for the whole race.
    pub metrics: RunMetrics,
}

impl MazeRaceReport {
    /// The finished maze built by `algorithm`.
    pub fn maze(&self, algorithm: MazeAlgorithm) -> Option<&Grid> {
        self.mazes
            .iter()
            .find(|l| l.name == algorithm.name())
            .map(|l| &l.grid)
    }

    /// Whether every generator completed with a solvable maze.
    pub fn all_solvable(&self) -> bool {
        self.mazes
            .iter()
            .all(|l| l.outcome == Outcome::Completed && l.grid.is_solvable(self.start, self.end))
    }
}

/// Builds one maze with each generator on equal-sized blank grids,
/// interleaved one step each per round.
///
/// All three share one randomly placed start/end pair. Snapshots are
/// published every [`MAZE_SNAPSHOT_EVERY`](crate::MAZE_SNAPSHOT_EVERY)
/// steps by default.
#[derive(Debug)]
pub struct MazeRace {
    pacing: PacingConfig,
    control: RunControl,
    events: Option<Sender<RunEvent>>,
}

impl Default for MazeRace {
    fn default() -> Self {
        Self {
            pacing: PacingConfig::maze_race(),
            control: RunControl::new(),
            events: None,
        }
    }
}

impl MazeRace {
    /// A race with custom pacing.
    pub fn new(pacing: PacingConfig) -> Result<Self, ConfigError> {
        pacing.validate()?;
        Ok(Self {
            pacing,
            ..Self::default()
        })
    }

    /// Share an existing control instead of a private one.
    pub fn with_control(mut self, control: RunControl) -> Self {
        self.control = control;
        self
    }

    /// Publish events into `tx`.
    pub fn with_events(mut self, tx: Sender<RunEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// The control steering this race.
    pub fn control(&self) -> &RunControl {
        &self.control
    }

    /// Generate three `size × size` mazes. Endpoints and each
    /// generator's seed are drawn from `rng`.
    pub fn run<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<MazeRaceReport, ConfigError> {
        check_size(size)?;
        let (start, end) = Grid::new(size)?.random_start_end(rng).ok_or(
            ConfigError::GridSizeOutOfRange {
                size,
                min: crate::MIN_GRID_SIZE,
                max: crate::MAX_GRID_SIZE,
            },
        )?;

        let mut lanes = Vec::with_capacity(MazeAlgorithm::ALL.len());
        for (i, algorithm) in MazeAlgorithm::ALL.into_iter().enumerate() {
            let seed: u64 = rng.random();
            let maze = PerfectMaze::seeded(Grid::new(size)?, algorithm, start, end, seed)?;
            let process: Box<dyn Process> = Box::new(maze);
            lanes.push(Lane::new(i, process));
        }

        let metrics = Scheduler::new(&self.pacing, &self.control, self.events.clone())
            .run(&mut lanes, |_, _| {});
        Ok(MazeRaceReport {
            start,
            end,
            mazes: lanes.into_iter().map(Lane::into_report).collect(),
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::CellKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn unpaced() -> MazeRace {
        MazeRace::new(PacingConfig {
            snapshot_every: 3,
            ..PacingConfig::unpaced()
        })
        .unwrap()
    }

    #[test]
    fn default_pacing_snapshots_every_third_step() {
        let race = MazeRace::default();
        assert_eq!(race.pacing.snapshot_every, 3);
    }

    #[test]
    fn size_checked() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            unpaced().run(4, &mut rng),
            Err(ConfigError::GridSizeOutOfRange { size: 4, .. })
        ));
    }

    #[test]
    fn three_solvable_mazes_share_endpoints() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let report = unpaced().run(15, &mut rng).unwrap();
        assert_eq!(report.mazes.len(), 3);
        assert!(report.all_solvable());
        for algorithm in MazeAlgorithm::ALL {
            let grid = report.maze(algorithm).unwrap();
            assert!(grid.is(report.start, CellKind::Start));
            assert!(grid.is(report.end, CellKind::End));
        }
    }

    #[test]
    fn step_events_only_on_stride() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        unpaced().with_events(tx).run(9, &mut rng).unwrap();
        for event in rx.try_iter() {
            if let RunEvent::Step { step, .. } = event {
                assert_eq!(step % 3, 0);
            }
        }
    }

    #[test]
    fn same_seed_same_mazes() {
        let a = unpaced().run(11, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = unpaced().run(11, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!((a.start, a.end), (b.start, b.end));
        for (x, y) in a.mazes.iter().zip(&b.mazes) {
            assert_eq!(x.grid, y.grid);
        }
    }
}
