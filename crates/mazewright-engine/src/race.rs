//! Side-by-side search comparison.

use std::time::Duration;

use crossbeam_channel::Sender;
use indexmap::{IndexMap, IndexSet};
use mazewright_core::{Coord, SearchAlgorithm};
use mazewright_grid::Grid;
use mazewright_process::Process;

use crate::config::{ConfigError, PacingConfig, MAX_LANES};
use crate::control::RunControl;
use crate::event::RunEvent;
use crate::lane::{Lane, LaneReport, Scheduler};
use crate::metrics::RunMetrics;

/// Result of a [`Race`].
#[derive(Clone, Debug)]
pub struct RaceReport {
    /// Every lane, in the order it was entered.
    pub lanes: Vec<LaneReport>,
    /// Index of the first lane to complete with a solution.
    pub winner: Option<usize>,
    /// Time from start to completion for each lane that completed, in
    /// completion order.
    pub completion_times: IndexMap<String, Duration>,
    /// Counters for the whole race.
    pub metrics: RunMetrics,
}

impl RaceReport {
    /// The winning lane, if any lane found a solution.
    pub fn winner(&self) -> Option<&LaneReport> {
        self.winner.and_then(|i| self.lanes.get(i))
    }

    /// The lane with `name`.
    pub fn lane(&self, name: &str) -> Option<&LaneReport> {
        self.lanes.iter().find(|l| l.name == name)
    }

    /// Names of completed lanes, first finisher first.
    pub fn finish_order(&self) -> impl Iterator<Item = &str> {
        self.completion_times.keys().map(String::as_str)
    }
}

/// Runs up to [`MAX_LANES`] searches on copies of one grid, interleaved
/// one step each per round.
///
/// The winner is the earliest lane to complete with a solution. Lanes
/// that finish without one, fail, or panic never win, and never stop
/// the others. Cancelling the race cancels every lane still running.
#[derive(Debug)]
pub struct Race {
    pacing: PacingConfig,
    control: RunControl,
    events: Option<Sender<RunEvent>>,
}

impl Race {
    /// A race with its own control and no event channel.
    pub fn new(pacing: PacingConfig) -> Result<Self, ConfigError> {
        pacing.validate()?;
        Ok(Self {
            pacing,
            control: RunControl::new(),
            events: None,
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

    /// Race `algorithms` from `start` to `end`, each on its own copy of
    /// `grid`.
    pub fn run(
        &self,
        grid: &Grid,
        start: Coord,
        end: Coord,
        algorithms: &[SearchAlgorithm],
    ) -> Result<RaceReport, ConfigError> {
        check_lane_count(algorithms.len())?;
        for coord in [start, end] {
            if !grid.contains(coord) {
                return Err(ConfigError::EndpointOutOfBounds {
                    coord,
                    size: grid.size(),
                });
            }
        }
        let processes = algorithms
            .iter()
            .map(|&a| mazewright_search::spawn(a, grid.clone(), start, end))
            .collect::<Result<Vec<_>, _>>()?;
        self.run_processes(processes)
    }

    /// Race arbitrary processes. Names must be unique.
    pub fn run_processes(
        &self,
        processes: Vec<Box<dyn Process>>,
    ) -> Result<RaceReport, ConfigError> {
        check_lane_count(processes.len())?;
        let mut names = IndexSet::with_capacity(processes.len());
        for p in &processes {
            if !names.insert(p.name()) {
                return Err(ConfigError::DuplicateLane {
                    name: p.name().to_string(),
                });
            }
        }

        let mut lanes: Vec<Lane> = processes
            .into_iter()
            .enumerate()
            .map(|(i, p)| Lane::new(i, p))
            .collect();
        let mut winner = None;
        let mut completion_times = IndexMap::with_capacity(lanes.len());

        let metrics = Scheduler::new(&self.pacing, &self.control, self.events.clone()).run(
            &mut lanes,
            |lane, sink| {
                completion_times.insert(
                    lane.name().to_string(),
                    lane.finished_after().unwrap_or_default(),
                );
                if winner.is_none() && lane.is_solved() {
                    winner = Some(lane.index());
                    #[cfg(feature = "tracing")]
                    tracing::info!(lane = lane.index(), name = %lane.name(), "race won");
                    sink.emit(RunEvent::Winner {
                        lane: lane.index(),
                        name: lane.name().to_string(),
                    });
                }
            },
        );

        Ok(RaceReport {
            lanes: lanes.into_iter().map(Lane::into_report).collect(),
            winner,
            completion_times,
            metrics,
        })
    }
}

fn check_lane_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::NoLanes);
    }
    if count > MAX_LANES {
        return Err(ConfigError::TooManyLanes {
            count,
            max: MAX_LANES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::Outcome;
    use mazewright_test_utils::{FailingProcess, PanickingProcess, ScriptedProcess};

    fn race() -> Race {
        Race::new(PacingConfig::unpaced()).unwrap()
    }

    fn route() -> Option<Vec<Coord>> {
        Some(vec![Coord::new(0, 0), Coord::new(0, 1)])
    }

    // ── Validation ─────────────────────────────────────────────────

    #[test]
    fn lane_count_bounds() {
        let grid = Grid::new(5).unwrap();
        let (s, e) = (Coord::new(0, 0), Coord::new(4, 4));
        assert_eq!(race().run(&grid, s, e, &[]).unwrap_err(), ConfigError::NoLanes);
        let seven = [SearchAlgorithm::Bfs; 7];
        assert!(matches!(
            race().run(&grid, s, e, &seven),
            Err(ConfigError::TooManyLanes { count: 7, max: 6 })
        ));
    }

    #[test]
    fn endpoints_checked_before_spawning() {
        let grid = Grid::new(5).unwrap();
        let err = race()
            .run(&grid, Coord::new(-1, 0), Coord::new(4, 4), &[SearchAlgorithm::Bfs])
            .unwrap_err();
        assert!(matches!(err, ConfigError::EndpointOutOfBounds { .. }));
    }

    #[test]
    fn duplicate_names_rejected() {
        let grid = Grid::new(5).unwrap();
        let err = race()
            .run(
                &grid,
                Coord::new(0, 0),
                Coord::new(4, 4),
                &[SearchAlgorithm::Bfs, SearchAlgorithm::Bfs],
            )
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLane { .. }));
    }

    // ── Winner ─────────────────────────────────────────────────────

    #[test]
    fn earliest_solved_completion_wins() {
        let report = race()
            .run_processes(vec![
                Box::new(ScriptedProcess::new("slow", 6, route())),
                Box::new(ScriptedProcess::new("fast", 2, route())),
                Box::new(ScriptedProcess::new("mid", 4, route())),
            ])
            .unwrap();
        assert_eq!(report.winner().map(|l| l.name.as_str()), Some("fast"));
        let order: Vec<&str> = report.finish_order().collect();
        assert_eq!(order, vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn unsolved_finisher_never_wins() {
        let report = race()
            .run_processes(vec![
                Box::new(ScriptedProcess::new("empty-handed", 1, None)),
                Box::new(ScriptedProcess::new("solver", 3, route())),
            ])
            .unwrap();
        assert_eq!(report.winner, Some(1));
        assert_eq!(report.completion_times.len(), 2);
    }

    #[test]
    fn failures_are_isolated() {
        let report = race()
            .run_processes(vec![
                Box::new(FailingProcess::new("fails", 1)),
                Box::new(PanickingProcess::new("panics", 1)),
                Box::new(ScriptedProcess::new("survivor", 5, route())),
            ])
            .unwrap();
        assert!(matches!(report.lanes[0].outcome, Outcome::Failed(_)));
        assert!(matches!(report.lanes[1].outcome, Outcome::Failed(_)));
        assert_eq!(report.lanes[2].outcome, Outcome::Completed);
        assert_eq!(report.winner().map(|l| l.name.as_str()), Some("survivor"));
    }

    #[test]
    fn no_solution_no_winner() {
        let grid = Grid::parse("S#.\n##.\n..E").unwrap();
        let report = race()
            .run(
                &grid,
                Coord::new(0, 0),
                Coord::new(2, 2),
                &[SearchAlgorithm::Bfs, SearchAlgorithm::AStar],
            )
            .unwrap();
        assert_eq!(report.winner, None);
        assert!(report.lanes.iter().all(|l| l.outcome == Outcome::Completed));
    }

    #[test]
    fn winner_event_emitted_once() {
        let (tx, rx) = crossbeam_channel::unbounded();
        race()
            .with_events(tx)
            .run_processes(vec![
                Box::new(ScriptedProcess::new("a", 1, route())),
                Box::new(ScriptedProcess::new("b", 1, route())),
            ])
            .unwrap();
        let winners: Vec<usize> = rx
            .try_iter()
            .filter_map(|e| match e {
                RunEvent::Winner { lane, .. } => Some(lane),
                _ => None,
            })
            .collect();
        assert_eq!(winners, vec![0]);
    }

    proptest::proptest! {
        #[test]
        fn winner_is_fewest_steps_then_lowest_lane(
            script in proptest::collection::vec((0u64..20, proptest::bool::ANY), 1..=MAX_LANES),
        ) {
            let processes: Vec<Box<dyn Process>> = script
                .iter()
                .enumerate()
                .map(|(i, &(steps, solves))| {
                    let path = if solves { route() } else { None };
                    Box::new(ScriptedProcess::new(&format!("lane{i}"), steps, path)) as Box<dyn Process>
                })
                .collect();
            let report = race().run_processes(processes).unwrap();
            let expected = script
                .iter()
                .enumerate()
                .filter(|(_, (_, solves))| *solves)
                .min_by_key(|&(i, &(steps, _))| (steps, i))
                .map(|(i, _)| i);
            proptest::prop_assert_eq!(report.winner, expected);
            proptest::prop_assert_eq!(report.completion_times.len(), script.len());
        }
    }

    #[test]
    fn all_searches_agree_on_open_grid() {
        let grid = Grid::new(9).unwrap();
        let report = race()
            .run(&grid, Coord::new(0, 0), Coord::new(8, 8), &SearchAlgorithm::ALL)
            .unwrap();
        assert_eq!(report.lanes.len(), 6);
        assert!(report.winner.is_some());
        for name in ["BFS", "Dijkstra", "A*"] {
            let lane = report.lane(name).unwrap();
            assert_eq!(lane.path_len(), Some(17), "{name}");
        }
    }
}
