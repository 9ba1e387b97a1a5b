//! Per-run performance counters.

/// Counters collected over one driven run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Non-terminal steps taken, summed over every lane.
    pub steps: u64,
    /// Snapshot events published.
    pub snapshots: u64,
    /// Time spent held by the pause flag.
    pub paused_us: u64,
    /// Wall-clock time from start to finish.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// Wall-clock time not spent paused.
    pub fn active_us(&self) -> u64 {
        self.elapsed_us.saturating_sub(self.paused_us)
    }
}
