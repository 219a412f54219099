use crate::train::epoch_stats::EpochStats;

/// Snapshot of a single training iteration, handed to observers right after
/// the weight update for that pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternTrace<'a> {
    /// 1-based pattern counter, running across epochs.
    pub index: usize,
    pub input: &'a [f64],
    pub target: &'a [f64],
    /// Output the network produced for this pattern before the update.
    pub output: &'a [f64],
}

/// Receives progress reports from `train_loop`. Reporting is advisory: the
/// training outcome never depends on an observer being attached.
pub trait TrainObserver {
    fn on_pattern(&mut self, _trace: &PatternTrace<'_>) {}

    fn on_epoch(&mut self, _stats: &EpochStats) {}
}

/// Prints one line per training pattern, `index: input -----> target : output`.
pub struct ConsoleObserver;

impl TrainObserver for ConsoleObserver {
    fn on_pattern(&mut self, trace: &PatternTrace<'_>) {
        println!(
            "{:03}: {:?} -----> {:?} : {:?}",
            trace.index, trace.input, trace.target, trace.output
        );
    }
}
