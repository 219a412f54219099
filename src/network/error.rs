use thiserror::Error;

/// Errors surfaced by the network core and the drivers built on it.
///
/// All conditions are local and synchronous; none are retried. The caller
/// decides whether to abort or restart with corrected parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A layer dimension of zero was requested at construction.
    #[error("invalid topology {nx}x{nz}x{ny}: every layer needs at least one unit")]
    InvalidTopology { nx: usize, nz: usize, ny: usize },

    /// An explicit weight row does not have the expected width.
    #[error("{layer} weight row {row} has {got} entries, expected {expected}")]
    WeightShapeMismatch {
        layer: &'static str,
        row: usize,
        expected: usize,
        got: usize,
    },

    /// An input vector does not match the network's input width.
    #[error("input has {got} values but the network expects {expected}")]
    InputShapeMismatch { expected: usize, got: usize },

    /// A target vector does not match the network's output width.
    #[error("target has {got} values but the network produces {expected}")]
    TargetShapeMismatch { expected: usize, got: usize },

    /// Parallel input/target (or input/label) slices disagree in length.
    #[error("got {inputs} input patterns but {targets} targets")]
    PatternCountMismatch { inputs: usize, targets: usize },

    /// Evaluation over zero patterns would divide by zero.
    #[error("evaluation requires at least one test pattern")]
    EmptyTestSet,
}
