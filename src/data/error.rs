use thiserror::Error;

/// Errors raised while loading or translating the mushroom dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A record does not carry the class column plus all attribute columns.
    #[error("record has {got} comma-separated fields, expected {expected}")]
    BadRecord { expected: usize, got: usize },

    /// An attribute value outside the attribute's known alphabet. The
    /// translator refuses to guess; silently skipping a value would shift
    /// every later attribute in the input vector.
    #[error("unknown symbol '{symbol}' for attribute {attribute}")]
    UnknownSymbol {
        attribute: &'static str,
        symbol: char,
    },

    #[error("unknown class label '{0}', expected 'e' or 'p'")]
    UnknownClass(String),

    /// The file cannot cover the requested train + test split.
    #[error("dataset has {available} usable records but {requested} were requested")]
    NotEnoughRows { available: usize, requested: usize },
}
