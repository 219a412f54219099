/// Learning rate used when the caller does not pick one.
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of full passes over the training data; zero
///   epochs makes the loop a no-op
/// - `learning_rate` — fixed step size α applied by every weight update
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    /// Creates a config with the default learning rate.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_learning_rate_is_applied() {
        let config = TrainConfig::new(10);
        assert_eq!(config.epochs, 10);
        assert_eq!(config.learning_rate, 0.2);
    }

    #[test]
    fn learning_rate_can_be_overridden() {
        let config = TrainConfig::new(10).with_learning_rate(0.05);
        assert_eq!(config.learning_rate, 0.05);
    }
}
