pub mod epoch_stats;
pub mod gates;
pub mod observer;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use gates::{train_and, train_or, train_xor};
pub use observer::{ConsoleObserver, PatternTrace, TrainObserver};
pub use train_config::{TrainConfig, DEFAULT_LEARNING_RATE};
pub use trainer::{iterate, train_loop};
