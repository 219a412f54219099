pub mod activation;
pub mod data;
pub mod eval;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_prime};
pub use data::dataset::build_sets;
pub use data::error::DatasetError;
pub use data::mushroom::{retranslate, translate, Edibility, Sample};
pub use eval::evaluate::{argmax, evaluate, Evaluation};
pub use loss::squared_error::SquaredError;
pub use network::error::NetworkError;
pub use network::network::Network;
pub use train::gates::{train_and, train_or, train_xor};
pub use train::observer::{ConsoleObserver, PatternTrace, TrainObserver};
pub use train::train_config::{TrainConfig, DEFAULT_LEARNING_RATE};
pub use train::trainer::{iterate, train_loop};
