pub mod evaluate;

pub use evaluate::{argmax, evaluate, Evaluation};
