pub mod dataset;
pub mod error;
pub mod mushroom;

pub use dataset::{build_sets, split_records};
pub use error::DatasetError;
pub use mushroom::{retranslate, test_classifier, train_classifier, translate, Edibility, Sample};
