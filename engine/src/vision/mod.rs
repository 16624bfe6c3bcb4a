// Digit recognition: image normalization and the pretrained classifier.
pub mod classifier;
pub mod preprocess;

pub use classifier::DigitClassifier;
pub use preprocess::{DigitGrid, GRID_SIDE};
