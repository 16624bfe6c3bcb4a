use shared::models::Prediction;

use crate::error::EngineError;
use crate::vision::{DigitClassifier, DigitGrid};

/// Prediction pipeline behind the Digits view: decode, normalize,
/// classify. Holds the process-wide model, injected at construction.
pub struct DigitService {
    classifier: DigitClassifier,
}

impl DigitService {
    pub fn new(classifier: DigitClassifier) -> Self {
        Self { classifier }
    }

    pub fn load(model_path: &str) -> Result<Self, EngineError> {
        tracing::info!(path = %model_path, "Loading digit model");
        let classifier = DigitClassifier::load(model_path)?;
        Ok(Self::new(classifier))
    }

    /// One prediction pass over freshly uploaded image bytes.
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<Prediction, EngineError> {
        let grid = DigitGrid::from_bytes(bytes)?;
        let prediction = self.classifier.predict(&grid)?;
        tracing::info!(
            digit = prediction.digit,
            confidence = prediction.confidence,
            "Digit predicted"
        );
        Ok(prediction)
    }
}
