use tract_onnx::prelude::*;

use shared::models::Prediction;

use super::preprocess::{DigitGrid, GRID_SIDE};

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Pretrained ten-class digit model. Loaded once at process start,
/// read-only afterwards, and passed in explicitly wherever prediction
/// happens so the pipeline stays testable without a global.
pub struct DigitClassifier {
    model: OnnxPlan,
}

impl DigitClassifier {
    pub fn load<P: AsRef<std::path::Path>>(model_path: P) -> TractResult<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, GRID_SIDE, GRID_SIDE)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model })
    }

    /// One forward pass over a normalized grid. Returns the index of the
    /// highest-scoring output unit and that unit's raw score.
    pub fn predict(&self, grid: &DigitGrid) -> TractResult<Prediction> {
        let input = Tensor::from_shape(&[1, GRID_SIDE, GRID_SIDE], grid.pixels())?;
        let outputs = self.model.run(tvec!(input.into()))?;
        let scores = outputs[0].to_array_view::<f32>()?;

        let (digit, confidence) = best_class(scores.iter().copied())
            .ok_or_else(|| anyhow::anyhow!("model produced no output scores"))?;

        Ok(Prediction {
            digit: digit as u8,
            confidence,
        })
    }
}

/// Index and value of the largest score; the first index wins a tie.
fn best_class(scores: impl Iterator<Item = f32>) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, score) in scores.enumerate() {
        match best {
            Some((_, current)) if score <= current => {}
            _ => best = Some((index, score)),
        }
    }
    best
}
