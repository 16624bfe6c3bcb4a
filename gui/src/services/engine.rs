// The handle components use to reach the engine. The engine runs in
// process, so this is a pair of shared service instances rather than a
// connection.
use std::sync::Arc;

use engine::services::{DigitService, MarketService};

#[derive(Clone)]
pub struct EngineHandle {
    pub market: Arc<MarketService>,

    /// `None` when the model artifact failed to load at startup; the
    /// Digits view degrades to an explanatory message, the other views
    /// are unaffected.
    pub digits: Option<Arc<DigitService>>,
}

impl EngineHandle {
    pub fn new(market: MarketService, digits: Option<DigitService>) -> Self {
        Self {
            market: Arc::new(market),
            digits: digits.map(Arc::new),
        }
    }
}
