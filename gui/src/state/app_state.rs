// Global application state shared across views via a root Signal.
use shared::models::CoinEntry;

/// The three tools the toolbar switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tracker,
    Compare,
    Digits,
}

impl View {
    pub const ALL: [View; 3] = [View::Tracker, View::Compare, View::Digits];

    pub fn title(self) -> &'static str {
        match self {
            View::Tracker => "Tracker",
            View::Compare => "Compare",
            View::Digits => "Digits",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub active_view: View,

    /// Coin directory fetched once at startup. Empty either before the
    /// fetch resolves or after a failed fetch; `catalog_error` is the only
    /// way the two cases differ.
    pub catalog: Vec<CoinEntry>,
    pub catalog_loading: bool,
    pub catalog_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_view: View::Tracker,
            catalog: Vec::new(),
            catalog_loading: true,
            catalog_error: None,
        }
    }
}
