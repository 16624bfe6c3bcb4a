use shared::models::{CoinEntry, PriceSeries, TimeWindow};

use crate::config::EngineSettings;
use crate::data::coingecko::CoinGeckoClient;
use crate::data::series;
use crate::error::{CatalogError, EngineError};

/// Market operations behind the Tracker and Compare views. Owns the HTTP
/// client; every call is a fresh request-per-interaction pass with no
/// caching between interactions.
pub struct MarketService {
    client: CoinGeckoClient,
}

impl MarketService {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        Ok(Self {
            client: CoinGeckoClient::new(settings)?,
        })
    }

    /// Loads the identifier -> display-name directory that populates the
    /// coin pickers.
    pub async fn load_catalog(&self) -> Result<Vec<CoinEntry>, CatalogError> {
        tracing::info!("Loading coin catalog");
        let entries = self.client.coin_list().await?;
        tracing::info!(count = entries.len(), "Coin catalog loaded");
        Ok(entries)
    }

    /// Fetches and shapes one coin's price history. Compare calls this
    /// twice, sequentially; a failure of one call does not roll back or
    /// affect the other.
    pub async fn price_series(
        &self,
        coin_id: &str,
        window: TimeWindow,
    ) -> Result<PriceSeries, EngineError> {
        tracing::info!(coin_id = %coin_id, days = window.days(), "Fetching price series");
        let chart = self.client.market_chart(coin_id, window).await?;
        let series = series::build_series(coin_id, &chart)?;
        tracing::debug!(coin_id = %coin_id, points = series.len(), "Price series ready");
        Ok(series)
    }
}
