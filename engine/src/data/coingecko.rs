//! CoinGecko REST client
//!
//! Two endpoints are used: the coin directory (`/coins/list`) and per-coin
//! USD price history (`/coins/{id}/market_chart`). One request per call,
//! no retry, timeouts from [`EngineSettings`].

use std::time::Duration;

use serde::Deserialize;
use shared::models::{CoinEntry, TimeWindow};

use crate::config::EngineSettings;
use crate::error::{CatalogError, EngineError};

/// Raw market-chart payload: `prices` holds parallel `[timestamp_ms, price]`
/// pairs exactly as the endpoint sends them.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<(i64, f64)>,
}

pub struct CoinGeckoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let http_client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full identifier -> display-name directory.
    pub async fn coin_list(&self) -> Result<Vec<CoinEntry>, CatalogError> {
        let url = format!("{}/coins/list", self.base_url);
        tracing::debug!(url = %url, "Querying coin directory");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Transport(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        parse_coin_list(&body)
    }

    /// Fetches one coin's raw USD price history over `window`. No shape
    /// validation beyond typed deserialization; the caller shapes the
    /// series.
    pub async fn market_chart(
        &self,
        coin_id: &str,
        window: TimeWindow,
    ) -> Result<MarketChart, EngineError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, coin_id);
        tracing::debug!(url = %url, days = window.days(), "Querying market chart");

        let chart: MarketChart = self
            .http_client
            .get(&url)
            .query(&[
                ("vs_currency", "usd".to_string()),
                ("days", window.days().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(chart)
    }
}

/// Decodes the directory body, keeping invalid JSON distinct from valid
/// JSON of the wrong shape. An empty array is a shape error: there is
/// nothing to select from.
pub fn parse_coin_list(body: &str) -> Result<Vec<CoinEntry>, CatalogError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    if !value.is_array() {
        return Err(CatalogError::Shape(format!(
            "expected a JSON array of coin records, got {}",
            json_kind(&value)
        )));
    }

    let entries: Vec<CoinEntry> =
        serde_json::from_value(value).map_err(|e| CatalogError::Shape(e.to_string()))?;

    if entries.is_empty() {
        return Err(CatalogError::Shape("coin directory is empty".to_string()));
    }

    Ok(entries)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coin_list_well_formed() {
        let body = r#"[
            {"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"},
            {"id": "ethereum", "symbol": "eth", "name": "Ethereum"}
        ]"#;
        let entries = parse_coin_list(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "bitcoin");
        assert_eq!(entries[0].name, "Bitcoin");
        assert_eq!(entries[1].id, "ethereum");
        assert_eq!(entries[1].name, "Ethereum");
    }

    #[test]
    fn test_parse_coin_list_invalid_json_is_decode_error() {
        let result = parse_coin_list("not json at all {");
        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_parse_coin_list_non_array_is_shape_error() {
        let result = parse_coin_list(r#"{"error": "rate limited"}"#);
        match result {
            Err(CatalogError::Shape(msg)) => assert!(msg.contains("an object")),
            other => panic!("expected Shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_coin_list_empty_array_is_shape_error() {
        let result = parse_coin_list("[]");
        assert!(matches!(result, Err(CatalogError::Shape(_))));
    }

    #[test]
    fn test_parse_coin_list_missing_fields_is_shape_error() {
        let body = r#"[{"id": "bitcoin"}]"#;
        let result = parse_coin_list(body);
        assert!(matches!(result, Err(CatalogError::Shape(_))));
    }

    #[test]
    fn test_market_chart_deserializes_price_pairs() {
        let body = r#"{"prices": [[1700000000000, 36500.12], [1700003600000, 36720.5]],
                       "market_caps": [], "total_volumes": []}"#;
        let chart: MarketChart = serde_json::from_str(body).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0], (1_700_000_000_000, 36500.12));
    }

    #[test]
    fn test_client_builds_with_default_settings() {
        let settings = EngineSettings::default();
        let client = CoinGeckoClient::new(&settings).unwrap();
        assert_eq!(client.base_url, "https://api.coingecko.com/api/v3");
    }
}
