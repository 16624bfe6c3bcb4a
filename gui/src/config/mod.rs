// GUI configuration module
pub mod theme;

use engine::config::EngineSettings;
use serde::Deserialize;

/// Application configuration, mirroring `assets/config/default.json`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub api: ApiSettings,
    pub chart: ChartConfig,
    pub model: ModelSettings,
    pub window: WindowSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub line_width: f64,
    pub series_colors: Vec<String>,
    pub grid_color: String,
    pub y_ticks: usize,
    pub x_ticks: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl AppConfig {
    /// The default configuration ships embedded so the binary never
    /// depends on a working directory layout.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            api_base_url: self.api.base_url.clone(),
            user_agent: self.api.user_agent.clone(),
            request_timeout_secs: self.api.timeout_secs,
            model_path: self.model.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.theme, "dark");
        assert!(config.api.base_url.starts_with("https://"));
        assert_eq!(config.chart.series_colors.len(), 2);
    }

    #[test]
    fn test_engine_settings_mapping() {
        let config = AppConfig::load_default().unwrap();
        let settings = config.engine_settings();
        assert_eq!(settings.api_base_url, config.api.base_url);
        assert_eq!(settings.model_path, config.model.path);
    }
}
