// Engine settings, provided by the embedding application or defaulted.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub api_base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub model_path: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            api_base_url: "https://api.coingecko.com/api/v3".to_string(),
            user_agent: "home-analyst/0.1.0".to_string(),
            request_timeout_secs: 30,
            model_path: "gui/assets/models/mnist_digit_classifier.onnx".to_string(),
        }
    }
}
