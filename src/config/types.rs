use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Quiz API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning the question array (e.g., "https://example.com/quiz").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query parameters sent with the dataset request. Non-string values
    /// are stringified (`level = 5` is sent as `level=5`).
    #[serde(default)]
    pub params: Map<String, Value>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080/quiz".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            params: Map::new(),
        }
    }
}
