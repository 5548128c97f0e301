use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_API_KEY: &str = "YOUR_AZURE_API_KEY";
pub const PLACEHOLDER_API_REGION: &str = "YOUR_AZURE_API_REGION";

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_api_region() -> String {
    PLACEHOLDER_API_REGION.to_string()
}

fn default_endpoint() -> String {
    "https://api.cognitive.microsofttranslator.com/translate".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslatorConfig {
    #[serde(default = "default_api_key")]
    pub azure_api_key: String,
    #[serde(default = "default_api_region")]
    pub azure_api_region: String,
    #[serde(default = "default_endpoint")]
    pub azure_endpoint: String,
    /// Attempts per text before the language is given up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// First retry delay, doubled on every further failure
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            azure_api_key: default_api_key(),
            azure_api_region: default_api_region(),
            azure_endpoint: default_endpoint(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl TranslatorConfig {
    /// `AZURE_API_KEY` and `AZURE_API_REGION` take precedence over the file
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("AZURE_API_KEY") {
            self.azure_api_key = key;
        }

        if let Ok(region) = env::var("AZURE_API_REGION") {
            self.azure_api_region = region;
        }
    }

    /// Still carrying the values written into a fresh config file
    pub fn has_placeholder_credentials(&self) -> bool {
        self.azure_api_key.is_empty()
            || self.azure_api_key == PLACEHOLDER_API_KEY
            || self.azure_api_region == PLACEHOLDER_API_REGION
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
