use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key; never serialized into profiles
    #[serde(skip_serializing, default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl GeminiConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| default_api_url());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());

        Self {
            api_key,
            api_url,
            model,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
        }
    }
}
