use std::env;

use serde::{Deserialize, Serialize};

fn default_preview_path() -> String {
    "crosshair-preview.svg".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Where the SVG preview is written after a successful analysis
    #[serde(default = "default_preview_path")]
    pub preview_path: String,
    /// Exit after the first success or failure (single-screenshot mode)
    pub one_shot: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let preview_path =
            env::var("RETICLE_PREVIEW_PATH").unwrap_or_else(|_| default_preview_path());

        Self {
            preview_path,
            one_shot: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preview_path: default_preview_path(),
            one_shot: false,
        }
    }
}
