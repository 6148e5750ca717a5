use serde::{Deserialize, Serialize};

use self::gemini::GeminiConfig;
use self::intake::IntakeConfig;
use self::ui::UiConfig;

pub mod gemini;
pub mod intake;
pub mod ui;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub intake: IntakeConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            gemini: GeminiConfig::new(),
            intake: IntakeConfig::new(),
            ui: UiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
