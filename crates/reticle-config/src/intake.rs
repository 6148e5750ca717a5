use std::env;

use serde::{Deserialize, Serialize};

fn default_drop_dir() -> String {
    "drops".to_string()
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct IntakeConfig {
    /// Watch the drop directory for new screenshots
    pub watch_drop_dir: bool,
    #[serde(default = "default_drop_dir")]
    pub drop_dir: String,
    /// Drop directory poll interval
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl IntakeConfig {
    pub fn new() -> Self {
        let drop_dir = env::var("RETICLE_DROP_DIR").unwrap_or_else(|_| default_drop_dir());

        let poll_interval_ms = env::var("RETICLE_POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_poll_interval_ms);

        Self {
            watch_drop_dir: false,
            drop_dir,
            poll_interval_ms,
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            watch_drop_dir: false,
            drop_dir: default_drop_dir(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
