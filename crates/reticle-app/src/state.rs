use std::sync::Arc;

use reticle_config::Config;
use reticle_core::state::AnalysisState;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// The single authoritative analysis value, replaced wholesale by
    /// the event loop
    pub analysis: RwLock<AnalysisState>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            analysis: RwLock::new(AnalysisState::new()),
        }
    }
}
