use std::path::Path;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use reticle_analyzer::CrosshairAnalyzer;
use reticle_types::{AppEvent, ImageSource};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Queue a screenshot picked on the command line. Returns false
    /// when the file is not an image.
    pub async fn submit_image(&self, path: &Path) -> anyhow::Result<bool> {
        match reticle_io::intake::load_image(path).await? {
            Some(payload) => {
                self.channels
                    .ui_to_app
                    .0
                    .send(AppEvent::ImageSelected {
                        payload,
                        source: ImageSource::Picker,
                    })
                    .await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn spawn_tasks(&self, analyzer: Arc<dyn CrosshairAnalyzer>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            analyzer,
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.state.config.clone(),
        ));

        // Intake watcher
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
