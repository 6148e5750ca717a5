use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use reticle_config::Config;
use reticle_types::AppEvent;
use tokio::sync::RwLock;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    reticle_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config).await
}
