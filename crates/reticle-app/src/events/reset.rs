use std::sync::Arc;

use kanal::AsyncSender;
use reticle_types::AppEvent;

use crate::state::AppState;

pub async fn handle_reset(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    state.analysis.write().await.reset();
    tracing::info!("analysis state reset");

    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Ready".to_string(),
            analyzing: false,
        })
        .await;

    Ok(())
}
