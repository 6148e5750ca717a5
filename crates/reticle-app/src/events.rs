use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use reticle_analyzer::CrosshairAnalyzer;
use reticle_types::AppEvent;

use crate::state::AppState;

pub mod analyze_image;
pub mod reset;

use analyze_image::handle_image_selected;
use reset::handle_reset;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    analyzer: Arc<dyn CrosshairAnalyzer>,
) -> anyhow::Result<()> {
    tracing::debug!("event loop started, waiting for screenshots");

    loop {
        let event = ui_to_app_rx.recv().await?;

        match event {
            AppEvent::ImageSelected { payload, source } => {
                handle_image_selected(
                    state.clone(),
                    payload,
                    source,
                    analyzer.as_ref(),
                    &app_to_ui_tx,
                )
                .await?;
            }
            AppEvent::Reset => {
                handle_reset(state.clone(), &app_to_ui_tx).await?;
            }
            AppEvent::Shutdown => {
                let _ = app_to_ui_tx.send(AppEvent::Shutdown).await;
                break;
            }
            _ => {
                // app->ui events have no meaning on this side
            }
        }
    }

    Ok(())
}
