use std::sync::Arc;

use kanal::AsyncSender;
use reticle_analyzer::CrosshairAnalyzer;
use reticle_types::{AppEvent, ImageSource};

use crate::state::AppState;

/// The one message shown for every failure class; details stay in the
/// log.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze crosshair. \
     Please try another image or ensure the crosshair is clearly visible.";

pub async fn handle_image_selected(
    state: Arc<AppState>,
    payload: String,
    source: ImageSource,
    analyzer: &dyn CrosshairAnalyzer,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    {
        let mut analysis = state.analysis.write().await;
        if !analysis.begin_analysis(payload.clone()) {
            tracing::warn!("upload ignored while {:?}", analysis.status());
            return Ok(());
        }
    }

    tracing::info!("analyzing screenshot from {:?}", source);
    let _ = app_to_ui_tx.send(AppEvent::AnalysisStarted).await;

    match analyzer.analyze(&payload).await {
        Ok(config) => {
            state.analysis.write().await.complete(config.clone());
            let _ = app_to_ui_tx.send(AppEvent::ShowResult(config)).await;
        }
        Err(e) => {
            tracing::error!("analysis failed: {e}");
            state.analysis.write().await.fail(ANALYSIS_FAILED_MESSAGE);
            let _ = app_to_ui_tx
                .send(AppEvent::AnalysisFailed {
                    message: ANALYSIS_FAILED_MESSAGE.to_string(),
                })
                .await;
        }
    }

    Ok(())
}
