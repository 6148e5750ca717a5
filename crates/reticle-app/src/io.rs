use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use reticle_core::state::AnalysisStatus;
use reticle_types::{AppEvent, ImageSource};
use tokio::io::AsyncBufReadExt;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Intake surfaces: the interactive path prompt on stdin and, when
/// enabled, the polled drop directory. Runs until cancelled; stdin
/// closing does not take the app down.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (watch_drop_dir, drop_dir, poll_interval) = {
        let config = state.config.read().await;
        (
            config.intake.watch_drop_dir,
            PathBuf::from(&config.intake.drop_dir),
            Duration::from_millis(config.intake.poll_interval_ms),
        )
    };

    // Path prompt, detached; it ends quietly at EOF or on 'quit'.
    let picker_state = state.clone();
    let picker_tx = event_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = stdin_picker(picker_state, picker_tx).await {
            tracing::error!("stdin picker error: {e}");
        }
    });

    if watch_drop_dir {
        tokio::fs::create_dir_all(&drop_dir).await?;
        println!("Watching {} for screenshots", drop_dir.display());

        let tx = event_tx.clone();
        let drop_state = state.clone();
        let watcher = reticle_io::watch::watch_directory(&drop_dir, poll_interval, move |payload| {
            let tx = tx.clone();
            let state = drop_state.clone();
            tokio::spawn(async move {
                send_upload(&state, &tx, payload, ImageSource::DropDir).await;
            });
        });

        tokio::select! {
            result = watcher => {
                if let Err(e) = result {
                    tracing::error!("drop watcher error: {e}");
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("intake stopping");
            }
        }
    } else {
        cancel.cancelled().await;
        tracing::info!("intake stopping");
    }

    Ok(())
}

/// Read paths (and the reset/quit commands) from stdin, one per line.
async fn stdin_picker(state: Arc<AppState>, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    if atty::is(atty::Stream::Stdin) {
        println!("Type a screenshot path and press enter ('reset' to start over, 'quit' to exit)");
    }

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => {
                event_tx.send(AppEvent::Shutdown).await?;
                break;
            }
            "reset" => {
                event_tx.send(AppEvent::Reset).await?;
                continue;
            }
            path => match reticle_io::intake::load_image(Path::new(path)).await {
                Ok(Some(payload)) => {
                    send_upload(&state, &event_tx, payload, ImageSource::Picker).await;
                }
                Ok(None) => {
                    tracing::debug!("{path} is not an image, ignored");
                }
                Err(e) => {
                    tracing::warn!("could not read {path}: {e}");
                }
            },
        }
    }

    Ok(())
}

/// Advisory upload gate: skip new screenshots while one is being
/// analyzed. The event loop's state check stays authoritative.
async fn send_upload(
    state: &AppState,
    event_tx: &AsyncSender<AppEvent>,
    payload: String,
    source: ImageSource,
) {
    if state.analysis.read().await.status() == AnalysisStatus::Analyzing {
        tracing::warn!("analysis in progress, ignoring new screenshot");
        return;
    }

    if let Err(e) = event_tx
        .send(AppEvent::ImageSelected { payload, source })
        .await
    {
        tracing::error!("failed to queue screenshot: {e}");
    }
}
