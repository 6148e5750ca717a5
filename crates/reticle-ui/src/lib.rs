use std::fmt::Write as _;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use reticle_config::Config;
use reticle_core::{command, geometry, svg};
use reticle_types::{AppEvent, CrosshairConfig};
use tokio::sync::RwLock;

pub mod state;

use self::state::UiState;

/// Console presentation loop: consumes app->ui events, writes the SVG
/// preview and prints the copyable command. In one-shot mode it asks
/// the app to shut down after the first terminal result.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (preview_path, one_shot) = {
        let config = config.read().await;
        (config.ui.preview_path.clone(), config.ui.one_shot)
    };

    let mut ui_state = UiState::new();

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::AnalysisStarted => {
                println!("Analyzing screenshot...");
            }
            AppEvent::ShowResult(config) => {
                let primitives = geometry::render(&config);
                match tokio::fs::write(&preview_path, svg::document(&primitives)).await {
                    Ok(()) => println!("Preview written to {preview_path}"),
                    Err(e) => tracing::error!("failed to write preview {preview_path}: {e}"),
                }

                let command = command::command_string(&config);
                print!("{}", result_block(&config, &command));
                ui_state.record_result(command);

                if one_shot {
                    let _ = ui_to_app_tx.send(AppEvent::Shutdown).await;
                    break;
                }
            }
            AppEvent::AnalysisFailed { message } => {
                println!("{message}");

                if one_shot {
                    let _ = ui_to_app_tx.send(AppEvent::Shutdown).await;
                    break;
                }
            }
            AppEvent::StatusUpdate { status, analyzing } => {
                tracing::info!("status: {status} (analyzing: {analyzing})");
            }
            AppEvent::Shutdown => break,
            _ => {}
        }
    }

    tracing::debug!("ui loop done, {} results shown", ui_state.results_shown);
    Ok(())
}

/// The printable result: a parameter table plus the command line to
/// paste into the console.
pub fn result_block(config: &CrosshairConfig, command: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Detected crosshair:");
    let _ = writeln!(out, "  size               {}", config.size);
    let _ = writeln!(out, "  thickness          {}", config.thickness);
    let _ = writeln!(out, "  gap                {}", config.gap);
    let _ = writeln!(out, "  outline            {}", on_off(config.draw_outline));
    let _ = writeln!(out, "  outline thickness  {}", config.outline_thickness);
    let _ = writeln!(out, "  center dot         {}", on_off(config.dot));
    let _ = writeln!(
        out,
        "  color              rgb({}, {}, {})",
        config.color_r, config.color_g, config.color_b
    );
    let _ = writeln!(out, "  alpha              {}", config.alpha);
    let _ = writeln!(
        out,
        "  style              {} ({})",
        config.style,
        if config.style == 5 { "dynamic" } else { "static" }
    );
    let _ = writeln!(out, "  t-style            {}", on_off(config.t_style));
    let _ = writeln!(out);
    let _ = writeln!(out, "Console command:");
    let _ = writeln!(out, "  {command}");
    out
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
