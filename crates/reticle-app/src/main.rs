use std::sync::Arc;

use clap::Parser;
use reticle_analyzer::CrosshairAnalyzer;
use reticle_config::Config;
use reticle_gemini::GeminiAnalyzer;
use tokio::signal;

mod cli;
mod controller;
mod events;
mod io;
mod state;
mod ui;


use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    let analyzer: Arc<dyn CrosshairAnalyzer> = Arc::new(GeminiAnalyzer::new(
        config.gemini.api_key.clone(),
        config.gemini.api_url.clone(),
        config.gemini.model.clone(),
    ));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());

    if let Some(path) = &cli.image {
        if !controller.submit_image(path).await? {
            anyhow::bail!("{} does not look like an image file", path.display());
        }
    }

    let mut tasks = controller.spawn_tasks(analyzer);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    Ok(())
}
