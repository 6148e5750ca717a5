use std::path::PathBuf;

use clap::Parser;
use reticle_config::Config;

/// Infer CS2 crosshair settings from a screenshot
#[derive(Parser)]
#[command(name = "reticle", version)]
pub struct Cli {
    /// Screenshot to analyze; prints the result and exits
    pub image: Option<PathBuf>,

    /// Stay resident and watch the drop directory for screenshots
    #[arg(long)]
    pub watch: bool,

    /// Directory watched for dropped screenshots (implies --watch)
    #[arg(long)]
    pub drop_dir: Option<PathBuf>,

    /// Where the SVG preview is written
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line choices into the environment-derived config.
    pub fn apply(&self, config: &mut Config) {
        if self.watch {
            config.intake.watch_drop_dir = true;
        }

        if let Some(dir) = &self.drop_dir {
            config.intake.watch_drop_dir = true;
            config.intake.drop_dir = dir.display().to_string();
        }

        if let Some(path) = &self.preview {
            config.ui.preview_path = path.display().to_string();
        }

        if self.image.is_some() && !self.watch {
            config.ui.one_shot = true;
        }
    }
}
