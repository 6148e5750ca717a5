use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::intake;

/// Poll a drop directory and fire `on_image` exactly once for every
/// image file that appears after the watch starts. Files already
/// present are primed as seen; non-image and unreadable files are
/// skipped silently.
pub async fn watch_directory(
    dir: &Path,
    interval: Duration,
    mut on_image: impl FnMut(String),
) -> Result<()> {
    let mut seen = scan(dir).await?;

    loop {
        tokio::time::sleep(interval).await;

        for path in scan(dir).await? {
            if !seen.insert(path.clone()) {
                continue;
            }

            if let Ok(Some(payload)) = intake::load_image(&path).await {
                on_image(payload);
            }
        }
    }
}

async fn scan(dir: &Path) -> Result<HashSet<PathBuf>> {
    let mut files = HashSet::new();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read drop directory {}", dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.insert(entry.path());
        }
    }

    Ok(files)
}
