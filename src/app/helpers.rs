//! Async helpers run through `Task::perform`

use std::path::PathBuf;

use anyhow::Context;

use crate::features::Settings;

/// Write settings to the config file unless one already exists
///
/// Returns the path written, or `None` when nothing was written.
pub async fn persist_default_settings(settings: Settings) -> anyhow::Result<Option<PathBuf>> {
    let Some(path) = Settings::file_path() else {
        return Ok(None);
    };
    write_if_missing(&settings, path).await
}

async fn write_if_missing(settings: &Settings, path: PathBuf) -> anyhow::Result<Option<PathBuf>> {
    if tokio::fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to check {:?}", path))?
    {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let content = settings.to_json()?;
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {:?}", path))?;

    Ok(Some(path))
}
