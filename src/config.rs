use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional repo-local defaults for the CLI inputs.
#[derive(Debug, Default, Deserialize)]
pub struct ActionConfig {
    pub fail_for_prerelease: Option<bool>,
}

pub async fn load_config(dir: &Path) -> Result<ActionConfig> {
    let path = dir.join(".release-ready.toml");
    if !path.exists() {
        return Ok(ActionConfig::default());
    }
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: ActionConfig =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(cfg)
}
