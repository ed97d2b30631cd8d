use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Emit a structured output the way the Actions runner expects: appended to
/// the file named by GITHUB_OUTPUT, or printed to stdout outside a runner.
pub async fn write(key: &str, value: bool) -> Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => append(Path::new(&path), key, value).await,
        _ => {
            println!("{key}={value}");
            Ok(())
        }
    }
}

pub async fn append(path: &Path, key: &str, value: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    file.write_all(format!("{key}={value}\n").as_bytes())
        .await
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    Ok(())
}
