use anyhow::{Context, Result, bail};
use octocrab::Octocrab;

/// Build an authenticated Octocrab client from the resolved token input.
/// Honors the runner-provided GITHUB_API_URL (GitHub Enterprise and the like).
pub fn client(token: Option<&str>) -> Result<Octocrab> {
    let token = match token {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => bail!("missing GitHub token for release lookup; pass --token or set GITHUB_TOKEN"),
    };
    let mut builder = Octocrab::builder().personal_token(token);
    if let Ok(base) = std::env::var("GITHUB_API_URL")
        && !base.is_empty()
    {
        builder = builder
            .base_uri(base)
            .context("invalid GITHUB_API_URL value")?;
    }
    builder.build().context("failed to build GitHub client")
}
