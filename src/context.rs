use anyhow::{Result, bail};
use git2::Repository;
use regex::Regex;

/// The repository a release lookup is scoped to.
#[derive(Debug, Clone)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
}

/// Resolve the current repository: prefer the Actions runner context
/// (GITHUB_REPOSITORY), fall back to the local git remote.
pub async fn resolve() -> Result<RepoContext> {
    if let Ok(slug) = std::env::var("GITHUB_REPOSITORY")
        && !slug.is_empty()
    {
        return parse_slug(&slug);
    }
    infer_from_remote().await
}

pub fn parse_slug(slug: &str) -> Result<RepoContext> {
    match slug.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(RepoContext {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
        _ => bail!("invalid GITHUB_REPOSITORY value (expected owner/name): {slug}"),
    }
}

async fn infer_from_remote() -> Result<RepoContext> {
    tracing::debug!("context: GITHUB_REPOSITORY unset, inferring from git remote");
    tokio::task::spawn_blocking(|| {
        let repo = Repository::discover(".")?;
        let remotes = repo.remotes()?;
        let mut chosen: Option<String> = None;
        if let Some(name) = remotes.iter().flatten().find(|r| *r == "origin") {
            chosen = Some(name.to_string());
        } else if let Some(first) = remotes.iter().flatten().next() {
            chosen = Some(first.to_string());
        }
        let name = chosen.ok_or_else(|| anyhow::anyhow!("no git remotes found"))?;
        let remote = repo.find_remote(&name)?;
        let url = remote
            .url()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("remote has no URL"))?;
        parse_remote_url(&url)
    })
    .await
    .map_err(|e| anyhow::anyhow!("infer_from_remote task join error: {}", e))?
}

/// Parse GitHub owner/repo from an SSH or HTTPS remote URL.
pub fn parse_remote_url(url: &str) -> Result<RepoContext> {
    let ssh = Regex::new(r"^git@github\.com:(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?$").unwrap();
    let https =
        Regex::new(r"^https?://github\.com/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?$").unwrap();
    let (owner, name) = if let Some(c) = ssh.captures(url) {
        (c["owner"].to_string(), c["repo"].to_string())
    } else if let Some(c) = https.captures(url) {
        (c["owner"].to_string(), c["repo"].to_string())
    } else {
        bail!("unsupported remote URL (expected GitHub): {}", url);
    };
    Ok(RepoContext { owner, name })
}
