use anyhow::Result;
use octocrab::Octocrab;
use reqwest::StatusCode;

use crate::context::RepoContext;

/// Outcome of a single readiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readiness {
    pub production_ready: bool,
    pub messages: Vec<String>,
}

/// Look up a release by tag and decide whether it is production ready.
///
/// The API only resolves published releases by tag, so drafts surface as
/// not-found and land in the lookup-failure result together with unknown
/// tags. A failed lookup never errors the check itself.
pub async fn check_release(gh: &Octocrab, ctx: &RepoContext, tag: &str) -> Result<Readiness> {
    let result = gh
        .repos(ctx.owner.clone(), ctx.name.clone())
        .releases()
        .get_by_tag(tag)
        .await;
    match result {
        Ok(release) => Ok(evaluate(tag, release.draft, release.prerelease)),
        Err(err) => {
            if !is_not_found(&err) {
                tracing::warn!("release lookup for '{}' failed: {}", tag, err);
            }
            Ok(lookup_failed(tag))
        }
    }
}

pub fn evaluate(tag: &str, draft: bool, prerelease: bool) -> Readiness {
    if !draft && !prerelease {
        return Readiness {
            production_ready: true,
            messages: vec![format!("Release '{tag}' is production ready.")],
        };
    }
    let mut messages = Vec::new();
    if draft {
        messages.push(format!(
            "Release '{tag}' is not production ready, it is marked as a draft."
        ));
    }
    if prerelease {
        messages.push(format!(
            "Release '{tag}' is not production ready, it is marked as a pre-release."
        ));
    }
    Readiness {
        production_ready: false,
        messages,
    }
}

pub fn lookup_failed(tag: &str) -> Readiness {
    Readiness {
        production_ready: false,
        messages: vec![format!(
            "Release '{tag}' is not production ready, it is either a draft release or it was not found."
        )],
    }
}

fn is_not_found(err: &octocrab::Error) -> bool {
    if let octocrab::Error::GitHub { source, .. } = err {
        return source.status_code == StatusCode::NOT_FOUND;
    }
    false
}
