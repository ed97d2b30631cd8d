mod config;
mod context;
mod github;
mod output;
mod readiness;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::readiness::Readiness;

#[derive(Parser, Debug)]
#[command(
    name = "release-ready",
    version,
    about = "Check whether a GitHub release is production ready",
    long_about = None
)]
struct Cli {
    /// Git tag of the release to inspect
    #[arg(long = "release-tag", env = "RELEASE_TAG")]
    release_tag: String,

    /// GitHub token used for the release lookup
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Fail the run instead of just logging when the release is not production ready
    #[arg(
        long = "fail-for-prerelease",
        env = "FAIL_FOR_PRERELEASE",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    fail_for_prerelease: Option<bool>,

    /// Resolve inputs and repository context without calling the GitHub API
    #[arg(long = "dry-run", default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let tag = cli.release_tag.trim();
    if tag.is_empty() {
        bail!("release-tag must not be empty");
    }

    let ctx = context::resolve()
        .await
        .context("failed to resolve repository context")?;
    let cfg = config::load_config(std::path::Path::new(".")).await?;
    // Explicit flag or env wins over the config-file default.
    let fail_for_prerelease = cli
        .fail_for_prerelease
        .or(cfg.fail_for_prerelease)
        .unwrap_or(false);

    if cli.dry_run {
        println!(
            "check: dry-run (repo={}/{} tag={} fail_for_prerelease={})",
            ctx.owner, ctx.name, tag, fail_for_prerelease
        );
        return Ok(());
    }

    let gh = github::client(cli.token.as_deref())?;
    tracing::info!(
        "checking production readiness of '{}' in {}/{}",
        tag,
        ctx.owner,
        ctx.name
    );
    let readiness = readiness::check_release(&gh, &ctx, tag).await?;
    report(&readiness, tag, fail_for_prerelease).await
}

/// Route the messages through the selected severity, write the output, and
/// decide the exit. The output is written on every path, including the
/// escalated one.
async fn report(readiness: &Readiness, tag: &str, fail_for_prerelease: bool) -> Result<()> {
    for message in &readiness.messages {
        if readiness.production_ready || !fail_for_prerelease {
            tracing::info!("{message}");
        } else {
            tracing::error!("{message}");
        }
    }

    output::write("PRODUCTION_READY", readiness.production_ready).await?;

    if !readiness.production_ready && fail_for_prerelease {
        bail!("release '{}' is not production ready", tag);
    }

    Ok(())
}
