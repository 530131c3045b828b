//! termcard - neofetch-style GitHub profile cards.
//!
//! Fetches a user's profile and per-language commit statistics from GitHub,
//! lays the card out at a fixed column width, and writes a dark and a light
//! SVG document.

mod cli;

use anyhow::{Context, bail};
use chrono::Utc;
use clap::Parser;
use secrecy::SecretString;
use termcard_config::Config;
use termcard_config::auth::resolve_token;
use termcard_github::GitHubClient;
use termcard_protocol::ProfileStats;
use termcard_render::{RenderOptions, Theme, render_card, save};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;
    debug!(layout = ?config.layout, "configuration loaded");

    let Some(username) = config.username.clone() else {
        bail!(
            "GitHub username is required. Provide it via --username, GITHUB_USERNAME, or the config file."
        );
    };
    let Some(token) = resolve_token(cli.token.as_deref(), config.github_token.as_deref()).await
    else {
        bail!(
            "GitHub token is required. Provide it via --token, GITHUB_TOKEN, the config file, or `gh auth login`."
        );
    };

    match config.years {
        Some(years) => info!(years, "collecting contribution data"),
        None => info!("collecting contribution data for the entire account history"),
    }

    let client = GitHubClient::new(Some(SecretString::from(token))).await?;
    let stats = client
        .fetch_stats(&username, config.years, &config.language_colors)
        .await
        .with_context(|| format!("failed to fetch statistics for {username}"))?;

    let generated_at = Utc::now();
    for theme in Theme::ALL {
        let options = RenderOptions {
            theme,
            macos_window: config.output.macos_window,
            generated_at,
        };
        let document = render_card(&config.layout, &config.card, &stats, &options)?;
        let path = match theme {
            Theme::Dark => &config.output.dark,
            Theme::Light => &config.output.light,
        };
        save(path, &document)?;
    }

    let suffix = if config.output.macos_window {
        " (with macOS window)"
    } else {
        ""
    };
    println!("Generated successfully{suffix}!");
    println!("Dark mode: {}", config.output.dark.display());
    println!("Light mode: {}", config.output.light.display());
    print_top_languages(&stats);

    Ok(())
}

/// Prints the ten largest languages with their per-repository commits.
fn print_top_languages(stats: &ProfileStats) {
    let shares = stats.language_shares();
    if shares.is_empty() {
        println!("\nNo language statistics found.");
        return;
    }

    println!("\nTop languages:");
    for (rank, share) in shares.iter().take(10).enumerate() {
        println!(
            "  {}. {}: {:.1}% ({} commits)",
            rank + 1,
            share.name,
            share.percentage,
            termcard_render::content::thousands(share.commits)
        );

        let mut repos: Vec<_> = share.repos.iter().collect();
        repos.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (repo, commits) in repos {
            println!(
                "      - {repo}: {} commits",
                termcard_render::content::thousands(*commits)
            );
        }
    }
}
