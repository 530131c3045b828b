//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use termcard_config::Config;

/// termcard - neofetch-style GitHub profile cards as SVG
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub personal access token (falls back to the config file, then `gh auth token`)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub user to profile
    #[arg(long, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Years of contribution history to fetch (defaults to the account age)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub years: Option<u32>,

    /// Output file for the dark-mode document
    #[arg(long, value_name = "PATH")]
    pub output_dark: Option<PathBuf>,

    /// Output file for the light-mode document
    #[arg(long, value_name = "PATH")]
    pub output_light: Option<PathBuf>,

    /// Wrap the documents in macOS-style window chrome
    #[arg(long)]
    pub macos_window: bool,

    /// Configuration file to use instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Overrides `config` with the values given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(username) = self.username.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            config.username = Some(username.to_string());
        }
        if self.years.is_some() {
            config.years = self.years;
        }
        if let Some(path) = &self.output_dark {
            config.output.dark.clone_from(path);
        }
        if let Some(path) = &self.output_light {
            config.output.light.clone_from(path);
        }
        config.output.macos_window |= self.macos_window;
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "termcard=debug,termcard_github=debug,termcard_layout=debug,termcard_render=debug,termcard_config=debug"
        } else {
            "termcard=info,termcard_github=info,termcard_render=info,warn"
        }
    }
}
