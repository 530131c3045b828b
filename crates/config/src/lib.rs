//! Configuration management for the termcard application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files and defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`layout`]: Column budgets of the card, validated up front
//! - [`card`]: The configurable list of card lines
//! - [`languages`]: Language colour table
//! - [`auth`]: GitHub token resolution
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Command-line flags and `GITHUB_*` environment variables (handled by the binary)
//! 2. Local config (`./termcard.json5` or `./termcard.json`)
//! 3. User config (`~/.config/termcard/config.json5` or `~/.config/termcard/config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```json5
//! {
//!   username: "octocat",
//!   layout: { total_width: 75, min_dots: 8, max_lines: 5, overflow_line_width: 60 },
//!   card: [
//!     "bio",
//!     "uptime",
//!     { key: "Editors", value: "Helix, Zed" },
//!     "gap",
//!     { section: "GitHub Statistics" },
//!     "repository", "commits", "issues", "pull_requests",
//!   ],
//! }
//! ```
//!
//! ```no_run
//! use termcard_config::Config;
//!
//! # fn example() -> termcard_config::Result<()> {
//! let config = Config::load()?;
//! println!("Cards are {} columns wide", config.layout.total_width);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod card;
pub mod config;
pub mod error;
pub mod languages;
pub mod layout;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use card::{CardDefinition, CardItem, StatKind};
pub use config::{Config, OutputConfig};
pub use error::{ConfigError, Result};
pub use languages::LanguageColors;
pub use layout::LayoutConfig;
