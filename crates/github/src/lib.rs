//! GitHub API client for termcard.
//!
//! This crate collects everything a profile card shows: the user's profile
//! counters, the repositories they own or contributed to, and per-language
//! commit statistics aggregated over a number of calendar years.
//!
//! # Overview
//!
//! - [`GitHubClient`]: the API client, with optional authentication
//! - [`StatsBuilder`]: turns yearly contribution collections into
//!   [`ProfileStats`](termcard_protocol::ProfileStats)
//! - [`model`]: GraphQL response shapes
//! - [`Error`]: error types for GitHub API operations
//!
//! # Authentication
//!
//! The statistics come from the GraphQL API, which requires a token. Tokens
//! are handled with [`secrecy::SecretString`] so they never end up in logs.
//! When the token belongs to the user being queried, private contributions
//! are included and the card says so.
//!
//! # Small repositories
//!
//! GraphQL contribution counts are known to under-report for repositories
//! with few commits. Repositories below [`SMALL_REPO_THRESHOLD`] commits in
//! a year are recounted through the REST commit listing, and any excess is
//! added to the totals.
//!
//! # Examples
//!
//! ```no_run
//! use secrecy::SecretString;
//! use termcard_config::LanguageColors;
//! use termcard_github::GitHubClient;
//!
//! # async fn example() -> termcard_github::Result<()> {
//! let token = SecretString::from("ghp_your_token_here".to_string());
//! let client = GitHubClient::new(Some(token)).await?;
//!
//! let stats = client.fetch_stats("octocat", None, &LanguageColors::default()).await?;
//! for share in stats.language_shares().iter().take(5) {
//!     println!("{}: {:.1}%", share.name, share.percentage);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod contributions;
pub mod error;
pub mod model;
pub mod profile;
pub mod queries;
pub mod stats;

pub use client::GitHubClient;
pub use contributions::year_window;
pub use error::{Error, Result};
pub use model::Repositories;
pub use stats::{RecountCandidate, SMALL_REPO_THRESHOLD, StatsBuilder, account_age_years};
