//! Contribution queries and the full statistics run.

use chrono::{Datelike, Utc};
use serde::Serialize;
use serde::de::IgnoredAny;
use serde_json::json;
use termcard_config::LanguageColors;
use termcard_protocol::ProfileStats;
use tracing::{debug, info, instrument, warn};

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use crate::model::{ContributionsCollection, ContributionsData, Repositories};
use crate::queries;
use crate::stats::{StatsBuilder, account_age_years};

/// Page size of the REST commit listing.
const COMMITS_PER_PAGE: usize = 100;

/// Query string of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Serialize)]
struct CommitsQuery<'a> {
    author: &'a str,
    since: &'a str,
    until: &'a str,
    per_page: usize,
    page: u32,
}

/// First and last instant of a calendar year, as ISO-8601 UTC timestamps.
///
/// # Examples
///
/// ```
/// use termcard_github::contributions::year_window;
///
/// let (from, to) = year_window(2024);
/// assert_eq!(from, "2024-01-01T00:00:00Z");
/// assert_eq!(to, "2024-12-31T23:59:59Z");
/// ```
#[must_use]
pub fn year_window(year: i32) -> (String, String) {
    (
        format!("{year:04}-01-01T00:00:00Z"),
        format!("{year:04}-12-31T23:59:59Z"),
    )
}

/// Calendar years to fetch, oldest first, ending with `current_year`.
fn years_to_fetch(current_year: i32, years: u32) -> std::ops::RangeInclusive<i32> {
    let span = i32::try_from(years.max(1)).unwrap_or(i32::MAX);
    current_year.saturating_sub(span - 1)..=current_year
}

impl GitHubClient {
    /// Fetches the commit contributions of `username` during `year`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if the user or the collection is
    /// missing, or an API error if the query fails.
    #[instrument(skip(self))]
    pub async fn fetch_year_contributions(
        &self,
        username: &str,
        year: i32,
    ) -> Result<ContributionsCollection> {
        let (from, to) = year_window(year);
        let data: ContributionsData = self
            .graphql(
                queries::CONTRIBUTIONS,
                json!({ "username": username, "from": from, "to": to }),
            )
            .await?;

        let collection = data
            .user
            .and_then(|user| user.contributions_collection)
            .ok_or_else(|| Error::UserNotFound {
                login: username.to_string(),
            })?;
        debug!(
            commits = collection.total_commit_contributions,
            repositories = collection.commit_contributions_by_repository.len(),
            "fetched contributions"
        );
        Ok(collection)
    }

    /// Counts the commits `author` made to `owner/repo` between `since` and
    /// `until` (ISO-8601), paging through the REST API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if a page cannot be fetched, e.g. for an empty
    /// repository.
    #[instrument(skip(self))]
    pub async fn count_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
        since: &str,
        until: &str,
    ) -> Result<u64> {
        let route = format!("/repos/{owner}/{repo}/commits");
        let mut total = 0;
        let mut page = 1;

        loop {
            let query = CommitsQuery {
                author,
                since,
                until,
                per_page: COMMITS_PER_PAGE,
                page,
            };
            let commits: Vec<IgnoredAny> = self
                .inner()
                .get(&route, Some(&query))
                .await
                .map_err(Error::Api)?;

            total += commits.len() as u64;
            if commits.len() < COMMITS_PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!(total, pages = page, "counted commits");
        Ok(total)
    }

    /// Gathers everything the card shows about `username`.
    ///
    /// `years` defaults to the account age (see [`account_age_years`]). Years
    /// and repositories that fail to load are logged and skipped; only a
    /// missing profile is fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be fetched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use secrecy::SecretString;
    /// use termcard_config::LanguageColors;
    /// use termcard_github::GitHubClient;
    ///
    /// # async fn example() -> termcard_github::Result<()> {
    /// let client = GitHubClient::new(Some(SecretString::from("ghp_xxx".to_string()))).await?;
    /// let stats = client.fetch_stats("octocat", Some(2), &LanguageColors::default()).await?;
    /// println!("{} commits", stats.total_commits);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, colors))]
    pub async fn fetch_stats(
        &self,
        username: &str,
        years: Option<u32>,
        colors: &LanguageColors,
    ) -> Result<ProfileStats> {
        let profile = self.fetch_profile(username).await?;
        info!(name = %profile.display_name(), "found user");

        let includes_private = self.is_viewer(username).await;
        let now = Utc::now();
        let years = years.unwrap_or_else(|| account_age_years(profile.created_at, now));

        let repositories = self
            .fetch_repositories(username)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "could not fetch repositories");
                Repositories::default()
            });
        info!(
            owned = repositories.owned.len(),
            contributed = repositories.contributed.len(),
            "found repositories"
        );

        let mut builder = StatsBuilder::new(colors, &repositories);
        for year in years_to_fetch(now.year(), years) {
            let collection = match self.fetch_year_contributions(username, year).await {
                Ok(collection) => collection,
                Err(e) => {
                    warn!(year, error = %e, "skipping year");
                    continue;
                }
            };

            let before = builder.total_commits();
            let (since, until) = year_window(year);
            let mut recounted = 0;
            for candidate in builder.add_year(&collection) {
                match self
                    .count_commits(&candidate.owner, &candidate.name, username, &since, &until)
                    .await
                {
                    Ok(counted) => recounted += builder.add_recounted(&candidate, counted),
                    Err(e) => {
                        warn!(repo = %candidate.full_name(), error = %e, "could not count commits");
                    }
                }
            }

            info!(
                year,
                commits = builder.total_commits() - before,
                graphql = collection.total_commit_contributions,
                rest = recounted,
                "collected contributions"
            );
        }

        let stats = builder.finish(profile, includes_private);
        info!(
            commits = stats.total_commits,
            languages = stats.languages.len(),
            "collected statistics"
        );
        Ok(stats)
    }
}
