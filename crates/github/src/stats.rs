//! Language statistics aggregation.
//!
//! GitHub does not report which language a commit touched, so commits are
//! attributed by repository: a repository's commits are spread over its
//! languages in proportion to their code size, falling back to the primary
//! language when no sizes are known. Additions and deletions are rough
//! estimates derived from code size.
//!
//! Everything here is pure; the network side lives in
//! [`GitHubClient::fetch_stats`](crate::GitHubClient::fetch_stats).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use termcard_config::LanguageColors;
use termcard_protocol::{LanguageStat, ProfileStats, UserProfile};
use tracing::{debug, trace};

use crate::model::{ContributionsCollection, LanguageNode, Repositories};

/// Repositories with fewer GraphQL-reported commits than this are re-counted
/// through the REST API, which sees commits the contributions graph misses.
pub const SMALL_REPO_THRESHOLD: u64 = 10;

/// A repository that should be re-counted through the REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecountCandidate {
    /// Owner login.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Commits the contributions graph reported for the year.
    pub reported: u64,
}

impl RecountCandidate {
    /// `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Accumulates commit statistics year by year.
///
/// # Examples
///
/// ```
/// use termcard_config::LanguageColors;
/// use termcard_github::stats::StatsBuilder;
/// use termcard_github::model::Repositories;
/// use termcard_protocol::UserProfile;
///
/// let colors = LanguageColors::default();
/// let builder = StatsBuilder::new(&colors, &Repositories::default());
/// let stats = builder.finish(UserProfile::default(), false);
/// assert_eq!(stats.total_commits, 0);
/// ```
#[derive(Debug)]
pub struct StatsBuilder<'a> {
    colors: &'a LanguageColors,
    primary_languages: BTreeMap<String, (String, String)>,
    languages: BTreeMap<String, LanguageStat>,
    total_commits: u64,
}

impl<'a> StatsBuilder<'a> {
    /// Creates a builder that knows the primary language of `repositories`.
    #[must_use]
    pub fn new(colors: &'a LanguageColors, repositories: &Repositories) -> Self {
        let primary_languages = repositories
            .iter()
            .filter_map(|repo| {
                let language = repo.primary_language.as_ref()?;
                let color = resolve_color(colors, language);
                Some((repo.full_name(), (language.name.clone(), color)))
            })
            .collect();

        Self {
            colors,
            primary_languages,
            languages: BTreeMap::new(),
            total_commits: 0,
        }
    }

    /// Adds one year of contributions and returns the repositories that
    /// should be re-counted with [`add_recounted`](Self::add_recounted).
    pub fn add_year(&mut self, year: &ContributionsCollection) -> Vec<RecountCandidate> {
        self.total_commits += year.total_commit_contributions;

        let mut recount = Vec::new();
        for contribution in year.commit_contributions_by_repository.iter().flatten() {
            let Some(repo) = &contribution.repository else {
                continue;
            };
            let commits = contribution.commit_count();
            let full_name = repo.full_name();

            if commits < SMALL_REPO_THRESHOLD {
                recount.push(RecountCandidate {
                    owner: repo.owner.login.clone(),
                    name: repo.name.clone(),
                    reported: commits,
                });
            }
            if commits == 0 {
                continue;
            }

            let edges: Vec<(&LanguageNode, u64)> = repo
                .languages
                .iter()
                .flat_map(|languages| languages.edges.iter().flatten())
                .filter_map(|edge| Some((edge.node.as_ref()?, edge.size)))
                .collect();
            let total_size: u64 = edges.iter().map(|(_, size)| size).sum();

            if total_size > 0 {
                for (language, size) in edges {
                    self.add_weighted(&full_name, language, commits, size, total_size);
                }
            } else if let Some(language) = &repo.primary_language {
                trace!(repo = %full_name, language = %language.name, "no language sizes, using primary language");
                let color = resolve_color(self.colors, language);
                self.language(&language.name, color)
                    .add_commits(&full_name, commits);
            }
        }

        recount
    }

    /// Adds commits found through the REST API beyond what the contributions
    /// graph reported. Returns the number of extra commits counted.
    ///
    /// Extra commits are attributed to the repository's primary language, if
    /// the repository is one of the user's known repositories.
    pub fn add_recounted(&mut self, candidate: &RecountCandidate, counted: u64) -> u64 {
        let extra = counted.saturating_sub(candidate.reported);
        if extra == 0 {
            return 0;
        }

        self.total_commits += extra;
        let full_name = candidate.full_name();
        if let Some((language, color)) = self.primary_languages.get(&full_name).cloned() {
            self.language(&language, color).add_commits(&full_name, extra);
        }
        debug!(repo = %full_name, extra, "counted additional commits");
        extra
    }

    /// Total commits accumulated so far.
    #[must_use]
    pub fn total_commits(&self) -> u64 {
        self.total_commits
    }

    /// Finishes aggregation.
    #[must_use]
    pub fn finish(self, profile: UserProfile, includes_private: bool) -> ProfileStats {
        ProfileStats {
            profile,
            total_commits: self.total_commits,
            languages: self.languages,
            includes_private,
        }
    }

    fn add_weighted(
        &mut self,
        repo: &str,
        language: &LanguageNode,
        commits: u64,
        size: u64,
        total_size: u64,
    ) {
        let weighted = commits * size / total_size;
        if weighted == 0 {
            return;
        }

        let color = resolve_color(self.colors, language);
        let stat = self.language(&language.name, color);
        stat.add_commits(repo, weighted);
        stat.additions += size * 3 / 10;
        stat.deletions += size / 10;
    }

    /// Returns the entry for `name`, updating its colour.
    fn language(&mut self, name: &str, color: String) -> &mut LanguageStat {
        let stat = self.languages.entry(name.to_string()).or_default();
        stat.color = color;
        stat
    }
}

/// GitHub's colour for a language, else the configured one, else the fallback.
fn resolve_color(colors: &LanguageColors, language: &LanguageNode) -> String {
    language
        .color
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| colors.resolve(&language.name).to_string())
}

/// Number of calendar years to fetch for an account: its age in whole
/// 365-day years, plus one, and at least one.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use termcard_github::stats::account_age_years;
///
/// let created = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
/// assert_eq!(account_age_years(created, now), 5);
/// ```
#[must_use]
pub fn account_age_years(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - created_at).num_days().max(0);
    u32::try_from(days / 365 + 1).unwrap_or(u32::MAX)
}
