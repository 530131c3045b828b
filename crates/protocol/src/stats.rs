//! Profile statistics gathered from GitHub.
//!
//! These types are filled in by the GitHub client and consumed by the card
//! content builder and the SVG assembler.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Basic profile information and activity counters for a GitHub user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login handle.
    pub login: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// Profile bio, if set.
    pub bio: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
    /// Repositories owned by the user.
    pub repositories: u64,
    /// Repositories the user contributed to.
    pub repositories_contributed: u64,
    /// Repositories starred by the user.
    pub stars: u64,
    /// Follower count.
    pub followers: u64,
    /// Open issues authored by the user.
    pub open_issues: u64,
    /// Closed issues authored by the user.
    pub closed_issues: u64,
    /// Open pull requests, drafts included.
    pub open_pull_requests: u64,
    /// Open pull requests that are drafts.
    pub draft_pull_requests: u64,
    /// Merged pull requests.
    pub merged_pull_requests: u64,
    /// Closed (unmerged) pull requests.
    pub closed_pull_requests: u64,
}

impl UserProfile {
    /// Returns the display name, falling back to the login.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_protocol::UserProfile;
    ///
    /// let profile = UserProfile { login: "octocat".into(), ..Default::default() };
    /// assert_eq!(profile.display_name(), "octocat");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    /// Open pull requests that are not drafts.
    #[must_use]
    pub fn ready_pull_requests(&self) -> u64 {
        self.open_pull_requests
            .saturating_sub(self.draft_pull_requests)
    }
}

/// Commit statistics attributed to one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    /// Commits attributed to the language.
    pub commits: u64,
    /// Estimated added lines.
    pub additions: u64,
    /// Estimated deleted lines.
    pub deletions: u64,
    /// Display colour, `#rrggbb`.
    pub color: String,
    /// Commits per repository (`owner/name`).
    pub repos: BTreeMap<String, u64>,
}

impl LanguageStat {
    /// Adds commits for a repository.
    pub fn add_commits(&mut self, repo: &str, commits: u64) {
        self.commits += commits;
        *self.repos.entry(repo.to_string()).or_default() += commits;
    }
}

/// A language's share of all attributed commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    /// Language name.
    pub name: String,
    /// Share of commits, 0 to 100.
    pub percentage: f64,
    /// Commits attributed to the language.
    pub commits: u64,
    /// Estimated net line change.
    pub net: i64,
    /// Display colour.
    pub color: String,
    /// Commits per repository.
    pub repos: BTreeMap<String, u64>,
}

/// Everything the card needs about a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Profile and counters.
    pub profile: UserProfile,
    /// Commits across all fetched years.
    pub total_commits: u64,
    /// Per-language statistics.
    pub languages: BTreeMap<String, LanguageStat>,
    /// Whether the token belongs to the profiled user, so private
    /// contributions are counted.
    pub includes_private: bool,
}

impl ProfileStats {
    /// Computes the per-language share of commits, largest first.
    ///
    /// Languages without commits are left out. Returns an empty list when no
    /// commits were attributed at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_protocol::{LanguageStat, ProfileStats};
    ///
    /// let mut stats = ProfileStats::default();
    /// stats.languages.insert("Rust".into(), LanguageStat { commits: 3, ..Default::default() });
    /// stats.languages.insert("Go".into(), LanguageStat { commits: 1, ..Default::default() });
    ///
    /// let shares = stats.language_shares();
    /// assert_eq!(shares[0].name, "Rust");
    /// assert_eq!(shares[0].percentage, 75.0);
    /// ```
    #[must_use]
    pub fn language_shares(&self) -> Vec<LanguageShare> {
        let total: u64 = self.languages.values().map(|l| l.commits).sum();
        if total == 0 {
            return Vec::new();
        }

        let mut shares: Vec<LanguageShare> = self
            .languages
            .iter()
            .filter(|(_, stat)| stat.commits > 0)
            .map(|(name, stat)| LanguageShare {
                name: name.clone(),
                percentage: stat.commits as f64 / total as f64 * 100.0,
                commits: stat.commits,
                net: stat.additions as i64 - stat.deletions as i64,
                color: stat.color.clone(),
                repos: stat.repos.clone(),
            })
            .collect();

        shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(commits: u64) -> LanguageStat {
        LanguageStat {
            commits,
            ..Default::default()
        }
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut profile = UserProfile {
            login: "octocat".into(),
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "octocat");

        profile.name = Some("The Octocat".into());
        assert_eq!(profile.display_name(), "The Octocat");
    }

    #[test]
    fn ready_pull_requests_excludes_drafts() {
        let profile = UserProfile {
            open_pull_requests: 5,
            draft_pull_requests: 2,
            ..Default::default()
        };
        assert_eq!(profile.ready_pull_requests(), 3);
    }

    #[test]
    fn add_commits_tracks_repos() {
        let mut lang = LanguageStat::default();
        lang.add_commits("a/b", 3);
        lang.add_commits("a/b", 2);
        lang.add_commits("c/d", 1);
        assert_eq!(lang.commits, 6);
        assert_eq!(lang.repos["a/b"], 5);
        assert_eq!(lang.repos["c/d"], 1);
    }

    #[test]
    fn shares_empty_without_commits() {
        let mut stats = ProfileStats::default();
        stats.languages.insert("Rust".into(), stat(0));
        assert!(stats.language_shares().is_empty());
    }

    #[test]
    fn shares_skip_zero_commit_languages() {
        let mut stats = ProfileStats::default();
        stats.languages.insert("Rust".into(), stat(4));
        stats.languages.insert("C".into(), stat(0));
        let shares = stats.language_shares();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percentage, 100.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Shares always sum to 100% and come out sorted largest first.
        #[test]
        fn shares_sum_to_hundred(commits in proptest::collection::vec(1u64..10_000, 1..12)) {
            let mut stats = ProfileStats::default();
            for (i, c) in commits.iter().enumerate() {
                stats.languages.insert(format!("lang{i}"), LanguageStat { commits: *c, ..Default::default() });
            }

            let shares = stats.language_shares();
            let sum: f64 = shares.iter().map(|s| s.percentage).sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
            for pair in shares.windows(2) {
                prop_assert!(pair[0].percentage >= pair[1].percentage);
            }
        }
    }
}
