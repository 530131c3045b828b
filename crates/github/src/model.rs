//! Response shapes of the GraphQL queries in [`crate::queries`].
//!
//! Every nested object GitHub may return as `null` is an `Option`, and list
//! entries are `Option<T>` because GraphQL nodes are nullable too.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use termcard_protocol::UserProfile;

use crate::error::{Error, Result};

/// Envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Query result, absent on hard failures.
    pub data: Option<T>,
    /// Errors reported by the API.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Returns the data, or the reported errors if there are any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphQl`] if the response carries errors or no data.
    pub fn into_result(self) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(Error::GraphQl {
                errors: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        self.data.ok_or_else(|| Error::GraphQl {
            errors: vec!["response contained no data".to_string()],
        })
    }
}

/// A single GraphQL error.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human-readable message.
    pub message: String,
}

/// `{ totalCount }` connection summary.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    /// Number of items in the connection.
    pub total_count: u64,
}

/// Result of [`crate::queries::VIEWER`].
#[derive(Debug, Deserialize)]
pub struct ViewerData {
    /// The token owner.
    pub viewer: Option<Login>,
}

/// `{ login }` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Login {
    /// GitHub login.
    pub login: String,
}

/// Result of [`crate::queries::PROFILE`].
#[derive(Debug, Deserialize)]
pub struct ProfileData {
    /// The user, `None` when not found.
    pub user: Option<UserNode>,
}

/// Open pull request with its draft flag.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFlag {
    /// Whether the pull request is a draft.
    #[serde(default)]
    pub is_draft: bool,
}

/// List of open pull requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestNodes {
    /// Pull requests, possibly `null` entries.
    #[serde(default)]
    pub nodes: Vec<Option<DraftFlag>>,
}

/// The `user` object of the profile query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub followers: TotalCount,
    #[serde(default)]
    pub repositories: TotalCount,
    #[serde(default)]
    pub repositories_contributed_to: TotalCount,
    #[serde(default)]
    pub starred_repositories: TotalCount,
    #[serde(default)]
    pub issues: TotalCount,
    #[serde(default)]
    pub closed_issues: TotalCount,
    #[serde(default)]
    pub pull_requests: TotalCount,
    #[serde(default)]
    pub open_pull_requests: PullRequestNodes,
    #[serde(default)]
    pub merged_pull_requests: TotalCount,
    #[serde(default)]
    pub closed_pull_requests: TotalCount,
}

impl UserNode {
    /// Number of fetched open pull requests flagged as drafts.
    #[must_use]
    pub fn draft_pull_requests(&self) -> u64 {
        self.open_pull_requests
            .nodes
            .iter()
            .flatten()
            .filter(|pr| pr.is_draft)
            .count() as u64
    }
}

impl From<UserNode> for UserProfile {
    fn from(user: UserNode) -> Self {
        let draft_pull_requests = user.draft_pull_requests();
        Self {
            login: user.login,
            name: user.name,
            bio: user.bio,
            created_at: user.created_at,
            repositories: user.repositories.total_count,
            repositories_contributed: user.repositories_contributed_to.total_count,
            stars: user.starred_repositories.total_count,
            followers: user.followers.total_count,
            open_issues: user.issues.total_count,
            closed_issues: user.closed_issues.total_count,
            open_pull_requests: user.pull_requests.total_count,
            draft_pull_requests,
            merged_pull_requests: user.merged_pull_requests.total_count,
            closed_pull_requests: user.closed_pull_requests.total_count,
        }
    }
}

/// `{ name color }` language object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageNode {
    /// Language name.
    pub name: String,
    /// GitHub's colour for the language, if it has one.
    pub color: Option<String>,
}

/// Cursor information of a paginated connection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether more pages follow.
    pub has_next_page: bool,
    /// Cursor to pass as `after` for the next page.
    pub end_cursor: Option<String>,
}

/// A page of a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Pagination state.
    #[serde(default)]
    pub page_info: PageInfo,
    /// Items of this page.
    #[serde(default = "Vec::new")]
    pub nodes: Vec<Option<T>>,
}

/// A repository from the repositories query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    /// Repository name.
    pub name: String,
    /// Owner login.
    pub owner: Login,
    /// Whether the repository is private.
    #[serde(default)]
    pub is_private: bool,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub is_fork: bool,
    /// Primary language, if GitHub detected one.
    pub primary_language: Option<LanguageNode>,
}

impl RepositoryNode {
    /// `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// Result of [`crate::queries::REPOSITORIES`].
#[derive(Debug, Deserialize)]
pub struct RepositoriesData {
    /// The user, `None` when not found.
    pub user: Option<RepositoriesUser>,
}

/// The two repository connections of a user. A connection is `None` when it
/// was excluded from the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoriesUser {
    /// Owned repositories.
    pub repositories: Option<Connection<RepositoryNode>>,
    /// Repositories contributed to.
    pub repositories_contributed_to: Option<Connection<RepositoryNode>>,
}

/// All repositories of a user.
#[derive(Debug, Clone, Default)]
pub struct Repositories {
    /// Owned repositories.
    pub owned: Vec<RepositoryNode>,
    /// Repositories contributed to.
    pub contributed: Vec<RepositoryNode>,
}

impl Repositories {
    /// Iterates over owned, then contributed repositories.
    pub fn iter(&self) -> impl Iterator<Item = &RepositoryNode> {
        self.owned.iter().chain(&self.contributed)
    }
}

/// Result of [`crate::queries::CONTRIBUTIONS`].
#[derive(Debug, Deserialize)]
pub struct ContributionsData {
    /// The user, `None` when not found.
    pub user: Option<ContributionsUser>,
}

/// The `user` object of the contributions query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    /// Contributions in the requested window.
    pub contributions_collection: Option<ContributionsCollection>,
}

/// Commit contributions of one time window.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    /// All commit contributions, restricted ones included.
    #[serde(default)]
    pub total_commit_contributions: u64,
    /// Per-repository breakdown of visible contributions.
    #[serde(default)]
    pub commit_contributions_by_repository: Vec<Option<RepositoryContribution>>,
}

/// Commit contributions to one repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryContribution {
    /// The repository.
    pub repository: Option<ContributedRepository>,
    /// Contribution count.
    pub contributions: Option<TotalCount>,
}

impl RepositoryContribution {
    /// Commits reported for this repository.
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.contributions.map_or(0, |c| c.total_count)
    }
}

/// A repository as seen from the contributions query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributedRepository {
    /// Repository name.
    pub name: String,
    /// Owner login.
    pub owner: Login,
    /// Primary language, if detected.
    pub primary_language: Option<LanguageNode>,
    /// Up to ten languages by size, largest first.
    pub languages: Option<LanguageEdges>,
}

impl ContributedRepository {
    /// `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// `languages { edges { size node } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageEdges {
    /// Language edges.
    #[serde(default)]
    pub edges: Vec<Option<LanguageEdge>>,
}

/// A language and the bytes of code written in it.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEdge {
    /// Bytes of code.
    #[serde(default)]
    pub size: u64,
    /// The language.
    pub node: Option<LanguageNode>,
}
