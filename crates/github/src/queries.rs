//! GraphQL documents sent to the GitHub API.

/// Login of the token owner.
pub const VIEWER: &str = r"
query {
  viewer {
    login
  }
}
";

/// Profile fields and activity counters.
///
/// Draft pull requests have no dedicated counter, so the first 100 open pull
/// requests are fetched and their `isDraft` flags counted.
pub const PROFILE: &str = r"
query($username: String!) {
  user(login: $username) {
    name
    login
    bio
    createdAt
    followers { totalCount }
    repositories(ownerAffiliations: [OWNER]) { totalCount }
    repositoriesContributedTo { totalCount }
    starredRepositories { totalCount }
    issues(states: [OPEN]) { totalCount }
    closedIssues: issues(states: [CLOSED]) { totalCount }
    pullRequests(states: [OPEN]) { totalCount }
    openPullRequests: pullRequests(states: [OPEN], first: 100) {
      nodes { isDraft }
    }
    mergedPullRequests: pullRequests(states: [MERGED]) { totalCount }
    closedPullRequests: pullRequests(states: [CLOSED]) { totalCount }
  }
}
";

/// One page of owned and contributed-to repositories.
///
/// Each connection has its own cursor and is skipped once exhausted.
pub const REPOSITORIES: &str = r"
query(
  $username: String!,
  $ownedCursor: String,
  $contributedCursor: String,
  $withOwned: Boolean!,
  $withContributed: Boolean!
) {
  user(login: $username) {
    repositories(first: 100, after: $ownedCursor, orderBy: {field: PUSHED_AT, direction: DESC})
      @include(if: $withOwned) {
      pageInfo { hasNextPage endCursor }
      nodes { ...repositoryFields }
    }
    repositoriesContributedTo(first: 100, after: $contributedCursor, orderBy: {field: PUSHED_AT, direction: DESC})
      @include(if: $withContributed) {
      pageInfo { hasNextPage endCursor }
      nodes { ...repositoryFields }
    }
  }
}

fragment repositoryFields on Repository {
  name
  owner { login }
  isPrivate
  isFork
  primaryLanguage { name color }
}
";

/// Commit contributions by repository within a time window (at most a year).
pub const CONTRIBUTIONS: &str = r"
query($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to) {
      totalCommitContributions
      commitContributionsByRepository {
        repository {
          name
          owner { login }
          primaryLanguage { name color }
          languages(first: 10, orderBy: {field: SIZE, direction: DESC}) {
            edges {
              size
              node { name color }
            }
          }
        }
        contributions(first: 100) { totalCount }
      }
    }
  }
}
";
