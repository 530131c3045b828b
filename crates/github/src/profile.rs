//! Profile and repository queries.

use serde_json::json;
use termcard_protocol::UserProfile;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use crate::model::{Connection, ProfileData, Repositories, RepositoriesData, RepositoryNode};
use crate::queries;

/// Pagination state of one repository connection.
#[derive(Debug, Default)]
struct PageCursor {
    after: Option<String>,
    done: bool,
}

impl PageCursor {
    /// Takes the nodes of `page` and advances the cursor.
    ///
    /// A missing page or a page without a next cursor ends the connection.
    fn absorb(&mut self, page: Option<Connection<RepositoryNode>>, into: &mut Vec<RepositoryNode>) {
        let Some(page) = page else {
            self.done = true;
            return;
        };

        into.extend(page.nodes.into_iter().flatten());
        match page.page_info.end_cursor {
            Some(cursor) if page.page_info.has_next_page => self.after = Some(cursor),
            _ => self.done = true,
        }
    }
}

impl GitHubClient {
    /// Fetches the profile and activity counters of `username`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if the user does not exist, or an API
    /// error if the query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use secrecy::SecretString;
    /// use termcard_github::GitHubClient;
    ///
    /// # async fn example() -> termcard_github::Result<()> {
    /// let client = GitHubClient::new(Some(SecretString::from("ghp_xxx".to_string()))).await?;
    /// let profile = client.fetch_profile("octocat").await?;
    /// println!("{} has {} followers", profile.display_name(), profile.followers);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, username: &str) -> Result<UserProfile> {
        let data: ProfileData = self
            .graphql(queries::PROFILE, json!({ "username": username }))
            .await?;
        let user = data.user.ok_or_else(|| Error::UserNotFound {
            login: username.to_string(),
        })?;

        debug!(login = %user.login, "fetched profile");
        Ok(user.into())
    }

    /// Fetches every repository `username` owns or contributed to.
    ///
    /// Both connections are paginated independently, 100 repositories per
    /// page, most recently pushed first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if the user does not exist, or an API
    /// error if a page cannot be fetched.
    #[instrument(skip(self))]
    pub async fn fetch_repositories(&self, username: &str) -> Result<Repositories> {
        let mut repositories = Repositories::default();
        let mut owned = PageCursor::default();
        let mut contributed = PageCursor::default();

        while !(owned.done && contributed.done) {
            let variables = json!({
                "username": username,
                "ownedCursor": owned.after,
                "contributedCursor": contributed.after,
                "withOwned": !owned.done,
                "withContributed": !contributed.done,
            });
            let data: RepositoriesData = self.graphql(queries::REPOSITORIES, variables).await?;
            let user = data.user.ok_or_else(|| Error::UserNotFound {
                login: username.to_string(),
            })?;

            if !owned.done {
                owned.absorb(user.repositories, &mut repositories.owned);
            }
            if !contributed.done {
                contributed.absorb(user.repositories_contributed_to, &mut repositories.contributed);
            }
        }

        debug!(
            owned = repositories.owned.len(),
            contributed = repositories.contributed.len(),
            "fetched repositories"
        );
        Ok(repositories)
    }
}
