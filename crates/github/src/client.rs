//! GitHub API client implementation.
//!
//! This module provides the [`GitHubClient`] struct. Profile, repository and
//! contribution queries are added by [`crate::profile`] and
//! [`crate::contributions`].

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::model::{GraphQlResponse, ViewerData};
use crate::queries;

/// GitHub API client with optional authentication.
///
/// The GraphQL API used for profile statistics requires a token; without
/// one only REST calls succeed, at 60 requests per hour.
///
/// # Security
///
/// Tokens are stored using [`SecretString`] to prevent accidental logging
/// or exposure in debug output.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use termcard_github::GitHubClient;
///
/// # async fn example() -> termcard_github::Result<()> {
/// let token = SecretString::from("ghp_your_token".to_string());
/// let client = GitHubClient::new(Some(token)).await?;
///
/// if let Some(login) = client.viewer_login().await? {
///     println!("Authenticated as {login}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    inner: Octocrab,
    /// Whether this client is authenticated.
    authenticated: bool,
}

impl GitHubClient {
    /// Creates a new GitHub client.
    ///
    /// # Errors
    ///
    /// Returns an error if the octocrab client fails to initialize.
    #[instrument(skip(token), fields(authenticated = token.is_some()))]
    pub async fn new(token: Option<SecretString>) -> Result<Self> {
        let builder = Octocrab::builder();
        let (builder, authenticated) = match token {
            Some(token) => {
                debug!("creating authenticated GitHub client");
                (builder.personal_token(token.expose_secret()), true)
            }
            None => {
                debug!("creating unauthenticated GitHub client");
                (builder, false)
            }
        };

        Ok(Self {
            inner: builder.build().map_err(Error::Api)?,
            authenticated,
        })
    }

    /// Returns whether this client was created with a token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the underlying octocrab client.
    #[must_use]
    pub fn inner(&self) -> &Octocrab {
        &self.inner
    }

    /// Runs a GraphQL query and returns its `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the request fails and [`Error::GraphQl`] if
    /// the response carries errors.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let payload = json!({ "query": query, "variables": variables });
        let response: GraphQlResponse<T> =
            self.inner.graphql(&payload).await.map_err(Error::Api)?;
        response.into_result()
    }

    /// Returns the login of the token owner.
    ///
    /// Returns `Ok(None)` for unauthenticated clients.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenValidation`] if GitHub rejects the token and
    /// [`Error::Api`] or [`Error::GraphQl`] for other failures.
    #[instrument(skip(self))]
    pub async fn viewer_login(&self) -> Result<Option<String>> {
        if !self.authenticated {
            debug!("client is not authenticated, no viewer");
            return Ok(None);
        }

        match self.graphql::<ViewerData>(queries::VIEWER, json!({})).await {
            Ok(data) => {
                let login = data.viewer.map(|v| v.login);
                debug!(login = ?login, "resolved token owner");
                Ok(login)
            }
            Err(Error::Api(octocrab::Error::GitHub { source, .. })) => {
                warn!(message = %source.message, "token validation failed");
                Err(Error::TokenValidation {
                    reason: source.message,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Returns `true` if the token belongs to `username`.
    ///
    /// Logins are compared case-insensitively. Errors are logged and treated
    /// as "not the viewer", since the answer only decides whether private
    /// contributions are mentioned on the card.
    #[instrument(skip(self))]
    pub async fn is_viewer(&self, username: &str) -> bool {
        match self.viewer_login().await {
            Ok(Some(login)) => login.eq_ignore_ascii_case(username),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "could not determine token owner");
                false
            }
        }
    }
}
