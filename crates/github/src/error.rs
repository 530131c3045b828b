//! Error types for GitHub API operations.

/// Errors that can occur while talking to GitHub.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request failed or GitHub answered with an error status.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// A GraphQL query returned errors instead of (or alongside) data.
    #[error("GraphQL query failed: {}", errors.join("; "))]
    GraphQl {
        /// Error messages reported by the API.
        errors: Vec<String>,
    },

    /// The requested user does not exist or is not visible to the token.
    #[error("user '{login}' not found or not accessible")]
    UserNotFound {
        /// The login that was looked up.
        login: String,
    },

    /// The token was rejected.
    #[error("token validation failed: {reason}")]
    TokenValidation {
        /// A description of why validation failed.
        reason: String,
    },
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_graphql() {
        let err = Error::GraphQl {
            errors: vec![
                "Field 'foo' doesn't exist".to_string(),
                "rate limited".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "GraphQL query failed: Field 'foo' doesn't exist; rate limited"
        );
    }

    #[test]
    fn error_display_user_not_found() {
        let err = Error::UserNotFound {
            login: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "user 'ghost' not found or not accessible");
    }

    #[test]
    fn error_display_token_validation() {
        let err = Error::TokenValidation {
            reason: "Bad credentials".to_string(),
        };
        assert_eq!(err.to_string(), "token validation failed: Bad credentials");
    }
}
