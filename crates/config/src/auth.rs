//! GitHub token resolution.
//!
//! Tokens are looked up in this order:
//!
//! 1. Explicit token (`--token` flag or `GITHUB_TOKEN`, both handled by the CLI)
//! 2. `github_token` from the configuration file
//! 3. `gh auth token` command (GitHub CLI)
//! 4. Unauthenticated (returns `None`)

use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

/// Resolves the GitHub token to use.
///
/// Empty or whitespace-only tokens are treated as absent. Failures of the
/// `gh` CLI are logged and treated as "no token".
///
/// # Examples
///
/// ```no_run
/// use termcard_config::auth::resolve_token;
///
/// # async fn example() {
/// let token = resolve_token(None, Some("ghp_from_config")).await;
/// assert_eq!(token.as_deref(), Some("ghp_from_config"));
/// # }
/// ```
pub async fn resolve_token(explicit: Option<&str>, configured: Option<&str>) -> Option<String> {
    let non_empty = |token: &&str| !token.trim().is_empty();

    if let Some(token) = explicit.filter(non_empty) {
        debug!("using explicitly provided GitHub token");
        return Some(token.trim().to_string());
    }

    if let Some(token) = configured.filter(non_empty) {
        debug!("using GitHub token from config file");
        return Some(token.trim().to_string());
    }

    match get_gh_token().await {
        Ok(token) => token,
        Err(e) => {
            warn!(error = %e, "could not read token from gh CLI");
            None
        }
    }
}

/// Gets a GitHub token from the `gh` CLI.
///
/// # Returns
///
/// - `Ok(Some(token))` if `gh auth token` prints a token
/// - `Ok(None)` if `gh` is not installed or not logged in
/// - `Err(...)` if the command exists but fails otherwise
///
/// # Errors
///
/// Returns [`ConfigError::GhAuthFailed`] if the command cannot be spawned and
/// [`ConfigError::GhAuthError`] if it exits unsuccessfully.
pub async fn get_gh_token() -> Result<Option<String>> {
    use tokio::process::Command;

    let output = match Command::new("gh").args(["auth", "token"]).output().await {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("gh CLI not installed");
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::GhAuthFailed(e)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if is_logged_out(&stderr) {
            debug!("gh CLI is not logged in");
            return Ok(None);
        }
        return Err(ConfigError::GhAuthError {
            code: output.status.code(),
            stderr,
        });
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!token.is_empty()).then_some(token))
}

fn is_logged_out(stderr: &str) -> bool {
    stderr.contains("not logged in") || stderr.contains("no oauth token")
}
