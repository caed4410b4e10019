//! Client for the remote daily-stats endpoint.
//!
//! One read-only GET per page load; failures surface as a terminal display
//! state, never as a retry loop.

use thiserror::Error;

use super::stats::StatsResponse;

/// Production endpoint of the companion bot's backend.
const DEFAULT_API_BASE: &str = "https://dayline-bot.onrender.com/api";

/// Stats API base URL, overridable at build time via `DAYLINE_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("DAYLINE_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// URL of the stats document for one user.
pub fn stats_url(base: &str, user_id: &str) -> String {
    format!("{}/stats/{}", base.trim_end_matches('/'), user_id)
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("stats request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("stats endpoint answered {status}")]
    Status { status: u16 },
}

/// Fetch the stats document for `user_id`. `Ok(None)` means the endpoint
/// answered successfully with an empty (`null`) payload; the caller shows
/// the no-data state for that.
pub async fn fetch_stats(
    base: &str,
    user_id: &str,
) -> Result<Option<StatsResponse>, FetchError> {
    let url = stats_url(base, user_id);
    tracing::debug!(%url, "requesting daily stats");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "stats endpoint returned non-success");
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response.json::<Option<StatsResponse>>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_url_joins_base_and_user() {
        assert_eq!(
            stats_url("https://example.org/api", "42"),
            "https://example.org/api/stats/42"
        );
    }

    #[test]
    fn stats_url_tolerates_trailing_slash() {
        assert_eq!(
            stats_url("https://example.org/api/", "42"),
            "https://example.org/api/stats/42"
        );
    }

    #[test]
    fn api_base_has_a_default() {
        assert!(api_base().starts_with("https://"));
    }
}
