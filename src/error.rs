use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure of the outbound build trigger. The display text is shown to the
/// Slack user as-is, so it never carries the trigger URL or its token.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),
}

impl From<reqwest::Error> for TriggerError {
    fn from(err: reqwest::Error) -> Self {
        TriggerError::Request(err.without_url())
    }
}
