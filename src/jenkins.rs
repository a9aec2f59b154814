use crate::error::TriggerError;
use reqwest::Url;
use tracing::debug;

/// Client for a Jenkins remote build trigger (`POST <job url>?token=<token>`).
pub struct JenkinsClient {
    url: Url,
    token: String,
    client: reqwest::Client,
}

impl JenkinsClient {
    pub fn new(url: Url, token: String) -> Self {
        Self {
            url,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Fires the build trigger once. Any 2xx counts as success; the response
    /// body is ignored.
    pub async fn trigger_build(&self) -> Result<(), TriggerError> {
        debug!(
            "Triggering build at {}{}",
            self.url.origin().ascii_serialization(),
            self.url.path()
        );

        let response = self
            .client
            .post(self.url.clone())
            .query(&[("token", self.token.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriggerError::Status(status.as_u16()));
        }

        Ok(())
    }
}
