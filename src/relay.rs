use crate::config::Config;
use crate::error::TriggerError;
use crate::jenkins::JenkinsClient;
use crate::types::SlashCommand;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

/// The only command text that fires a build.
pub const DEPLOY_COMMAND: &str = "deploy-app";

/// What gets sent back to Slack for one slash command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Unauthorized,
    Triggered { user_name: String },
    TriggerFailed { message: String },
    UnknownCommand { text: String },
}

impl Reply {
    fn from_trigger(outcome: Result<(), TriggerError>, user_name: &str) -> Self {
        match outcome {
            Ok(()) => Reply::Triggered {
                user_name: user_name.to_string(),
            },
            Err(e) => Reply::TriggerFailed {
                message: e.to_string(),
            },
        }
    }

    /// Trigger failures still answer 200 so Slack shows the message to the user.
    pub fn status(&self) -> StatusCode {
        match self {
            Reply::Unauthorized => StatusCode::FORBIDDEN,
            _ => StatusCode::OK,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Reply::Unauthorized => "Unauthorized request.".to_string(),
            Reply::Triggered { user_name } => format!("✅ Deployment triggered by {}", user_name),
            Reply::TriggerFailed { message } => format!("❌ Failed: {}", message),
            Reply::UnknownCommand { text } => format!("🤖 Unknown command: `{}`", text),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}

pub struct CommandRelay {
    verification_token: String,
    jenkins: JenkinsClient,
}

impl CommandRelay {
    pub fn new(verification_token: String, jenkins: JenkinsClient) -> Self {
        Self {
            verification_token,
            jenkins,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.verification_token.clone(),
            JenkinsClient::new(config.jenkins_url.clone(), config.jenkins_token.clone()),
        )
    }

    /// Authenticates the command, then either fires the build trigger (at most
    /// once) or answers with a canned reply.
    pub async fn handle(&self, cmd: &SlashCommand) -> Reply {
        if !constant_time_eq(cmd.token.as_bytes(), self.verification_token.as_bytes()) {
            warn!("Rejected slash command with invalid verification token");
            return Reply::Unauthorized;
        }

        if cmd.text != DEPLOY_COMMAND {
            return Reply::UnknownCommand {
                text: cmd.text.clone(),
            };
        }

        info!(
            "Deployment requested by {} via {}",
            cmd.user_name, cmd.command
        );
        let outcome = self.jenkins.trigger_build().await;
        if let Err(ref e) = outcome {
            warn!("Build trigger failed: {}", e);
        }
        Reply::from_trigger(outcome, &cmd.user_name)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0, |acc, (x, y)| acc | (x ^ y)) == 0
}
