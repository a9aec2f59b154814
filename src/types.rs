use serde::Deserialize;

/// Form fields Slack posts for a slash command. Only the fields the relay
/// reads are kept; anything absent decodes as an empty string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SlashCommand {
    pub token: String,
    pub command: String,
    pub text: String,
    pub user_name: String,
}

const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

impl SlashCommand {
    /// Decodes the body only when it is labelled as form data; any other
    /// content type yields an empty command.
    pub fn from_request(content_type: Option<&str>, body: &[u8]) -> Self {
        if is_form(content_type) {
            Self::from_form(body)
        } else {
            tracing::debug!(
                "Ignoring slash command body with content type {:?}",
                content_type
            );
            Self::default()
        }
    }

    /// Decodes a form-encoded body. A body that isn't valid form data yields an
    /// empty command, which then fails the token check.
    pub fn from_form(body: &[u8]) -> Self {
        serde_urlencoded::from_bytes(body).unwrap_or_else(|e| {
            tracing::debug!("Failed to parse slash command form: {}", e);
            Self::default()
        })
    }
}

fn is_form(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(FORM_MEDIA_TYPE))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_slack_form() {
        let body = b"token=abc&team_id=T1&command=%2Fdeploy&text=deploy-app&user_name=alice&response_url=https%3A%2F%2Fhooks.slack.com%2Fx";
        let cmd = SlashCommand::from_form(body);
        assert_eq!(cmd.token, "abc");
        assert_eq!(cmd.command, "/deploy");
        assert_eq!(cmd.text, "deploy-app");
        assert_eq!(cmd.user_name, "alice");
    }

    #[test]
    fn missing_fields_are_empty() {
        let cmd = SlashCommand::from_form(b"token=abc");
        assert_eq!(cmd.token, "abc");
        assert_eq!(cmd.text, "");
        assert_eq!(cmd.user_name, "");
    }

    #[test]
    fn plus_decodes_to_space() {
        let cmd = SlashCommand::from_form(b"text=deploy+app");
        assert_eq!(cmd.text, "deploy app");
    }

    #[test]
    fn only_form_content_type_is_decoded() {
        let body = b"token=abc&text=deploy-app&user_name=alice";

        let cmd = SlashCommand::from_request(Some("application/x-www-form-urlencoded"), body);
        assert_eq!(cmd.token, "abc");

        let cmd = SlashCommand::from_request(
            Some("Application/X-WWW-Form-Urlencoded; charset=utf-8"),
            body,
        );
        assert_eq!(cmd.text, "deploy-app");

        for content_type in [Some("text/plain"), Some("application/json"), None] {
            let cmd = SlashCommand::from_request(content_type, body);
            assert_eq!(cmd.token, "");
            assert_eq!(cmd.text, "");
        }
    }
}
