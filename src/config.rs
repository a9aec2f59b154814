use crate::error::ConfigError;
use reqwest::Url;
use std::net::IpAddr;

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup and handed to the router state.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub verification_token: String,
    pub jenkins_url: Url,
    pub jenkins_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let verification_token = required("SLACK_VERIFICATION_TOKEN")?;
        let jenkins_token = required("JENKINS_TOKEN")?;

        let jenkins_url = required("JENKINS_URL")?;
        let jenkins_url = Url::parse(jenkins_url.trim()).map_err(|e| ConfigError::Invalid {
            name: "JENKINS_URL",
            reason: e.to_string(),
        })?;
        if !matches!(jenkins_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "JENKINS_URL",
                reason: format!("unsupported scheme '{}'", jenkins_url.scheme()),
            });
        }

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        Ok(Self {
            bind_addr,
            port,
            verification_token,
            jenkins_url,
            jenkins_token,
        })
    }
}
