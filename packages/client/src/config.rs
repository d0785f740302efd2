//! Client configuration, populated from environment variables.

use crate::error::ClientError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`ReqwestTransport`](crate::http::ReqwestTransport).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `ALM_BASE_URL` | (required) | REST base URL, e.g. `https://alm.example.com/polarion/rest/v1` |
/// | `ALM_TOKEN` | (absent) | Personal access token, sent as `Authorization: Bearer …` |
/// | `ALM_TIMEOUT_SECS` | `30` | Per-request timeout in seconds |
/// | `ALM_USER_AGENT` | `almrest/<version>` | `User-Agent` header |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined to. Trailing slashes are ignored.
    pub base_url: String,

    /// Bearer token. `None` sends no `Authorization` header.
    pub token: Option<String>,

    pub timeout_secs: u64,

    pub user_agent: String,
}

impl ClientConfig {
    /// Config for `base_url` with defaults everywhere else.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Populate config from the process environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Populate config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ALM_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Config("ALM_BASE_URL must be set".into()))?;

        let timeout_secs = match lookup("ALM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("ALM_TIMEOUT_SECS must be a whole number, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            token: lookup("ALM_TOKEN").filter(|v| !v.is_empty()),
            timeout_secs,
            user_agent: lookup("ALM_USER_AGENT").unwrap_or_else(default_user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("almrest/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn minimal_environment_uses_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("ALM_BASE_URL", "https://alm.example.com/rest/v1")]))
                .unwrap();
        assert_eq!(config.base_url, "https://alm.example.com/rest/v1");
        assert_eq!(config.token, None);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("almrest/"));
    }

    #[test]
    fn all_variables_are_read() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ALM_BASE_URL", "http://localhost:8080/rest/v1"),
            ("ALM_TOKEN", "secret"),
            ("ALM_TIMEOUT_SECS", "5"),
            ("ALM_USER_AGENT", "nightly-sync"),
        ]))
        .unwrap();
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "nightly-sync");
    }

    #[test]
    fn missing_base_url_is_a_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ClientError::Config(ref m) if m.contains("ALM_BASE_URL")));
    }

    #[test]
    fn blank_base_url_is_rejected() {
        assert!(ClientConfig::from_lookup(lookup(&[("ALM_BASE_URL", "  ")])).is_err());
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("ALM_BASE_URL", "http://x"),
            ("ALM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ClientError::Config(ref m) if m.contains("soon")));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let config =
            ClientConfig::from_lookup(lookup(&[("ALM_BASE_URL", "http://x"), ("ALM_TOKEN", "")]))
                .unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::new("http://x").with_token("t").with_timeout_secs(2);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout_secs, 2);
    }
}
