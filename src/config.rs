//! Credential loading from the environment.

use crate::constants::DEFAULT_USER_AGENT;
use crate::error::{PersonaError, PersonaResult};

/// Reddit script-app credentials.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl RedditCredentials {
    /// Read `REDDIT_CLIENT_ID` / `REDDIT_CLIENT_SECRET` / `REDDIT_USER_AGENT`.
    /// Missing id or secret means the data source capability is absent.
    pub fn from_env() -> PersonaResult<Self> {
        let client_id = std::env::var("REDDIT_CLIENT_ID").ok().filter(|v| !v.is_empty());
        let client_secret = std::env::var("REDDIT_CLIENT_SECRET").ok().filter(|v| !v.is_empty());
        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                client_id,
                client_secret,
                user_agent: std::env::var("REDDIT_USER_AGENT")
                    .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            }),
            _ => Err(PersonaError::DataSourceUnavailable(
                "Reddit API credentials not found. Set REDDIT_CLIENT_ID and \
                 REDDIT_CLIENT_SECRET in your environment"
                    .to_string(),
            )),
        }
    }
}
