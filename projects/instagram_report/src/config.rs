use interfaces_metricool_instagram::index::{Credentials, MetricoolClient, METRICOOL_BASE_URL};
use thiserror::Error;

pub const USER_TOKEN_VAR: &str = "METRICOOL_USER_TOKEN";
pub const USER_ID_VAR: &str = "METRICOOL_USER_ID";
pub const BLOG_ID_VAR: &str = "METRICOOL_BLOG_ID";
pub const BASE_URL_VAR: &str = "METRICOOL_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub credentials: Credentials,
    pub base_url: String,
}

impl ReportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every variable through `lookup`. All three credentials are
    /// checked before failing so the error names each one that is absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let user_token = read(USER_TOKEN_VAR);
        let user_id = read(USER_ID_VAR);
        let blog_id = read(BLOG_ID_VAR);

        let (user_token, user_id, blog_id) = match (user_token, user_id, blog_id) {
            (Some(user_token), Some(user_id), Some(blog_id)) => (user_token, user_id, blog_id),
            (user_token, user_id, blog_id) => {
                let names = [
                    (USER_TOKEN_VAR, user_token.is_none()),
                    (USER_ID_VAR, user_id.is_none()),
                    (BLOG_ID_VAR, blog_id.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name)
                .collect();

                return Err(ConfigError::MissingVariables { names });
            }
        };

        let base_url = read(BASE_URL_VAR).unwrap_or_else(|| METRICOOL_BASE_URL.to_string());

        Ok(Self {
            credentials: Credentials {
                user_token,
                user_id,
                blog_id,
            },
            base_url,
        })
    }

    pub fn client(&self) -> MetricoolClient {
        MetricoolClient::with_base_url(&self.base_url, self.credentials.clone())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables for authentication: {}", names.join(", "))]
    MissingVariables { names: Vec<&'static str> },
}
