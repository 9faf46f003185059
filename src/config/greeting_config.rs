use super::helper::parse_duration;
use crate::greeting::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::greeting::{
    GeminiClient, GreetingError, GreetingPolicy, GreetingProvider, DEFAULT_GREETING,
    FALLBACK_GREETING,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GreetingConfig {
    #[serde(default = "default_message")]
    pub default_message: String,
    #[serde(default = "fallback_message")]
    pub fallback_message: String,
    /// How long to wait on the provider, e.g. "4s" or "800ms"
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Environment variable holding the provider credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            default_message: default_message(),
            fallback_message: fallback_message(),
            timeout: default_timeout(),
            api_key_env: default_api_key_env(),
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl GreetingConfig {
    pub fn policy(&self) -> Result<GreetingPolicy> {
        let timeout = parse_duration(&self.timeout)
            .with_context(|| format!("Invalid greeting timeout: {}", self.timeout))?;
        Ok(GreetingPolicy {
            default_message: self.default_message.clone(),
            fallback_message: self.fallback_message.clone(),
            timeout,
        })
    }

    /// The configured provider, or `None` when no credential is present or
    /// the client cannot be built
    pub fn provider(&self) -> Option<Arc<dyn GreetingProvider>> {
        usable_provider(GeminiClient::from_env(
            &self.api_key_env,
            &self.model,
            &self.endpoint,
        ))
    }
}

fn usable_provider(
    client: Result<Option<GeminiClient>, GreetingError>,
) -> Option<Arc<dyn GreetingProvider>> {
    match client {
        Ok(client) => client.map(|c| Arc::new(c) as Arc<dyn GreetingProvider>),
        Err(e) => {
            warn!("Greeting provider unavailable: {}", e);
            None
        }
    }
}

fn default_message() -> String {
    DEFAULT_GREETING.to_string()
}

fn fallback_message() -> String {
    FALLBACK_GREETING.to_string()
}

fn default_timeout() -> String {
    "4s".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_greeting_config() {
        let config = GreetingConfig::default();
        assert_eq!(config.default_message, "Enjoy the movie!");
        assert_eq!(config.fallback_message, "Enjoy the show! (AI Offline)");
        assert_eq!(config.api_key_env, "API_KEY");
        assert_eq!(config.model, "gemini-2.5-flash");

        let policy = config.policy().unwrap();
        assert_eq!(policy.timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let config = GreetingConfig {
            timeout: "soon".to_string(),
            ..GreetingConfig::default()
        };
        let err = config.policy().unwrap_err();
        assert!(err.to_string().contains("Invalid greeting timeout"));
    }

    #[test]
    fn test_missing_credential_means_no_provider() {
        let config = GreetingConfig {
            api_key_env: "CINEMA_QUEUE_TEST_NO_SUCH_KEY".to_string(),
            ..GreetingConfig::default()
        };
        assert!(config.provider().is_none());
    }

    #[test]
    fn test_client_build_failure_means_no_provider() {
        let failed = Err(GreetingError::RequestFailed("no TLS backend".to_string()));
        assert!(usable_provider(failed).is_none());
        assert!(usable_provider(Ok(None)).is_none());
    }
}
