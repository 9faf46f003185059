//! Greeting generation for served guests
//!
//! A served ticket is annotated with a short welcome line. The line comes
//! from an optional text provider and falls back to fixed messages when the
//! provider is not configured, fails or takes too long.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::queue::DisplayAttributes;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_GREETING: &str = "Enjoy the movie!";
pub const FALLBACK_GREETING: &str = "Enjoy the show! (AI Offline)";
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Provider request failed: {0}")]
    RequestFailed(String),
    #[error("Provider returned status {status}: {body}")]
    BadStatus { status: u16, body: String },
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("Provider did not answer within {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for GreetingError {
    fn from(error: reqwest::Error) -> Self {
        GreetingError::RequestFailed(error.to_string())
    }
}

/// Something that turns a short prompt into a short piece of text
#[async_trait]
pub trait GreetingProvider: Send + Sync {
    /// `Ok(None)` means the provider answered without any text
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GreetingError>;

    fn provider_name(&self) -> &str;
}

/// Messages and time budget used when resolving a greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPolicy {
    /// Used when no provider is configured or it returns nothing
    pub default_message: String,
    /// Used when a configured provider fails
    pub fallback_message: String,
    pub timeout: Duration,
}

impl Default for GreetingPolicy {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_GREETING.to_string(),
            fallback_message: FALLBACK_GREETING.to_string(),
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

/// How a greeting was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingOutcome {
    Unavailable,
    Failed,
    Generated,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGreeting {
    pub text: String,
    pub outcome: GreetingOutcome,
}

/// Prompt for a guest. Same guest and label always give the same prompt.
pub fn build_prompt(attributes: &DisplayAttributes, context_label: &str) -> String {
    format!(
        "Write a witty, very short (max 7 words) cinema welcome for {} who ordered {}. Theme: {}.",
        attributes.name, attributes.snack, context_label
    )
}

/// Ask the provider once and settle on the text to show. Never fails.
pub async fn resolve_greeting(
    provider: Option<&dyn GreetingProvider>,
    prompt: &str,
    policy: &GreetingPolicy,
) -> ResolvedGreeting {
    let Some(provider) = provider else {
        debug!("No greeting provider configured, using default greeting");
        return ResolvedGreeting {
            text: policy.default_message.clone(),
            outcome: GreetingOutcome::Unavailable,
        };
    };

    debug!("Requesting greeting from {}: {}", provider.provider_name(), prompt);

    let result = match tokio::time::timeout(policy.timeout, provider.generate(prompt)).await {
        Ok(result) => result,
        Err(_) => Err(GreetingError::Timeout(policy.timeout)),
    };

    match result {
        Ok(Some(text)) if !text.trim().is_empty() => ResolvedGreeting {
            text: text.trim().to_string(),
            outcome: GreetingOutcome::Generated,
        },
        Ok(_) => {
            debug!("{} returned no text", provider.provider_name());
            ResolvedGreeting {
                text: policy.default_message.clone(),
                outcome: GreetingOutcome::Empty,
            }
        }
        Err(e) => {
            warn!("Greeting provider {} failed: {}", provider.provider_name(), e);
            ResolvedGreeting {
                text: policy.fallback_message.clone(),
                outcome: GreetingOutcome::Failed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<Option<String>, ()>);

    #[async_trait]
    impl GreetingProvider for Fixed {
        async fn generate(&self, _prompt: &str) -> Result<Option<String>, GreetingError> {
            self.0
                .clone()
                .map_err(|_| GreetingError::RequestFailed("connection refused".to_string()))
        }

        fn provider_name(&self) -> &str {
            "fixed"
        }
    }

    struct Stalled;

    #[async_trait]
    impl GreetingProvider for Stalled {
        async fn generate(&self, _prompt: &str) -> Result<Option<String>, GreetingError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Some("too late".to_string()))
        }

        fn provider_name(&self) -> &str {
            "stalled"
        }
    }

    fn guest() -> DisplayAttributes {
        DisplayAttributes::new("Nova", "🦄", "Soda 🥤")
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let first = build_prompt(&guest(), "Neon City");
        let second = build_prompt(&guest(), "Neon City");

        assert_eq!(first, second);
        assert!(first.contains("Nova"));
        assert!(first.contains("Soda 🥤"));
        assert!(first.contains("Theme: Neon City."));
    }

    #[tokio::test]
    async fn test_unavailable_uses_default() {
        let policy = GreetingPolicy::default();
        let resolved = resolve_greeting(None, "prompt", &policy).await;

        assert_eq!(resolved.text, "Enjoy the movie!");
        assert_eq!(resolved.outcome, GreetingOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback() {
        let policy = GreetingPolicy::default();
        let provider = Fixed(Err(()));
        let resolved = resolve_greeting(Some(&provider), "prompt", &policy).await;

        assert_eq!(resolved.text, "Enjoy the show! (AI Offline)");
        assert_eq!(resolved.outcome, GreetingOutcome::Failed);
        assert_ne!(resolved.text, policy.default_message);
    }

    #[tokio::test]
    async fn test_generated_text_is_trimmed() {
        let policy = GreetingPolicy::default();
        let provider = Fixed(Ok(Some("  Nachos at dawn, Nova!\n".to_string())));
        let resolved = resolve_greeting(Some(&provider), "prompt", &policy).await;

        assert_eq!(resolved.text, "Nachos at dawn, Nova!");
        assert_eq!(resolved.outcome, GreetingOutcome::Generated);
    }

    #[tokio::test]
    async fn test_empty_text_uses_default() {
        let policy = GreetingPolicy::default();

        for answer in [None, Some(String::new()), Some("   ".to_string())] {
            let provider = Fixed(Ok(answer));
            let resolved = resolve_greeting(Some(&provider), "prompt", &policy).await;
            assert_eq!(resolved.text, "Enjoy the movie!");
            assert_eq!(resolved.outcome, GreetingOutcome::Empty);
        }
    }

    #[tokio::test]
    async fn test_slow_provider_counts_as_failure() {
        let policy = GreetingPolicy {
            timeout: Duration::from_millis(20),
            ..GreetingPolicy::default()
        };
        let resolved = resolve_greeting(Some(&Stalled), "prompt", &policy).await;

        assert_eq!(resolved.outcome, GreetingOutcome::Failed);
        assert_eq!(resolved.text, policy.fallback_message);
    }
}
