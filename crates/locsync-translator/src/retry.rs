use std::time::Duration;

use crate::{TranslateError, Translator};

/// How often a single text is retried and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Wait after the first failure, doubled after each further one
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to translate \"{text}\" to {language} after {attempts} attempts: {source}")]
pub struct TranslationFailure {
    pub text: String,
    pub language: String,
    pub attempts: u32,
    #[source]
    pub source: TranslateError,
}

/// Translates single strings into one target language, retrying with backoff
#[derive(Clone, Copy)]
pub struct LeafTranslator<'a> {
    translator: &'a dyn Translator,
    policy: RetryPolicy,
    from: Option<&'a str>,
    to: &'a str,
}

impl<'a> LeafTranslator<'a> {
    pub fn new(translator: &'a dyn Translator, policy: RetryPolicy, to: &'a str) -> Self {
        Self {
            translator,
            policy,
            from: None,
            to,
        }
    }

    /// Pin the source language instead of letting the provider detect it
    pub fn with_source_language(mut self, from: Option<&'a str>) -> Self {
        self.from = from;
        self
    }

    pub fn language(&self) -> &str {
        self.to
    }

    pub async fn translate_leaf(&self, text: &str) -> Result<String, TranslationFailure> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut delay = self.policy.base_delay;
        let mut attempt = 1;

        loop {
            tracing::info!("Translating \"{}\" to {} (attempt {})", text, self.to, attempt);

            let error = match self.translator.translate(text, self.from, self.to).await {
                Ok(translation) => {
                    tracing::debug!(
                        "{} translated \"{}\" ({} -> {})",
                        translation.provider,
                        text,
                        translation.from.as_deref().unwrap_or("auto"),
                        translation.to
                    );
                    return Ok(translation.text);
                }
                Err(e) => e,
            };

            tracing::error!(
                "Failed to translate \"{}\" (attempt {} of {}): {}",
                text,
                attempt,
                max_attempts,
                error
            );

            if attempt >= max_attempts {
                return Err(TranslationFailure {
                    text: text.to_string(),
                    language: self.to.to_string(),
                    attempts: attempt,
                    source: error,
                });
            }

            tracing::info!("Retrying in {}ms...", delay.as_millis());
            tokio::time::sleep(delay).await;
            delay = delay.saturating_mul(2);
            attempt += 1;
        }
    }
}
