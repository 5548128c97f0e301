use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

const API_VERSION: &str = "3.0";

/// Azure AI Translator (Cognitive Services) text endpoint
#[derive(Clone)]
pub struct AzureTranslator {
    client: reqwest::Client,
    api_key: String,
    region: String,
    api_url: String,
}

#[derive(Serialize)]
struct TextItem<'a> {
    text: &'a str,
}

impl AzureTranslator {
    pub fn new(
        api_key: String,
        region: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            region,
            api_url,
        })
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Option<&str>,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let mut query = vec![("api-version", API_VERSION), ("to", to)];
        if let Some(from) = from {
            query.push(("from", from));
        }

        let response = self
            .client
            .post(&self.api_url)
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .json(&[TextItem { text }])
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::ApiError(format!("HTTP {status}: {body}")));
        }

        let json: Value = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let (translated, detected) = parse_response(&json)?;

        Ok(Translation {
            text: translated,
            from: from.map(str::to_string).or(detected),
            to: to.to_string(),
            provider: "azure".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Azure Translator".to_string(),
            requires_api_key: true,
        }
    }
}

/// Pull `[0].translations[0].text` and the detected language out of a response body
fn parse_response(json: &Value) -> Result<(String, Option<String>), TranslateError> {
    let first = json
        .get(0)
        .ok_or_else(|| TranslateError::MalformedResponse("Empty response array".to_string()))?;

    let text = first["translations"]
        .get(0)
        .and_then(|t| t["text"].as_str())
        .ok_or_else(|| TranslateError::MalformedResponse("No translation in response".to_string()))?;

    let detected = first["detectedLanguage"]["language"]
        .as_str()
        .map(str::to_string);

    Ok((text.to_string(), detected))
}
