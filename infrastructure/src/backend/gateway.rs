//! Chat gateway implementation for OpenAI-compatible backends.

use std::time::Duration;

use async_trait::async_trait;
use specscout_application::ports::chat_gateway::{ChatGateway, GatewayError};
use specscout_domain::util::truncate_str;
use specscout_domain::{ChatResponse, Message};
use tracing::{debug, warn};

use super::wire::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};

/// Connection and sampling settings for [`OpenAiChatGateway`].
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Server base URL; `/v1/chat/completions` is appended.
    pub base_url: String,
    /// Resolved API key. `None` means the backend is not configured and
    /// every call returns [`GatewayError::NotConfigured`].
    pub api_key: Option<String>,
    /// Environment variable the key was looked up in, named in errors.
    pub api_key_env: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 3000,
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// [`ChatGateway`] implementation speaking the chat completions protocol.
pub struct OpenAiChatGateway {
    client: reqwest::Client,
    settings: BackendSettings,
}

impl OpenAiChatGateway {
    pub fn new(settings: BackendSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client, settings }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatGateway for OpenAiChatGateway {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[serde_json::Value],
    ) -> Result<ChatResponse, GatewayError> {
        let Some(api_key) = &self.settings.api_key else {
            return Err(GatewayError::NotConfigured(format!(
                "{} is not set",
                self.settings.api_key_env
            )));
        };

        let request = ChatCompletionRequest::new(
            &self.settings.model,
            messages,
            tools,
            self.settings.temperature,
            self.settings.max_tokens,
        );
        debug!(
            "Requesting completion from '{}' ({} messages, {} tools)",
            self.settings.model,
            messages.len(),
            tools.len()
        );

        let response = self
            .client
            .post(self.endpoint_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => truncate_str(&body, 200).to_string(),
            };
            warn!("Backend returned {}: {}", status, message);
            return Err(GatewayError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let chat = body
            .into_chat_response()
            .map_err(GatewayError::InvalidResponse)?;
        debug!(
            "Completion finished: reason={}, total_tokens={}",
            chat.finish_reason.as_str(),
            chat.usage.total_tokens
        );
        Ok(chat)
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BackendSettings::default();
        assert_eq!(settings.base_url, "https://api.openai.com");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.api_key_env, "OPENAI_API_KEY");
        assert!(settings.api_key.is_none());
        assert_eq!(settings.max_tokens, 3000);
        assert_eq!(settings.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_endpoint_url_handles_trailing_slash() {
        let gateway = OpenAiChatGateway::new(BackendSettings {
            base_url: "https://api.openai.com/".to_string(),
            ..BackendSettings::default()
        });
        assert_eq!(
            gateway.endpoint_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        let gateway = OpenAiChatGateway::new(BackendSettings {
            base_url: "http://localhost:8080".to_string(),
            ..BackendSettings::default()
        });
        assert_eq!(
            gateway.endpoint_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let gateway = OpenAiChatGateway::new(BackendSettings::default());
        let err = gateway
            .complete(&[Message::user("hello")], &[])
            .await
            .unwrap_err();

        assert!(err.is_not_configured());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_model_name_reports_configured_model() {
        let gateway = OpenAiChatGateway::new(BackendSettings {
            model: "llama-3.1-8b".to_string(),
            ..BackendSettings::default()
        });
        assert_eq!(gateway.model_name(), "llama-3.1-8b");
    }
}
