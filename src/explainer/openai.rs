use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::{Explainer, build_prompt};
use crate::config::Config;
use crate::constants::messages::EXPLANATION_FALLBACK;
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::data_fetcher::models::Game;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Explainer backed by an OpenAI-compatible chat completions endpoint.
///
/// Built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct OpenAiExplainer {
    client: Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiExplainer {
    pub fn new(
        client: Client,
        api_base: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            api_key,
            model: model.into(),
            max_tokens: crate::constants::defaults::COMPLETION_MAX_TOKENS,
            temperature: crate::constants::defaults::COMPLETION_TEMPERATURE,
        }
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)
            .map_err(|e| AppError::config_error(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    /// Builds an explainer from `config` on an existing client.
    pub fn with_client(client: Client, config: &Config) -> Self {
        if config.openai_api_key.is_none() {
            warn!("No completion API key configured; explanations will use the fallback text");
        }
        Self::new(
            client,
            config.openai_api_base.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )
        .with_sampling(config.completion_max_tokens, config.completion_temperature)
    }

    /// Sends the prompt and returns the first choice's content, if any.
    async fn request_completion(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::config_error("Completion API key is not configured"))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::upstream_unavailable(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream_http_error(status.as_u16(), &url));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::malformed_payload(format!("completion response: {e}")))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[async_trait]
impl Explainer for OpenAiExplainer {
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn explain(&self, game: &Game) -> String {
        let prompt = build_prompt(game);
        debug!("Prompt length: {} chars", prompt.len());

        match self.request_completion(&prompt).await {
            Ok(Some(text)) => {
                info!("Generated explanation for '{}'", game.name);
                text.trim().to_string()
            }
            Ok(None) => {
                warn!("Completion for '{}' carried no content", game.name);
                String::new()
            }
            Err(e) => {
                error!("Failed to generate explanation for '{}': {}", game.name, e);
                EXPLANATION_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    fn game() -> Game {
        Game {
            id: "13".to_string(),
            name: "Catan".to_string(),
            year_published: Some(1995),
            min_players: Some(3),
            max_players: Some(4),
            min_playtime: Some(60),
            max_playtime: Some(120),
            playing_time: Some(120),
            min_age: Some(10),
            categories: vec![],
            mechanics: vec![],
            average_rating: None,
            rank: None,
            description: None,
        }
    }

    fn explainer(base: &str, api_key: Option<&str>) -> OpenAiExplainer {
        OpenAiExplainer::new(
            create_http_client_with_timeout(5).unwrap(),
            base,
            api_key.map(str::to_string),
            "gpt-4o-mini",
        )
        .with_sampling(256, 0.5)
    }

    #[tokio::test]
    async fn test_explain_returns_first_choice() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 256,
                "temperature": 0.5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": "  Catan es un clásico.  " } }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = explainer(&mock_server.uri(), Some("sk-test"))
            .explain(&game())
            .await;
        assert_eq!(text, "Catan es un clásico.");
    }

    #[tokio::test]
    async fn test_explain_falls_back_on_http_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let text = explainer(&mock_server.uri(), Some("sk-test"))
            .explain(&game())
            .await;
        assert_eq!(text, EXPLANATION_FALLBACK);
    }

    #[tokio::test]
    async fn test_explain_falls_back_on_garbage_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let text = explainer(&mock_server.uri(), Some("sk-test"))
            .explain(&game())
            .await;
        assert_eq!(text, EXPLANATION_FALLBACK);
    }

    #[tokio::test]
    async fn test_explain_without_content_is_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&mock_server)
            .await;

        let text = explainer(&mock_server.uri(), Some("sk-test"))
            .explain(&game())
            .await;
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_explain_without_api_key_skips_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let text = explainer(&mock_server.uri(), None).explain(&game()).await;
        assert_eq!(text, EXPLANATION_FALLBACK);
    }

    #[tokio::test]
    async fn test_with_client_applies_config_settings() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-config"))
            .and(body_partial_json(json!({
                "model": "gpt-test",
                "max_tokens": 123,
                "temperature": 0.5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "Hola" } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            openai_api_base: mock_server.uri(),
            openai_api_key: Some("sk-config".to_string()),
            openai_model: "gpt-test".to_string(),
            completion_max_tokens: 123,
            completion_temperature: 0.5,
            ..Config::default()
        };
        let explainer = OpenAiExplainer::with_client(create_http_client_with_timeout(5).unwrap(), &config);

        assert_eq!(explainer.explain(&game()).await, "Hola");
    }
}
