//! Brief Service client (chat-completions API).

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::BriefServiceConfig;
use crate::core::session::BriefVariant;
use crate::prompts;
use crate::services::ServiceKind;
use crate::services::shared::{
    ServiceError, ServiceResult, USER_AGENT, resolve_api_key, resolve_base_url,
};

/// Default base URL for the Brief Service.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Configuration for the Brief Service client.
#[derive(Debug, Clone)]
pub struct BriefConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Model used for image-prompt summarization.
    pub summary_model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl BriefConfig {
    /// Creates a new config from environment.
    ///
    /// API key resolution order:
    /// 1. `api_key` in `[services.brief]`
    /// 2. `BRIEF_API_KEY` environment variable
    ///
    /// Base URL resolution order:
    /// 1. `BRIEF_BASE_URL` env var (if set and non-empty)
    /// 2. `base_url` in `[services.brief]`
    /// 3. Default: `https://api.openai.com`
    pub fn from_env(service: &BriefServiceConfig) -> Result<Self> {
        let api_key = resolve_api_key(
            service.api_key.as_deref(),
            "BRIEF_API_KEY",
            ServiceKind::Brief.id(),
        )?;
        let base_url = resolve_base_url(
            service.base_url.as_deref(),
            "BRIEF_BASE_URL",
            DEFAULT_BASE_URL,
            "Brief",
        )?;

        Ok(Self {
            api_key,
            base_url,
            model: service.model.clone(),
            summary_model: service.summary_model.clone(),
            max_tokens: service.max_tokens,
            temperature: service.temperature,
        })
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Brief Service API client.
pub struct BriefClient {
    config: BriefConfig,
    http: reqwest::Client,
}

impl BriefClient {
    /// Creates a new Brief Service client with the given configuration.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the production API.
    /// - At runtime, panics if `HYPE_BLOCK_REAL_API=1` and `base_url` is the production API.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Use `BRIEF_BASE_URL` env var or config to point to a mock server.
    pub fn new(config: BriefConfig) -> Self {
        #[cfg(test)]
        if config.base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production Brief Service!\n\
                 Set BRIEF_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        #[cfg(not(test))]
        if std::env::var("HYPE_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && config.base_url == DEFAULT_BASE_URL
        {
            panic!(
                "HYPE_BLOCK_REAL_API=1 but trying to use the production Brief Service!\n\
                 Set BRIEF_BASE_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Generates one campaign brief for a team.
    ///
    /// Returns the markdown body from the completion.
    pub async fn generate_brief(
        &self,
        team_name: &str,
        variant: BriefVariant,
    ) -> ServiceResult<String> {
        let template = match variant {
            BriefVariant::Narrative => prompts::BRIEF_NARRATIVE_PROMPT_TEMPLATE,
            BriefVariant::Strategy => prompts::BRIEF_STRATEGY_PROMPT_TEMPLATE,
        };
        let user_prompt = prompts::render_team_template(template, team_name);

        self.complete(&self.config.model, prompts::BRIEF_SYSTEM_PROMPT, &user_prompt)
            .await
    }

    /// Summarizes a brief into one concise image prompt.
    pub async fn summarize_image_prompt(&self, brief_markdown: &str) -> ServiceResult<String> {
        let user_prompt = format!(
            "Convert this campaign brief into ONE powerful image prompt for a marketing \
             visual:\n\n{brief_markdown}\n\nThe prompt should be 1-2 sentences, highly visual \
             and descriptive, perfect for generating a stunning marketing campaign image."
        );

        self.complete(
            &self.config.summary_model,
            prompts::IMAGE_PROMPT_SYSTEM,
            &user_prompt,
        )
        .await
    }

    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> ServiceResult<String> {
        let request = ChatCompletionRequest {
            model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatRequestMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&request)
            .send()
            .await
            .map_err(|err| ServiceError::from_reqwest(&err, "chat completion"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::http_status(status.as_u16(), &body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::parse(format!("chat completion response: {err}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ServiceError::parse("completion contained no content"));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_parsing() {
        let json = r##"{"choices":[{"message":{"role":"assistant","content":"# Falcons"}}]}"##;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("# Falcons")
        );
    }

    #[test]
    fn test_chat_response_without_choices() {
        let parsed: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
