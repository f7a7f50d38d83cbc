//! Visual Service client (submit-and-poll image generation API).

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::VisualServiceConfig;
use crate::services::ServiceKind;
use crate::services::shared::{
    ServiceError, ServiceResult, USER_AGENT, resolve_api_key_with_alias, resolve_base_url,
};

/// Default base URL for the Visual Service.
pub const DEFAULT_BASE_URL: &str = "https://cloud.leonardo.ai/api/rest/v1";

/// Legacy credential variable honored for existing deployments.
const LEGACY_API_KEY_ENV_VAR: &str = "LEORNADO_API_KEY";

/// Style preset submitted with every generation job.
const STYLE_UUID: &str = "111dc692-d470-4eec-b791-3475abac4c46";

/// Configuration for the Visual Service client.
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub api_key: String,
    pub base_url: String,
    pub model_id: String,
    pub width: u32,
    pub height: u32,
    pub poll_attempts: u32,
    pub poll_interval: Duration,
}

impl VisualConfig {
    /// Creates a new config from environment.
    ///
    /// API key resolution order:
    /// 1. `api_key` in `[services.visual]`
    /// 2. `VISUAL_API_KEY` environment variable
    /// 3. `LEORNADO_API_KEY` environment variable (legacy deployments)
    ///
    /// Base URL resolution order:
    /// 1. `VISUAL_BASE_URL` env var (if set and non-empty)
    /// 2. `base_url` in `[services.visual]`
    /// 3. Default: `https://cloud.leonardo.ai/api/rest/v1`
    pub fn from_env(service: &VisualServiceConfig) -> Result<Self> {
        let api_key = resolve_api_key_with_alias(
            service.api_key.as_deref(),
            "VISUAL_API_KEY",
            Some(LEGACY_API_KEY_ENV_VAR),
            ServiceKind::Visual.id(),
        )?;
        let base_url = resolve_base_url(
            service.base_url.as_deref(),
            "VISUAL_BASE_URL",
            DEFAULT_BASE_URL,
            "Visual",
        )?;

        Ok(Self {
            api_key,
            base_url,
            model_id: service.model_id.clone(),
            width: service.width,
            height: service.height,
            poll_attempts: service.poll_attempts,
            poll_interval: service.poll_interval(),
        })
    }
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    #[serde(rename = "modelId")]
    model_id: &'a str,
    prompt: &'a str,
    num_images: u32,
    width: u32,
    height: u32,
    contrast: f32,
    alchemy: bool,
    #[serde(rename = "styleUUID")]
    style_uuid: &'a str,
    #[serde(rename = "enhancePrompt")]
    enhance_prompt: bool,
}

#[derive(Deserialize)]
struct GenerationJobResponse {
    #[serde(rename = "sdGenerationJob")]
    job: Option<GenerationJob>,
}

#[derive(Deserialize)]
struct GenerationJob {
    #[serde(rename = "generationId")]
    generation_id: String,
}

/// Poll response for a generation job.
///
/// The service has shipped the image list under three container shapes and
/// the image URL under three field names; both are modelled explicitly here
/// so parsing yields either a typed value or a `Parse` error, never silent
/// field probing.
#[derive(Debug, Deserialize)]
struct PollResponse {
    generations_by_pk: Option<PollImages>,
    #[serde(default, alias = "images")]
    generated_images: Vec<ImageRecord>,
}

#[derive(Debug, Deserialize)]
struct PollImages {
    #[serde(default)]
    generated_images: Vec<ImageRecord>,
}

#[derive(Debug, Deserialize)]
struct ImageRecord {
    #[serde(default, alias = "image_url", alias = "imageUrl")]
    url: Option<String>,
}

impl PollResponse {
    fn images(&self) -> &[ImageRecord] {
        match &self.generations_by_pk {
            Some(container) if !container.generated_images.is_empty() => {
                &container.generated_images
            }
            _ => &self.generated_images,
        }
    }

    /// Extracts the first image URL, distinguishing "not ready yet" (`Ok(None)`)
    /// from "image present but no recognizable URL field" (`Err(Parse)`).
    fn first_image_url(&self) -> ServiceResult<Option<&str>> {
        let images = self.images();
        let Some(first) = images.first() else {
            return Ok(None);
        };
        match first.url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(Some(url)),
            _ => Err(ServiceError::parse(
                "generated image carried no recognizable URL field",
            )),
        }
    }
}

/// Visual Service API client.
pub struct VisualClient {
    config: VisualConfig,
    http: reqwest::Client,
}

impl VisualClient {
    /// Creates a new Visual Service client with the given configuration.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the production API.
    /// - At runtime, panics if `HYPE_BLOCK_REAL_API=1` and `base_url` is the production API.
    pub fn new(config: VisualConfig) -> Self {
        #[cfg(test)]
        if config.base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production Visual Service!\n\
                 Set VISUAL_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        #[cfg(not(test))]
        if std::env::var("HYPE_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && config.base_url == DEFAULT_BASE_URL
        {
            panic!(
                "HYPE_BLOCK_REAL_API=1 but trying to use the production Visual Service!\n\
                 Set VISUAL_BASE_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Generates one image for a prompt and returns its URL.
    ///
    /// Submits a generation job, then polls a bounded number of times.
    pub async fn generate_image(&self, prompt: &str) -> ServiceResult<String> {
        let generation_id = self.submit_job(prompt).await?;
        tracing::debug!(%generation_id, "visual generation job submitted");

        for attempt in 1..=self.config.poll_attempts {
            tokio::time::sleep(self.config.poll_interval).await;

            let poll = self.poll_job(&generation_id).await?;
            if let Some(url) = poll.first_image_url()? {
                tracing::debug!(attempt, "visual generation completed");
                return Ok(url.to_string());
            }
            tracing::debug!(
                attempt,
                attempts = self.config.poll_attempts,
                "visual generation not ready"
            );
        }

        Err(ServiceError::timeout(format!(
            "generation {generation_id} did not complete within {} polls",
            self.config.poll_attempts
        )))
    }

    async fn submit_job(&self, prompt: &str) -> ServiceResult<String> {
        let request = GenerationRequest {
            model_id: &self.config.model_id,
            prompt,
            num_images: 1,
            width: self.config.width,
            height: self.config.height,
            contrast: 3.5,
            alchemy: true,
            style_uuid: STYLE_UUID,
            enhance_prompt: false,
        };

        let url = format!("{}/generations", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&request)
            .send()
            .await
            .map_err(|err| ServiceError::from_reqwest(&err, "submit generation"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::http_status(status.as_u16(), &body));
        }

        let parsed: GenerationJobResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::parse(format!("generation job response: {err}")))?;

        parsed
            .job
            .map(|job| job.generation_id)
            .ok_or_else(|| ServiceError::parse("generation job response carried no id"))
    }

    async fn poll_job(&self, generation_id: &str) -> ServiceResult<PollResponse> {
        let url = format!("{}/generations/{generation_id}", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|err| ServiceError::from_reqwest(&err, "poll generation"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::http_status(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|err| ServiceError::parse(format!("generation poll response: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::shared::ServiceErrorKind;

    #[test]
    fn test_poll_parse_nested_container_with_url() {
        let json = r#"{"generations_by_pk":{"generated_images":[{"url":"https://a/1.jpg"}]}}"#;
        let poll: PollResponse = serde_json::from_str(json).unwrap();
        assert_eq!(poll.first_image_url().unwrap(), Some("https://a/1.jpg"));
    }

    #[test]
    fn test_poll_parse_flat_container_with_snake_case_url() {
        let json = r#"{"generated_images":[{"image_url":"https://a/2.jpg"}]}"#;
        let poll: PollResponse = serde_json::from_str(json).unwrap();
        assert_eq!(poll.first_image_url().unwrap(), Some("https://a/2.jpg"));
    }

    #[test]
    fn test_poll_parse_images_container_with_camel_case_url() {
        let json = r#"{"images":[{"imageUrl":"https://a/3.jpg"}]}"#;
        let poll: PollResponse = serde_json::from_str(json).unwrap();
        assert_eq!(poll.first_image_url().unwrap(), Some("https://a/3.jpg"));
    }

    #[test]
    fn test_poll_parse_pending_job_yields_none() {
        let json = r#"{"generations_by_pk":{"generated_images":[]}}"#;
        let poll: PollResponse = serde_json::from_str(json).unwrap();
        assert_eq!(poll.first_image_url().unwrap(), None);
    }

    #[test]
    fn test_poll_parse_image_without_url_is_parse_error() {
        let json = r#"{"generated_images":[{"nsfw":false}]}"#;
        let poll: PollResponse = serde_json::from_str(json).unwrap();
        let err = poll.first_image_url().unwrap_err();
        assert_eq!(err.kind, ServiceErrorKind::Parse);
    }
}
