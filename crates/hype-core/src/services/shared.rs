//! Service-agnostic types shared across the generative backends.

use std::fmt;

use anyhow::{Context, Result};
use serde_json::Value;

/// Standard User-Agent header for hype API requests.
pub const USER_AGENT: &str = concat!("hype/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Config resolution helpers
// ============================================================================

/// Resolves an API key with precedence: config > env.
///
/// # Arguments
/// * `config_api_key` - Value from config file (if present)
/// * `env_var` - Environment variable name (e.g., "`BRIEF_API_KEY`")
/// * `config_section` - Config section name (e.g., "brief")
///
/// # Errors
/// Returns an error if no key is available from either source.
pub fn resolve_api_key(
    config_api_key: Option<&str>,
    env_var: &str,
    config_section: &str,
) -> Result<String> {
    resolve_api_key_with_alias(config_api_key, env_var, None, config_section)
}

/// Resolves an API key like [`resolve_api_key`], additionally consulting a
/// legacy environment variable name as a last resort.
///
/// The alias exists for deployments whose secrets were provisioned under a
/// historical (misspelled) variable name.
pub fn resolve_api_key_with_alias(
    config_api_key: Option<&str>,
    env_var: &str,
    legacy_env_var: Option<&str>,
    config_section: &str,
) -> Result<String> {
    // Try config value first
    if let Some(key) = config_api_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    // Fall back to env var
    if let Ok(key) = std::env::var(env_var) {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    // Last resort: legacy env var name
    if let Some(legacy) = legacy_env_var
        && let Ok(key) = std::env::var(legacy)
    {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            tracing::warn!("using legacy credential variable {legacy}; prefer {env_var}");
            return Ok(trimmed.to_string());
        }
    }

    anyhow::bail!("No API key available. Set {env_var} or api_key in [services.{config_section}].")
}

/// Resolves a base URL with precedence: env > config > default.
///
/// # Arguments
/// * `config_base_url` - Value from config file (if present)
/// * `env_var` - Environment variable name (e.g., "`BRIEF_BASE_URL`")
/// * `default_url` - Default URL if neither env nor config is set
/// * `service_name` - Human-readable service name for error messages
///
/// # Errors
/// Returns an error if the resolved URL is malformed.
pub fn resolve_base_url(
    config_base_url: Option<&str>,
    env_var: &str,
    default_url: &str,
    service_name: &str,
) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var(env_var) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, service_name)?;
            return Ok(trimmed.to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, service_name)?;
            return Ok(trimmed.to_string());
        }
    }

    // Default
    Ok(default_url.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str, service_name: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid {service_name} base URL: {url}"))?;
    Ok(())
}

// ============================================================================
// Error types
// ============================================================================

/// Categories of service errors for consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection timeout, request timeout, or exhausted polling
    Timeout,
    /// Failed to parse a response into the expected shape
    Parse,
    /// Transport or API-level failure
    ApiError,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::HttpStatus => write!(f, "http_status"),
            ServiceErrorKind::Timeout => write!(f, "timeout"),
            ServiceErrorKind::Parse => write!(f, "parse"),
            ServiceErrorKind::ApiError => write!(f, "api_error"),
        }
    }
}

/// Structured error from a service with kind and details.
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// Error category
    pub kind: ServiceErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, extracting the provider's message when
    /// the body is the common `{"error": {"message": ...}}` JSON shape.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = format!("HTTP {status}");
        let details = if body.is_empty() {
            None
        } else {
            if let Ok(json) = serde_json::from_str::<Value>(body)
                && let Some(error_obj) = json.get("error")
                && let Some(msg) = error_obj.get("message").and_then(|v| v.as_str())
            {
                return Self {
                    kind: ServiceErrorKind::HttpStatus,
                    message: format!("HTTP {status}: {msg}"),
                    details: Some(body.to_string()),
                };
            }
            Some(body.to_string())
        };
        Self {
            kind: ServiceErrorKind::HttpStatus,
            message,
            details,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Timeout, message)
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Parse, message)
    }

    /// Maps a transport error, classifying timeouts.
    pub fn from_reqwest(err: &reqwest::Error, what: &str) -> Self {
        if err.is_timeout() {
            Self::timeout(format!("{what}: request timed out"))
        } else {
            Self::new(ServiceErrorKind::ApiError, format!("{what}: {err}"))
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Result type for service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_prefers_config() {
        let key = resolve_api_key(Some("from-config"), "HYPE_TEST_KEY_UNSET", "brief").unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn test_resolve_api_key_env_fallback() {
        // SAFETY: test-only process-local env mutation with a unique name.
        unsafe { std::env::set_var("HYPE_TEST_KEY_PRIMARY", "from-env") };
        let key = resolve_api_key(None, "HYPE_TEST_KEY_PRIMARY", "brief").unwrap();
        assert_eq!(key, "from-env");
        unsafe { std::env::remove_var("HYPE_TEST_KEY_PRIMARY") };
    }

    #[test]
    fn test_resolve_api_key_legacy_alias() {
        unsafe { std::env::set_var("HYPE_TEST_KEY_LEGACY", "from-legacy") };
        let key = resolve_api_key_with_alias(
            None,
            "HYPE_TEST_KEY_CANONICAL_UNSET",
            Some("HYPE_TEST_KEY_LEGACY"),
            "visual",
        )
        .unwrap();
        assert_eq!(key, "from-legacy");
        unsafe { std::env::remove_var("HYPE_TEST_KEY_LEGACY") };
    }

    #[test]
    fn test_resolve_api_key_missing_everywhere() {
        let err = resolve_api_key(None, "HYPE_TEST_KEY_MISSING", "brief").unwrap_err();
        assert!(err.to_string().contains("HYPE_TEST_KEY_MISSING"));
    }

    #[test]
    fn test_resolve_base_url_default_and_validation() {
        let url = resolve_base_url(
            None,
            "HYPE_TEST_BASE_URL_UNSET",
            "https://api.example.com",
            "Brief",
        )
        .unwrap();
        assert_eq!(url, "https://api.example.com");

        let err = resolve_base_url(
            Some("not a url"),
            "HYPE_TEST_BASE_URL_UNSET",
            "https://api.example.com",
            "Brief",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid Brief base URL"));
    }

    #[test]
    fn test_http_status_extracts_json_error_message() {
        let err = ServiceError::http_status(429, r#"{"error":{"message":"overloaded"}}"#);
        assert_eq!(err.kind, ServiceErrorKind::HttpStatus);
        assert_eq!(err.message, "HTTP 429: overloaded");
        assert!(err.details.is_some());
    }
}
