use crate::MatchCollection;
use reqwest::Client;
use serde_json::Value;
use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_RAPIDAPI_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";
const RECENT_MATCHES_PATH: &str = "/matches/v1/recent";

/// Credentials and endpoint for the Cricbuzz RapidAPI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub key: String,
    pub host: String,
    /// Scheme + authority the request paths are appended to.
    pub base_url: String,
}

impl ApiConfig {
    /// Config pointed at `https://{host}`.
    pub fn new(key: impl Into<String>, host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            key: key.into(),
            base_url: format!("https://{host}"),
            host,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("", DEFAULT_RAPIDAPI_HOST)
    }
}

/// Cricbuzz client. Each call issues exactly one request.
#[derive(Debug, Clone)]
pub struct CricbuzzApi {
    client: Client,
    config: ApiConfig,
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(serde_json::Error, String),
    MissingCredentials,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::MissingCredentials => write!(f, "RapidAPI key is not configured"),
        }
    }
}

impl std::error::Error for ApiError {}

impl CricbuzzApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .user_agent("crictui/0.1 (terminal cricket scores)")
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch recent matches grouped by match type.
    ///
    /// `Ok(None)` means the API answered with an empty body or a falsy JSON
    /// value (`null`, `false`, `0`, `""`). The request has no deadline.
    pub async fn fetch_recent_matches(&self) -> ApiResult<Option<MatchCollection>> {
        if self.config.key.trim().is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        let url = format!("{}{RECENT_MATCHES_PATH}", self.config.base_url);
        self.get(&url).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<Option<T>> {
        let response = self
            .client
            .get(url)
            .header("x-rapidapi-key", &self.config.key)
            .header("x-rapidapi-host", &self.config.host)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let value: Value =
            serde_json::from_str(&body).map_err(|e| ApiError::Parsing(e, url.to_owned()))?;
        if is_falsy(&value) {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

/// Scalars that carry no payload. Empty arrays and objects still count as data.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
