use std::time::Duration;

use compass_logging::{compass_debug, compass_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    ApiError, ChatPayload, ChatReply, ErrorBody, FailureKind, JobRecord, PredictPayload,
    RoleSuggestion,
};

pub const PREDICT_PATH: &str = "/predict";
pub const CHAT_PATH: &str = "/api";
pub const JOBS_PATH: &str = "/get_jobs";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// The three backend endpoints the pages consume.
///
/// Each call is a single attempt; nothing here retries.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn predict(&self, payload: &PredictPayload) -> Result<Vec<RoleSuggestion>, ApiError>;

    async fn chat(&self, payload: &ChatPayload) -> Result<ChatReply, ApiError>;

    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Joining relative paths keeps any prefix only when the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            compass_warn!("backend answered {}: {}", status, detail);
            return Err(ApiError::new(FailureKind::HttpStatus(status.as_u16()), detail));
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn predict(&self, payload: &PredictPayload) -> Result<Vec<RoleSuggestion>, ApiError> {
        let url = self.endpoint(PREDICT_PATH)?;
        compass_debug!("POST {} skills={} interest={}", url, payload.skills.len(), payload.interest);
        self.send(self.client.post(url).json(payload)).await
    }

    async fn chat(&self, payload: &ChatPayload) -> Result<ChatReply, ApiError> {
        let url = self.endpoint(CHAT_PATH)?;
        compass_debug!("POST {} message_len={}", url, payload.message.len());
        self.send(self.client.post(url).json(payload)).await
    }

    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        let url = self.endpoint(JOBS_PATH)?;
        compass_debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
