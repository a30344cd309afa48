//! Client facade over the video API backend.
//!
//! One method per remote capability. Each method performs a single
//! call, decodes the JSON body, and funnels failures through the
//! shared transport classification before applying its own remap.
//! There are no retries; a failed call is terminal.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::client::error::{classify, ApiError, ErrorKind, TransportFailure};
use crate::client::progress::{progress_body, ProgressFn};
use crate::client::types::{
    GenerateStoryRequest, RenderOptions, RenderRequest, SearchRequest, TranscribeRequest,
    UploadResponse, UploadSource, DEFAULT_STORY_MODE, DEFAULT_TRANSITION_DURATION,
};
use crate::config::ClientConfig;

/// Message for upload calls that never reach the server.
pub const UPLOAD_NETWORK_MESSAGE: &str = "Network error. Cannot connect to server.";

/// Message for uploads rejected with 413.
pub const UPLOAD_TOO_LARGE_MESSAGE: &str = "File too large. Please use a smaller video file.";

/// Message for transcription calls that time out.
pub const TRANSCRIBE_TIMEOUT_MESSAGE: &str =
    "Transcription timed out. Please try with a shorter video.";

/// Fallback message for transcription failures.
pub const TRANSCRIBE_FAILED_MESSAGE: &str = "Transcription failed. Please try again.";

/// Client facade for the video API.
///
/// Holds a configured `reqwest::Client` and nothing else; safe to share
/// and call concurrently.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    upload_timeout: Duration,
}

impl ApiClient {
    /// Build a facade from the given configuration.
    ///
    /// The configuration is read once here; the facade never
    /// reinitializes.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            upload_timeout: Duration::from_millis(config.upload_timeout_ms),
        })
    }

    /// Upload a video file as multipart form data.
    ///
    /// Returns the full response envelope (status and body). The
    /// optional callback observes cumulative transmitted bytes.
    pub async fn upload_video(
        &self,
        source: UploadSource,
        progress: Option<ProgressFn>,
    ) -> Result<UploadResponse, ApiError> {
        let UploadSource {
            file_name,
            content_type,
            data,
        } = source;
        let length = data.len() as u64;

        let part = reqwest::multipart::Part::stream_with_length(
            progress_body(data, progress),
            length,
        )
        .file_name(file_name)
        .mime_str(&content_type)
        .map_err(|e| ApiError::transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("video", part);

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .timeout(self.upload_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| remap_upload(classify(TransportFailure::from_reqwest(&e))))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            let body = response
                .json()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))?;
            Ok(UploadResponse { status, body })
        } else {
            let body = response.json::<Value>().await.ok();
            Err(remap_upload(classify(TransportFailure {
                status: Some(status),
                body,
                ..Default::default()
            })))
        }
    }

    /// Transcribe an uploaded video.
    pub async fn transcribe_video(&self, video_id: &str) -> Result<Value, ApiError> {
        self.post_json("/transcribe-direct-video", &TranscribeRequest { video_id })
            .await
            .map_err(remap_transcribe)
    }

    /// Generate a story from a transcript. `mode` defaults to "normal".
    pub async fn generate_story(
        &self,
        video_id: &str,
        prompt: &str,
        mode: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mode = mode.unwrap_or(DEFAULT_STORY_MODE);
        self.post_json(
            "/generate-story",
            &GenerateStoryRequest {
                video_id,
                prompt,
                mode,
            },
        )
        .await
    }

    /// Render a story into a video.
    pub async fn render_video(
        &self,
        video_id: &str,
        scenes: &[Value],
        options: RenderOptions,
    ) -> Result<Value, ApiError> {
        let transition_duration = options
            .transition_duration
            .unwrap_or(DEFAULT_TRANSITION_DURATION);
        self.post_json(
            "/render-story",
            &RenderRequest {
                video_id,
                scenes,
                transition_duration,
            },
        )
        .await
    }

    /// Search within a video.
    pub async fn search_video(&self, video_id: &str, query: &str) -> Result<Value, ApiError> {
        self.post_json("/search", &SearchRequest { video_id, query })
            .await
    }

    /// Probe the CORS test endpoint.
    pub async fn test_cors(&self) -> Result<Value, ApiError> {
        self.get_json("/cors-test").await
    }

    /// Check backend health.
    pub async fn health_check(&self) -> Result<Value, ApiError> {
        self.get_json("/health").await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(payload)
            .send()
            .await
            .map_err(|e| classify(TransportFailure::from_reqwest(&e)))?;
        decode_json(response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| classify(TransportFailure::from_reqwest(&e)))?;
        decode_json(response).await
    }
}

async fn decode_json(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    } else {
        let body = response.json::<Value>().await.ok();
        Err(classify(TransportFailure {
            status: Some(status.as_u16()),
            body,
            ..Default::default()
        }))
    }
}

fn remap_upload(err: ApiError) -> ApiError {
    if err.kind == ErrorKind::Network {
        ApiError {
            message: UPLOAD_NETWORK_MESSAGE.to_string(),
            ..err
        }
    } else if err.status == Some(413) {
        ApiError {
            kind: ErrorKind::PayloadTooLarge,
            message: UPLOAD_TOO_LARGE_MESSAGE.to_string(),
            ..err
        }
    } else {
        err
    }
}

fn remap_transcribe(err: ApiError) -> ApiError {
    if err.kind == ErrorKind::Timeout {
        ApiError {
            message: TRANSCRIBE_TIMEOUT_MESSAGE.to_string(),
            ..err
        }
    } else if let Some(backend) = err.backend_error() {
        let message = backend.to_string();
        ApiError { message, ..err }
    } else {
        ApiError {
            message: TRANSCRIBE_FAILED_MESSAGE.to_string(),
            ..err
        }
    }
}
