//! Wire types for the video API.
//!
//! Field names follow the backend's JSON contract (camelCase).

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

/// Default story generation mode.
pub const DEFAULT_STORY_MODE: &str = "normal";

/// Default scene transition length in seconds.
pub const DEFAULT_TRANSITION_DURATION: f64 = 0.5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest<'a> {
    pub video_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest<'a> {
    pub video_id: &'a str,
    pub prompt: &'a str,
    pub mode: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest<'a> {
    pub video_id: &'a str,
    /// Scene descriptors, opaque to this layer.
    pub scenes: &'a [Value],
    pub transition_duration: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    pub video_id: &'a str,
    pub query: &'a str,
}

/// Caller-facing options for `render_video`.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Transition length in seconds; `None` means the backend default
    /// of [`DEFAULT_TRANSITION_DURATION`].
    pub transition_duration: Option<f64>,
}

/// A video file staged for multipart upload.
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Full response envelope returned by `upload_video`.
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub status: u16,
    pub body: Value,
}
