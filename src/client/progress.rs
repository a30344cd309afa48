//! Upload progress reporting.
//!
//! The multipart video part is streamed in fixed-size chunks so the
//! caller can observe transmission progress. Events fire as the
//! transport pulls chunks; ordering beyond that is not guaranteed.

use bytes::Bytes;
use futures_util::stream;
use futures_util::Stream;

/// Cumulative upload progress, reported once per transmitted chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub bytes_sent: u64,
    pub total_bytes: u64,
}

/// Callback invoked synchronously on each progress event.
pub type ProgressFn = Box<dyn FnMut(UploadProgress) + Send + 'static>;

const CHUNK_SIZE: usize = 64 * 1024;

/// Wrap `data` in a body that reports cumulative progress as chunks
/// are pulled by the transport.
pub fn progress_body(data: Bytes, progress: Option<ProgressFn>) -> reqwest::Body {
    reqwest::Body::wrap_stream(progress_stream(data, progress))
}

fn progress_stream(
    data: Bytes,
    progress: Option<ProgressFn>,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static {
    let total_bytes = data.len() as u64;
    stream::unfold(
        (data, 0usize, progress),
        move |(data, offset, mut progress)| async move {
            if offset >= data.len() {
                return None;
            }
            let end = usize::min(offset + CHUNK_SIZE, data.len());
            let chunk = data.slice(offset..end);
            if let Some(callback) = progress.as_mut() {
                callback(UploadProgress {
                    bytes_sent: end as u64,
                    total_bytes,
                });
            }
            Some((Ok(chunk), (data, end, progress)))
        },
    )
}
