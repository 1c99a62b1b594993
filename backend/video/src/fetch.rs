//! Streaming download of a remote video into a scoped temp file.

use biomech_core::VideoError;
use futures::StreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// GET `url` and stream the body into a named temp file.
///
/// The returned [`NamedTempFile`] deletes itself when dropped, so the video
/// bytes never outlive the request regardless of how it ends. Network
/// failures and non-2xx statuses both surface as [`VideoError::Fetch`].
pub async fn fetch_to_temp(
    client: &reqwest::Client,
    url: &str,
) -> Result<NamedTempFile, VideoError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| VideoError::Fetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| VideoError::Fetch(e.to_string()))?;

    let tmp = tempfile::Builder::new()
        .prefix("biomech_video_")
        .suffix(".mp4")
        .tempfile()?;

    let mut file = tokio::fs::File::create(tmp.path()).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| VideoError::Fetch(e.to_string()))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    debug!(url, bytes = written, path = %tmp.path().display(), "Downloaded video");
    Ok(tmp)
}
