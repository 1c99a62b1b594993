//! Video fetch & probe.
//!
//! Downloads a remote video into a scoped temp file, reads container
//! metadata (frame rate, frame count) with FFmpeg, and can seek out a single
//! frame as a JPEG. Decoding is blocking, so the async entry points here push
//! the FFmpeg work onto the blocking thread pool.

pub mod extract;
pub mod fetch;
pub mod probe;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use biomech_core::VideoError;
use tracing::debug;
use uuid::Uuid;

pub use probe::VideoInfo;

/// Download `url` and probe its frame rate / frame count.
///
/// The temp file lives only for the duration of this call; it is removed on
/// every exit path, including errors.
pub async fn probe_url(client: &reqwest::Client, url: &str) -> Result<VideoInfo, VideoError> {
    let tmp = fetch::fetch_to_temp(client, url).await?;
    tokio::task::spawn_blocking(move || {
        let info = probe::probe(tmp.path());
        drop(tmp);
        info
    })
    .await
    .map_err(|e| VideoError::Other(anyhow!("probe task panicked: {e}")))?
}

/// Download `url`, decode the frame at `ms`, and write it as a JPEG under
/// `frames_dir`. Returns the written path.
///
/// Frame files are intentionally left on disk for the caller to collect; the
/// uuid suffix keeps concurrent requests for the same timestamp from
/// clobbering each other.
pub async fn extract_frame_url(
    client: &reqwest::Client,
    url: &str,
    ms: i64,
    frames_dir: &Path,
) -> Result<PathBuf, VideoError> {
    let tmp = fetch::fetch_to_temp(client, url).await?;

    tokio::fs::create_dir_all(frames_dir).await?;
    let out_path = frames_dir.join(format!("frame_{}ms_{}.jpg", ms, Uuid::new_v4().simple()));
    debug!(path = %out_path.display(), ms, "Extracting frame");

    let result_path = out_path.clone();
    tokio::task::spawn_blocking(move || {
        let result = extract::extract_frame(tmp.path(), ms, &result_path);
        drop(tmp);
        result
    })
    .await
    .map_err(|e| VideoError::Other(anyhow!("extract task panicked: {e}")))??;

    Ok(out_path)
}
