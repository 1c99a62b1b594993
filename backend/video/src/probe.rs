//! Container-level metadata probe.

use std::path::Path;

use biomech_core::VideoError;
use ffmpeg_next::media::Type;
use tracing::debug;

/// Frame rate, frame count, and derived duration of a video file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    pub fps: f64,
    pub frame_count: i64,
    pub duration_ms: f64,
}

/// Read frame rate and frame count from the best video stream.
///
/// Containers that don't declare a frame count get an estimate from the
/// stream duration; streams with a non-positive frame rate report a duration
/// of zero rather than failing.
pub fn probe(path: &Path) -> Result<VideoInfo, VideoError> {
    ffmpeg_next::init().map_err(|e| VideoError::Decode(e.to_string()))?;

    let ictx = ffmpeg_next::format::input(&path).map_err(|e| VideoError::Decode(e.to_string()))?;
    let stream = ictx
        .streams()
        .best(Type::Video)
        .ok_or_else(|| VideoError::Decode("no video stream found".into()))?;

    let fps = f64::from(stream.avg_frame_rate());
    let mut frame_count = stream.frames();
    if frame_count <= 0 {
        // nb_frames is optional container metadata; estimate from duration.
        let stream_secs = stream.duration() as f64 * f64::from(stream.time_base());
        frame_count = if stream_secs > 0.0 && fps > 0.0 {
            (stream_secs * fps).round() as i64
        } else {
            0
        };
    }

    let info = VideoInfo {
        fps,
        frame_count,
        duration_ms: duration_ms(frame_count, fps),
    };
    debug!(path = %path.display(), fps = info.fps, frames = info.frame_count, "Probed video");
    Ok(info)
}

/// `(frame_count / fps) * 1000`, with a zero result guarding the fps <= 0
/// case (defined edge case, not an error).
pub fn duration_ms(frame_count: i64, fps: f64) -> f64 {
    if fps > 0.0 {
        (frame_count as f64 / fps) * 1000.0
    } else {
        0.0
    }
}

/// Frame index addressed by a millisecond offset: `floor(ms / 1000 * fps)`.
pub fn frame_index(ms: i64, fps: f64) -> i64 {
    ((ms as f64 / 1000.0) * fps).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_follows_frame_count_over_fps() {
        assert_eq!(duration_ms(300, 30.0), 10_000.0);
        assert_eq!(duration_ms(90, 29.97), (90.0 / 29.97) * 1000.0);
    }

    #[test]
    fn non_positive_fps_yields_zero_duration() {
        assert_eq!(duration_ms(300, 0.0), 0.0);
        assert_eq!(duration_ms(300, -1.0), 0.0);
        assert!(duration_ms(300, 0.0).is_finite());
    }

    #[test]
    fn frame_index_floors_toward_zero() {
        assert_eq!(frame_index(1000, 30.0), 30);
        assert_eq!(frame_index(999, 30.0), 29);
        assert_eq!(frame_index(0, 30.0), 0);
        assert_eq!(frame_index(1001, 29.97), 30);
    }

    #[test]
    fn frame_index_with_zero_fps_is_zero() {
        assert_eq!(frame_index(5000, 0.0), 0);
    }
}
