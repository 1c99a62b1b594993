//! Single-frame extraction.
//!
//! Seeks to the frame index addressed by a millisecond offset, decodes one
//! frame, and writes it out as a JPEG.

use std::path::Path;

use biomech_core::VideoError;
use ffmpeg_next::format::Pixel;
use ffmpeg_next::media::Type;
use ffmpeg_next::software::scaling::{context::Context as Scaler, flag::Flags};
use ffmpeg_next::util::frame::video::Video;
use tracing::debug;

/// Decode the frame at `ms` from `video_path` and save it to `out_path`.
///
/// A position past the end of the stream (seek failure or decoder exhaustion
/// before the target) is reported as [`VideoError::FrameNotFound`]; anything
/// else is a generic decode failure.
pub fn extract_frame(video_path: &Path, ms: i64, out_path: &Path) -> Result<(), VideoError> {
    ffmpeg_next::init().map_err(|e| VideoError::Decode(e.to_string()))?;

    let mut ictx =
        ffmpeg_next::format::input(&video_path).map_err(|e| VideoError::Decode(e.to_string()))?;

    let stream = ictx
        .streams()
        .best(Type::Video)
        .ok_or_else(|| VideoError::Decode("no video stream found".into()))?;
    let stream_index = stream.index();
    let time_base = f64::from(stream.time_base());
    let fps = f64::from(stream.avg_frame_rate());

    let target_index = crate::probe::frame_index(ms, fps);
    let target_secs = if fps > 0.0 {
        target_index as f64 / fps
    } else {
        0.0
    };
    // Target position in stream ticks; frames at or past this are accepted.
    let target_pts = if time_base > 0.0 {
        (target_secs / time_base).round() as i64
    } else {
        0
    };
    debug!(ms, target_index, target_secs, "Seeking to frame");

    let mut decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .map_err(|e| VideoError::Decode(e.to_string()))?
        .decoder()
        .video()
        .map_err(|e| VideoError::Decode(e.to_string()))?;

    // Land on the keyframe at or before the target, then decode forward.
    let seek_ts = (target_secs * f64::from(ffmpeg_next::ffi::AV_TIME_BASE)) as i64;
    ictx.seek(seek_ts, ..seek_ts)
        .map_err(|e| VideoError::FrameNotFound(format!("seek to {ms}ms failed: {e}")))?;

    let mut decoded = Video::empty();
    for (packet_stream, packet) in ictx.packets() {
        if packet_stream.index() != stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| VideoError::Decode(e.to_string()))?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            let pts = decoded.timestamp().or_else(|| decoded.pts());
            if pts.map_or(true, |t| t >= target_pts) {
                return write_jpeg(&decoded, out_path);
            }
        }
    }

    // Drain the decoder in case the target sits in its last few frames.
    decoder
        .send_eof()
        .map_err(|e| VideoError::Decode(e.to_string()))?;
    while decoder.receive_frame(&mut decoded).is_ok() {
        let pts = decoded.timestamp().or_else(|| decoded.pts());
        if pts.map_or(true, |t| t >= target_pts) {
            return write_jpeg(&decoded, out_path);
        }
    }

    Err(VideoError::FrameNotFound(format!(
        "no decodable frame at {ms}ms (index {target_index})"
    )))
}

/// Convert a decoded frame to packed RGB24 and save it as a JPEG.
fn write_jpeg(frame: &Video, out_path: &Path) -> Result<(), VideoError> {
    let mut scaler = Scaler::get(
        frame.format(),
        frame.width(),
        frame.height(),
        Pixel::RGB24,
        frame.width(),
        frame.height(),
        Flags::BILINEAR,
    )
    .map_err(|e| VideoError::Decode(e.to_string()))?;

    let mut rgb = Video::empty();
    scaler
        .run(frame, &mut rgb)
        .map_err(|e| VideoError::Decode(e.to_string()))?;

    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let stride = rgb.stride(0);
    let data = rgb.data(0);

    // Rows may be padded to the stride; copy only the visible pixels.
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let start = y * stride;
        let end = start + width * 3;
        if end > data.len() {
            return Err(VideoError::Decode("frame data shorter than expected".into()));
        }
        pixels.extend_from_slice(&data[start..end]);
    }

    let img = image::RgbImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| VideoError::Decode("frame buffer has unexpected size".into()))?;
    img.save(out_path)
        .map_err(|e| VideoError::Decode(e.to_string()))?;

    debug!(path = %out_path.display(), width, height, "Wrote frame");
    Ok(())
}
