//! Background capture thread implementation.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use super::types::{CaptureError, CaptureResolution, CaptureSettings, Frame, FrameFormat};

/// Commands sent to the capture thread.
pub enum CaptureCommand {
    Stop,
}

/// Run the capture loop in a background thread.
///
/// Opens the camera, reports the actual resolution/fps (or the open error)
/// over `info_tx`, then continuously decodes frames into the shared buffer
/// until stopped. Frames are stored as captured; mirroring happens at
/// sample time in the event loop.
pub fn run_capture_loop(
    settings: CaptureSettings,
    buffer: Arc<Mutex<Option<Frame>>>,
    stop: Arc<AtomicBool>,
    rx: Receiver<CaptureCommand>,
    info_tx: Sender<Result<(CaptureResolution, u32), CaptureError>>,
) {
    let index = CameraIndex::Index(settings.device_index);

    let mut camera = match open_camera_with_fallback(&index, &settings) {
        Ok(cam) => cam,
        Err(e) => {
            let _ = info_tx.send(Err(e));
            return;
        }
    };

    // Open stream
    if let Err(e) = camera.open_stream() {
        let _ = info_tx.send(Err(CaptureError::DeviceUnavailable(e.to_string())));
        return;
    }

    // Send back the actual resolution and fps
    let res = camera.resolution();
    let actual_res = CaptureResolution {
        width: res.width(),
        height: res.height(),
    };
    let actual_fps = camera.frame_rate();
    let _ = info_tx.send(Ok((actual_res, actual_fps)));

    // Capture loop
    while !stop.load(Ordering::Relaxed) {
        // Check for commands (non-blocking)
        if let Ok(CaptureCommand::Stop) = rx.try_recv() {
            break;
        }

        // Try to capture a frame
        if let Ok(raw_frame) = camera.frame() {
            // Decode to RGB (handles MJPEG, YUYV, NV12, and other formats)
            if let Some(frame) = convert_to_rgb(&raw_frame) {
                if let Ok(mut buf) = buffer.lock() {
                    *buf = Some(frame);
                }
            }
            // If decoding fails, silently skip this frame and try the next one
        }

        // Small sleep to allow checking the stop signal
        thread::sleep(Duration::from_millis(1));
    }

    // Clean up
    let _ = camera.stop_stream();
}

/// Convert a nokhwa buffer to our RGB Frame format.
///
/// Returns `None` if the conversion fails (unsupported format or corrupt
/// data).
fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    Some(Frame {
        data: decoded.into_raw(),
        width: resolution.width(),
        height: resolution.height(),
        format: FrameFormat::Rgb,
        timestamp: Instant::now(),
    })
}

/// Try to open a camera with multiple format fallback strategies.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CaptureSettings,
) -> Result<Camera, CaptureError> {
    // Format strategies in order of preference:
    // 1. Closest match with NV12 (common on macOS)
    // 2. Closest match with MJPEG (widely supported)
    // 3. Highest resolution available (let the camera decide the format)
    let format_attempts: Vec<RequestedFormat> = vec![
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height),
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height),
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = None;

    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                last_error = Some(e);
                continue;
            }
        }
    }

    let e = last_error.unwrap();
    let msg = e.to_string().to_lowercase();
    if msg.contains("permission")
        || msg.contains("denied")
        || msg.contains("authorization")
        || msg.contains("access")
    {
        Err(CaptureError::PermissionDenied)
    } else {
        Err(CaptureError::DeviceUnavailable(e.to_string()))
    }
}
