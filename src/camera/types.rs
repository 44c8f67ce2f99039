//! Camera types and data structures.

use std::fmt;
use std::time::Instant;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera capture resolution.
///
/// This is the resolution requested from the hardware, not the output grid
/// size; the sampler downsamples capture frames to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureResolution {
    pub width: u32,
    pub height: u32,
}

impl CaptureResolution {
    /// Low resolution (320x240), fast on constrained hardware
    pub const LOW: CaptureResolution = CaptureResolution {
        width: 320,
        height: 240,
    };

    /// Medium resolution (640x480), the default request
    pub const MEDIUM: CaptureResolution = CaptureResolution {
        width: 640,
        height: 480,
    };
}

impl Default for CaptureResolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Pixel format of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
}

/// A captured camera frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel format
    pub format: FrameFormat,
    /// Timestamp when the frame was captured
    pub timestamp: Instant,
}

impl Frame {
    /// Get the number of bytes per pixel (3 for RGB).
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format {
            FrameFormat::Rgb => 3,
        }
    }
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Camera device index
    pub device_index: u32,
    /// Requested capture resolution
    pub resolution: CaptureResolution,
    /// Requested hardware frame rate (actual may vary)
    pub fps: u32,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: CaptureResolution::default(),
            fps: 30,
        }
    }
}

/// Errors that can occur when acquiring the camera.
///
/// Acquisition failures are terminal for that attempt: they are surfaced to
/// the status line and the user re-triggers capture to retry. None of them
/// crash the process.
#[derive(Debug)]
pub enum CaptureError {
    /// Camera permission was denied by the platform
    PermissionDenied,
    /// No usable camera: none connected, device missing, or stream failed
    DeviceUnavailable(String),
    /// Platform lacks the capture primitives (backend query failed)
    Unsupported(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => {
                write!(
                    f,
                    "Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera"
                )
            }
            CaptureError::DeviceUnavailable(msg) => {
                write!(f, "Camera unavailable: {}", msg)
            }
            CaptureError::Unsupported(msg) => {
                write!(f, "Camera capture is not supported on this system: {}", msg)
            }
        }
    }
}

impl std::error::Error for CaptureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_capture_resolution_default() {
        let res = CaptureResolution::default();
        assert_eq!(res.width, 640);
        assert_eq!(res.height, 480);
    }

    #[test]
    fn test_capture_settings_default() {
        let settings = CaptureSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution, CaptureResolution::MEDIUM);
        assert_eq!(settings.fps, 30);
    }

    #[test]
    fn test_capture_error_display() {
        assert!(format!("{}", CaptureError::PermissionDenied).contains("permission denied"));
        assert_eq!(
            format!("{}", CaptureError::DeviceUnavailable("no device at index 3".to_string())),
            "Camera unavailable: no device at index 3"
        );
        assert!(
            format!("{}", CaptureError::Unsupported("no backend".to_string()))
                .contains("not supported")
        );
    }

    #[test]
    fn test_frame_bytes_per_pixel() {
        let frame = Frame {
            data: vec![0; 6], // 2 RGB pixels
            width: 2,
            height: 1,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        };
        assert_eq!(frame.bytes_per_pixel(), 3);
    }
}
