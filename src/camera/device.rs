//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use super::types::{CameraInfo, CaptureError};

/// List all available camera devices on the system.
///
/// Returns a vector of `CameraInfo` structs. If no cameras are found the
/// vector is empty (not an error); a failed query means the platform lacks
/// a usable capture backend and maps to [`CaptureError::Unsupported`].
pub fn list_devices() -> Result<Vec<CameraInfo>, CaptureError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CaptureError::Unsupported(e.to_string()))?;

    Ok(devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect())
}
