//! Camera capture module for webcam access and frame sampling.
//!
//! This module provides the capture side of the pipeline:
//! - Device enumeration via [`list_devices`]
//! - Stream acquisition and release via [`CameraCapture`]
//! - Downsampling into the output raster via [`Sampler`]

mod capture;
mod capture_loop;
mod device;
mod raster;
mod sampler;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use raster::RasterFrame;
pub use sampler::Sampler;
pub use types::{
    CameraInfo, CaptureError, CaptureResolution, CaptureSettings, Frame, FrameFormat,
};
