//! Camera capture handle and public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::capture_loop::{run_capture_loop, CaptureCommand};
use super::device::list_devices;
use super::types::{CaptureError, CaptureResolution, CaptureSettings, Frame};

/// Camera capture handle.
///
/// Owns a background thread that continuously captures frames and stores
/// the latest decoded frame in a shared buffer. `start()` acquires the
/// stream (and blocks until the device reports success or failure),
/// `latest_frame()` retrieves the most recent frame, and `stop()` releases
/// all hardware resources. Stopping is idempotent and also happens on drop.
pub struct CameraCapture {
    /// Latest captured frame (shared with capture thread)
    frame_buffer: Arc<Mutex<Option<Frame>>>,
    /// Capture thread handle
    capture_thread: Option<JoinHandle<()>>,
    /// Channel to send commands to capture thread
    command_tx: Option<Sender<CaptureCommand>>,
    /// Signal to stop capture thread
    stop_signal: Arc<AtomicBool>,
    /// Current settings
    settings: CaptureSettings,
    /// Actual resolution (set after camera opens)
    actual_resolution: Option<CaptureResolution>,
    /// Actual FPS (set after camera opens)
    actual_fps: Option<u32>,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera with the specified settings.
    ///
    /// This validates that the device exists but doesn't open the camera
    /// stream until `start()` is called; the camera is opened inside the
    /// background thread to avoid thread-safety issues.
    ///
    /// # Errors
    /// * `CaptureError::Unsupported` - If the platform has no capture backend
    /// * `CaptureError::DeviceUnavailable` - If the device index doesn't exist
    pub fn open(settings: CaptureSettings) -> Result<Self, CaptureError> {
        let devices = list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CaptureError::DeviceUnavailable(format!(
                "no camera at index {} (run 'asciicam list-cameras' to see devices)",
                settings.device_index
            )));
        }

        Ok(Self {
            frame_buffer: Arc::new(Mutex::new(None)),
            capture_thread: None,
            command_tx: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
            actual_resolution: None,
            actual_fps: None,
        })
    }

    /// Get the current capture settings.
    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Get the actual resolution the camera is using.
    ///
    /// Returns `None` until the stream has been started. May differ from
    /// the requested resolution if the camera doesn't support it exactly.
    pub fn actual_resolution(&self) -> Option<CaptureResolution> {
        self.actual_resolution
    }

    /// Get the actual frame rate the camera is using.
    pub fn actual_fps(&self) -> Option<u32> {
        self.actual_fps
    }

    /// Start capturing frames in a background thread.
    ///
    /// Blocks until the device reports readiness or an open failure. There
    /// is deliberately no timeout: a hung permission prompt leaves the
    /// attempt pending until the platform answers. Calling `start()` while
    /// already running is a no-op.
    ///
    /// # Errors
    /// * `CaptureError::PermissionDenied` - If camera access is denied
    /// * `CaptureError::DeviceUnavailable` - If the camera fails to open or stream
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.is_running() {
            return Ok(());
        }

        // Reset stop signal
        self.stop_signal.store(false, Ordering::SeqCst);

        // Create channel for commands
        let (tx, rx) = mpsc::channel();
        self.command_tx = Some(tx);

        // Clone values for the capture thread
        let buffer = Arc::clone(&self.frame_buffer);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();

        // Channel to receive actual resolution/fps from the thread
        let (info_tx, info_rx) =
            mpsc::channel::<Result<(CaptureResolution, u32), CaptureError>>();

        // Spawn background capture thread
        let handle = std::thread::spawn(move || {
            run_capture_loop(settings, buffer, stop, rx, info_tx);
        });

        self.capture_thread = Some(handle);

        // Wait for the thread to report success or failure
        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                log::info!(
                    "camera stream open: {}x{} @ {} fps",
                    res.width,
                    res.height,
                    fps
                );
                self.actual_resolution = Some(res);
                self.actual_fps = Some(fps);
                Ok(())
            }
            Ok(Err(e)) => {
                // Thread encountered an error, clean up
                self.stop_signal.store(true, Ordering::SeqCst);
                if let Some(h) = self.capture_thread.take() {
                    let _ = h.join();
                }
                Err(e)
            }
            Err(_) => {
                // Channel closed unexpectedly
                self.stop_signal.store(true, Ordering::SeqCst);
                if let Some(h) = self.capture_thread.take() {
                    let _ = h.join();
                }
                Err(CaptureError::DeviceUnavailable(
                    "capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread and release the hardware.
    ///
    /// Signals the background thread, waits for it to finish, and clears
    /// the frame buffer. Idempotent; safe to call when already stopped.
    pub fn stop(&mut self) {
        // Signal the thread to stop via atomic flag
        self.stop_signal.store(true, Ordering::SeqCst);

        // Also send stop command via channel (in case thread is blocked)
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(CaptureCommand::Stop);
        }

        // Wait for thread to finish
        if let Some(handle) = self.capture_thread.take() {
            let _ = handle.join();
            log::info!("camera stream released");
        }

        if let Ok(mut buf) = self.frame_buffer.lock() {
            *buf = None;
        }
    }

    /// Check whether the stream has produced its first decodable frame.
    ///
    /// Callers check this before sampling; until it returns true the
    /// sampler's raster keeps its default (black) content.
    pub fn is_ready(&self) -> bool {
        self.frame_buffer
            .lock()
            .map(|buf| buf.is_some())
            .unwrap_or(false)
    }

    /// Get the latest captured frame.
    ///
    /// Returns `None` if no frame has been captured yet or if capturing is
    /// not running. Never blocks on the capture thread.
    pub fn latest_frame(&self) -> Option<Frame> {
        let buffer = self.frame_buffer.lock().ok()?;
        buffer.clone()
    }

    /// Check if the capture thread is currently running.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}
