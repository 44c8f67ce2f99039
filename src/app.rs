//! Async event loop for concurrent handling of input and frame pacing.
//!
//! This loop handles two concurrent concerns with `tokio::select!`:
//! 1. Terminal events (keyboard input, resize) via crossterm's EventStream
//! 2. The pacing tick, driven by a fixed interval standing in for the
//!    display refresh signal
//!
//! Each tick runs to completion before the next is scheduled, so sampling,
//! mapping, and display updates never overlap and no locking is needed
//! beyond the capture thread's latest-frame slot.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::time::MissedTickBehavior;

use crate::camera::{CameraCapture, CaptureSettings, Sampler};
use crate::display::{DisplaySink, Severity, StatusSink, TerminalDisplay};
use crate::input::{handle_key_event, KeyAction};
use crate::pacer::Pacer;
use crate::render::{fit_font_size, to_glyph_grid};
use crate::settings::RenderSettings;

/// Scheduler tick interval (~60 Hz, the display refresh stand-in).
const TICK_INTERVAL_MS: u64 = 16;

/// Placeholder shown in the display region while capture is stopped.
const STOPPED_PLACEHOLDER: &str = "Camera stopped. Press s to start.";

/// Run the viewer until the user quits.
///
/// The terminal is put into raw mode and the alternate screen for the
/// duration of the call and restored on exit (or panic).
pub async fn run(
    mut settings: RenderSettings,
    device_index: u32,
    status_visible: bool,
    autostart: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut display = TerminalDisplay::new(status_visible)?;
    let mut event_stream = EventStream::new();

    let mut tick_interval = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
    tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Monotonic clock for the pacer, in milliseconds since startup
    let epoch = Instant::now();

    let (grid_w, grid_h) = settings.grid_dimensions();
    let mut sampler = Sampler::new(grid_w, grid_h);
    let mut pacer = Pacer::new();
    let mut camera: Option<CameraCapture> = None;

    display.set_summary(settings_summary(&settings))?;
    display.status("Ready to start camera", Severity::Ready)?;
    display.clear("Press s to start the camera.")?;

    if autostart {
        let now_ms = epoch.elapsed().as_millis() as u64;
        start_capture(device_index, &mut camera, &mut pacer, &mut display, now_ms)?;
    }

    loop {
        tokio::select! {
            // Keyboard input and terminal resize
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        match handle_key_event(key) {
                            KeyAction::Quit => break,
                            KeyAction::ToggleCapture => {
                                let now_ms = epoch.elapsed().as_millis() as u64;
                                if pacer.is_running() {
                                    stop_capture(&mut camera, &mut pacer, &mut display)?;
                                } else {
                                    start_capture(
                                        device_index,
                                        &mut camera,
                                        &mut pacer,
                                        &mut display,
                                        now_ms,
                                    )?;
                                }
                            }
                            KeyAction::CycleResolution => {
                                settings.cycle_size();
                                // Wipe glyphs left over from the old grid size
                                if pacer.is_running() {
                                    display.clear("")?;
                                }
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::CycleRamp => {
                                settings.cycle_ramp();
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::BrightnessUp => {
                                settings.brightness_up();
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::BrightnessDown => {
                                settings.brightness_down();
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::FpsUp => {
                                settings.fps_up();
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::FpsDown => {
                                settings.fps_down();
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::ToggleMirror => {
                                settings.toggle_mirror();
                                display.set_summary(settings_summary(&settings))?;
                            }
                            KeyAction::ToggleStatusBar => {
                                display.toggle_status()?;
                            }
                            KeyAction::None => {}
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        // The next present() reads the new size; just wipe
                        // so nothing lingers outside the new centered rect
                        display.clear(if pacer.is_running() {
                            ""
                        } else {
                            STOPPED_PLACEHOLDER
                        })?;
                    }
                    Some(Ok(_)) => {
                        // Ignore other events (mouse, focus, paste)
                    }
                    Some(Err(e)) => {
                        return Err(Box::new(e));
                    }
                    None => break,
                }
            }

            // Pacing tick: sample + convert when a frame is due
            _ = tick_interval.tick() => {
                let now_ms = epoch.elapsed().as_millis() as u64;
                let tick = pacer.tick(now_ms, settings.target_fps);

                if let Some(fps) = tick.measured_fps {
                    display.set_measured_fps(fps)?;
                }

                if tick.render {
                    render_frame(&settings, &camera, &mut sampler, &mut display)?;
                }
            }
        }
    }

    // Release the camera before restoring the terminal
    if let Some(mut cam) = camera.take() {
        cam.stop();
    }
    display.restore()?;

    Ok(())
}

/// Sample the latest camera frame and publish it to the display.
///
/// Settings are read here, once per rendered frame; a dimension change is
/// applied to the raster before sampling, never mid-conversion.
fn render_frame(
    settings: &RenderSettings,
    camera: &Option<CameraCapture>,
    sampler: &mut Sampler,
    display: &mut TerminalDisplay,
) -> io::Result<()> {
    let Some(cam) = camera.as_ref() else {
        return Ok(());
    };
    // The stream may not have produced a decodable frame yet
    if !cam.is_ready() {
        return Ok(());
    }
    let Some(frame) = cam.latest_frame() else {
        return Ok(());
    };

    let (grid_w, grid_h) = settings.grid_dimensions();
    sampler.resize(grid_w, grid_h);
    let raster = sampler.sample(&frame, settings.mirror);
    let grid = to_glyph_grid(raster, settings.ramp.chars(), settings.brightness);

    let (viewport_w, viewport_h) = display.viewport_px();
    let font_size = fit_font_size(grid_w, grid_h, viewport_w, viewport_h);

    display.present(&grid, font_size)
}

/// Acquire the camera and transition the pacer to Running.
///
/// An acquisition failure is reported on the status line and leaves the
/// pacer Idle; the user retries with the start hotkey.
fn start_capture(
    device_index: u32,
    camera: &mut Option<CameraCapture>,
    pacer: &mut Pacer,
    display: &mut TerminalDisplay,
    now_ms: u64,
) -> io::Result<()> {
    display.status("Requesting camera access...", Severity::Pending)?;

    let capture_settings = CaptureSettings {
        device_index,
        ..CaptureSettings::default()
    };

    let opened = CameraCapture::open(capture_settings).and_then(|mut cam| {
        cam.start()?;
        Ok(cam)
    });

    match opened {
        Ok(cam) => {
            *camera = Some(cam);
            pacer.start(now_ms);
            display.status("Camera active", Severity::Active)?;
        }
        Err(e) => {
            log::warn!("camera acquisition failed: {}", e);
            display.status(&format!("Error: {}", e), Severity::Error)?;
        }
    }

    Ok(())
}

/// Release the camera and transition the pacer to Idle.
fn stop_capture(
    camera: &mut Option<CameraCapture>,
    pacer: &mut Pacer,
    display: &mut TerminalDisplay,
) -> io::Result<()> {
    if let Some(mut cam) = camera.take() {
        cam.stop();
    }
    pacer.stop();
    display.clear(STOPPED_PLACEHOLDER)?;
    display.status("Camera stopped", Severity::Stopped)
}

/// Settings summary for the status line.
fn settings_summary(settings: &RenderSettings) -> String {
    format!(
        "{} | {} | b:{:.1} | target:{} fps{}",
        settings.size,
        settings.ramp.name(),
        settings.brightness,
        settings.target_fps,
        if settings.mirror { " | mirror" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GlyphRamp;
    use crate::settings::SizePreset;

    #[test]
    fn test_settings_summary_format() {
        let settings = RenderSettings::default();
        assert_eq!(
            settings_summary(&settings),
            "40x24 | classic | b:1.0 | target:15 fps | mirror"
        );
    }

    #[test]
    fn test_settings_summary_without_mirror() {
        let settings = RenderSettings {
            size: SizePreset::Huge,
            ramp: GlyphRamp::Detailed,
            brightness: 2.5,
            target_fps: 30,
            mirror: false,
        };
        assert_eq!(
            settings_summary(&settings),
            "120x60 | detailed | b:2.5 | target:30 fps"
        );
    }
}
