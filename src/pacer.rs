//! Frame-rate pacing for the render loop.
//!
//! The pacer decides, once per scheduler tick, whether enough wall-clock
//! time has passed to sample and convert another frame, and measures the
//! achieved throughput over one-second windows. It never performs the work
//! itself; the event loop acts on the returned [`Tick`].
//!
//! Timestamps are injected as milliseconds so the logic is testable with a
//! simulated clock.

/// Length of the FPS measurement window in milliseconds.
pub const FPS_WINDOW_MS: u64 = 1000;

/// Outcome of one pacing tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// Whether the caller should sample, convert, and publish a frame now
    pub render: bool,
    /// Newly measured FPS, present when a measurement window just closed
    pub measured_fps: Option<u32>,
}

/// Pacing state machine: Idle -> (start) -> Running -> (stop) -> Idle.
///
/// While Idle every tick is a no-op, which is what guarantees that a tick
/// already scheduled when `stop()` is called performs no sampling and no
/// display update.
#[derive(Debug)]
pub struct Pacer {
    /// Whether the loop is in the Running state
    running: bool,
    /// Timestamp of the last rendered frame; None right after start so the
    /// first Running tick renders immediately
    last_frame_ms: Option<u64>,
    /// Start of the current FPS measurement window
    window_start_ms: u64,
    /// Frames rendered in the current window
    frame_count: u32,
    /// FPS measured over the last complete window
    measured_fps: u32,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer {
    /// Create a new pacer in the Idle state.
    pub fn new() -> Self {
        Self {
            running: false,
            last_frame_ms: None,
            window_start_ms: 0,
            frame_count: 0,
            measured_fps: 0,
        }
    }

    /// Transition to Running, resetting all timing state.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.last_frame_ms = None;
        self.window_start_ms = now_ms;
        self.frame_count = 0;
        self.measured_fps = 0;
    }

    /// Transition to Idle. Subsequent ticks perform no work.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the pacer is in the Running state.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// FPS measured over the last complete window.
    pub fn measured_fps(&self) -> u32 {
        self.measured_fps
    }

    /// Run one pacing decision.
    ///
    /// While Running:
    /// 1. If at least `1000/target_fps` ms have elapsed since the last
    ///    rendered frame, request a render and advance the frame timestamp.
    /// 2. Independently, if the measurement window is complete, publish the
    ///    frame count as the measured FPS and start a new window.
    ///
    /// `target_fps` is read fresh on every tick, so a settings change takes
    /// effect on the next tick. It is validated at the settings boundary
    /// and is never zero here. A target above the scheduler's cadence is
    /// soft-capped by how often this method gets called.
    pub fn tick(&mut self, now_ms: u64, target_fps: u32) -> Tick {
        if !self.running {
            return Tick::default();
        }

        let mut tick = Tick::default();
        let frame_interval_ms = 1000 / target_fps as u64;

        let due = match self.last_frame_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= frame_interval_ms,
        };
        if due {
            tick.render = true;
            self.last_frame_ms = Some(now_ms);
            self.frame_count += 1;
        }

        if now_ms.saturating_sub(self.window_start_ms) >= FPS_WINDOW_MS {
            self.measured_fps = self.frame_count;
            tick.measured_fps = Some(self.measured_fps);
            self.frame_count = 0;
            self.window_start_ms = now_ms;
        }

        tick
    }
}
