//! Terminal display and status sinks.
//!
//! The display sink accepts a glyph grid plus a fitted font size and draws
//! it centered in the terminal; the status sink accepts lifecycle messages
//! with a severity marker and renders them on the bottom line. Both are
//! implemented by [`TerminalDisplay`], which also owns raw mode and the
//! alternate screen with panic-safe cleanup.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Rect;

/// Nominal terminal cell width in pixels, used to report a viewport size.
pub const CELL_PX_WIDTH: u32 = 8;

/// Nominal terminal cell height in pixels.
pub const CELL_PX_HEIGHT: u32 = 16;

/// Severity marker for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Idle and ready to start
    Ready,
    /// Waiting on the platform (permission prompt, device open)
    Pending,
    /// Capturing and rendering
    Active,
    /// Capture stopped by the user
    Stopped,
    /// Acquisition or device failure
    Error,
}

impl Severity {
    /// Icon marker shown next to the message.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Ready => "🟢",
            Severity::Pending => "⏳",
            Severity::Active => "🟢",
            Severity::Stopped => "⏸",
            Severity::Error => "🔴",
        }
    }
}

/// Presentation sink for the glyph grid.
pub trait DisplaySink {
    /// Show a glyph grid at the given fitted font size.
    fn present(&mut self, grid: &str, font_size: u16) -> io::Result<()>;

    /// Clear the display region, leaving a placeholder message.
    fn clear(&mut self, placeholder: &str) -> io::Result<()>;
}

/// Sink for lifecycle status messages.
pub trait StatusSink {
    /// Report a lifecycle transition with its severity marker.
    fn status(&mut self, message: &str, severity: Severity) -> io::Result<()>;
}

/// Static flag to track if raw mode is active (for the panic handler)
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Install a panic hook that restores terminal state before panicking.
/// This ensures the terminal is usable even if the app panics.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return; // Already installed
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before showing the panic message
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen);
            let _ = disable_raw_mode();
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
        }

        original_hook(panic_info);
    }));
}

/// Terminal-backed display and status sink.
///
/// Entering creates the alternate screen and enables raw mode; both are
/// restored on drop (or on panic, via the installed hook).
pub struct TerminalDisplay {
    stdout: io::Stdout,
    /// Whether this display is responsible for terminal cleanup
    active: bool,
    /// Bottom status line state
    status_visible: bool,
    status_message: String,
    status_severity: Severity,
    /// Settings summary shown after the message (resolution, ramp, ...)
    summary: String,
    /// Last measured FPS, updated once per second
    measured_fps: u32,
    /// Last fitted font size, echoed on the status line
    font_size: u16,
}

impl TerminalDisplay {
    /// Enter the terminal display: raw mode plus alternate screen.
    ///
    /// # Errors
    /// Returns an error if the terminal refuses raw mode (e.g. not a TTY).
    pub fn new(status_visible: bool) -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

        Ok(Self {
            stdout,
            active: true,
            status_visible,
            status_message: String::new(),
            status_severity: Severity::Ready,
            summary: String::new(),
            measured_fps: 0,
            font_size: 0,
        })
    }

    /// Report the display viewport in nominal pixels.
    ///
    /// The terminal cell grid is converted at 8x16 px per cell, with the
    /// bottom row reserved for the status line. Returns (0, 0) when the
    /// size cannot be queried, which makes the layout fitter fall back.
    pub fn viewport_px(&self) -> (u32, u32) {
        match crossterm::terminal::size() {
            Ok((cols, rows)) => (
                cols as u32 * CELL_PX_WIDTH,
                rows.saturating_sub(1) as u32 * CELL_PX_HEIGHT,
            ),
            Err(_) => (0, 0),
        }
    }

    /// Replace the settings summary shown on the status line.
    pub fn set_summary(&mut self, summary: String) -> io::Result<()> {
        self.summary = summary;
        self.draw_status()
    }

    /// Update the measured FPS counter.
    pub fn set_measured_fps(&mut self, fps: u32) -> io::Result<()> {
        self.measured_fps = fps;
        self.draw_status()
    }

    /// Toggle status line visibility.
    pub fn toggle_status(&mut self) -> io::Result<()> {
        self.status_visible = !self.status_visible;
        if self.status_visible {
            self.draw_status()
        } else {
            // Wipe the old status line
            let (_, rows) = crossterm::terminal::size().unwrap_or((80, 24));
            let out = format!("\x1b7\x1b[{};1H\x1b[2K\x1b8", rows);
            self.stdout.write_all(out.as_bytes())?;
            self.stdout.flush()
        }
    }

    /// Restore the terminal to its original state.
    ///
    /// After calling this, drop is a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
            crossterm::execute!(self.stdout, crossterm::terminal::LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    /// Content area above the status line.
    fn content_area(&self) -> Rect {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows.saturating_sub(1),
        }
    }

    /// Centered placement of a grid inside the content area.
    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    /// Format the status line.
    ///
    /// Layout: " {icon} {message} | FPS: {n} | {summary} | font:{n}px "
    fn format_status(&self) -> String {
        format!(
            " {} {} | FPS: {} | {} | font:{}px ",
            self.status_severity.icon(),
            self.status_message,
            self.measured_fps,
            self.summary,
            self.font_size,
        )
    }

    /// Redraw the bottom status line.
    fn draw_status(&mut self) -> io::Result<()> {
        if !self.status_visible {
            return Ok(());
        }

        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        let line: String = self.format_status().chars().take(cols as usize).collect();

        // Save cursor, jump to the bottom row, clear it, draw inverted
        let out = format!("\x1b7\x1b[{};1H\x1b[2K\x1b[7m{}\x1b[0m\x1b8", rows, line);
        self.stdout.write_all(out.as_bytes())?;
        self.stdout.flush()
    }
}

impl DisplaySink for TerminalDisplay {
    fn present(&mut self, grid: &str, font_size: u16) -> io::Result<()> {
        self.font_size = font_size;

        let area = self.content_area();
        let lines: Vec<&str> = grid.lines().collect();
        let grid_width = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let rect = Self::centered(area, grid_width, lines.len() as u16);

        // Build the whole frame as one string and write it in a single
        // syscall to avoid flicker.
        let mut out = String::with_capacity(grid.len() + 64);
        out.push_str("\x1b7"); // Save cursor (DEC)
        out.push_str("\x1b[?25l"); // Hide cursor

        for (row, line) in lines.iter().enumerate().take(rect.height as usize) {
            // 1-based ANSI coordinates
            out.push_str(&format!("\x1b[{};{}H", rect.y + row as u16 + 1, rect.x + 1));
            for c in line.chars().take(rect.width as usize) {
                out.push(c);
            }
        }

        out.push_str("\x1b[?25h"); // Show cursor
        out.push_str("\x1b8"); // Restore cursor (DEC)

        self.stdout.write_all(out.as_bytes())?;
        self.stdout.flush()?;

        self.draw_status()
    }

    fn clear(&mut self, placeholder: &str) -> io::Result<()> {
        let area = self.content_area();
        let width = placeholder.chars().count() as u16;
        let rect = Self::centered(area, width, 1);

        let out = format!(
            "\x1b[2J\x1b[{};{}H{}",
            rect.y + 1,
            rect.x + 1,
            placeholder
        );
        self.stdout.write_all(out.as_bytes())?;
        self.stdout.flush()?;

        self.draw_status()
    }
}

impl StatusSink for TerminalDisplay {
    fn status(&mut self, message: &str, severity: Severity) -> io::Result<()> {
        self.status_message = message.to_string();
        self.status_severity = severity;
        self.draw_status()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
            // Best-effort cleanup, ignore errors during drop
            let _ = crossterm::execute!(self.stdout, crossterm::terminal::LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}
