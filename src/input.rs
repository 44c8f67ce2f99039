//! Keyboard input handling.
//!
//! Maps crossterm key events to the control actions of the render loop.
//! All runtime control is single keystrokes; there is no other input
//! surface while the viewer is on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application
    Quit,
    /// Start or stop capturing
    ToggleCapture,
    /// Cycle the output resolution preset
    CycleResolution,
    /// Cycle the glyph ramp
    CycleRamp,
    /// Increase brightness by one step
    BrightnessUp,
    /// Decrease brightness by one step
    BrightnessDown,
    /// Increase the target frame rate
    FpsUp,
    /// Decrease the target frame rate
    FpsDown,
    /// Toggle the mirror effect
    ToggleMirror,
    /// Toggle the status line
    ToggleStatusBar,
    /// No action for this key
    None,
}

/// Map a key event to its control action.
///
/// Keys:
/// - `q` / `Esc` / `Ctrl+C`: quit
/// - `s`: start/stop capture
/// - `r`: cycle resolution
/// - `c`: cycle ramp
/// - `+`/`-`: brightness up/down
/// - `]`/`[`: target fps up/down
/// - `m`: toggle mirror
/// - `b`: toggle status line
pub fn handle_key_event(event: KeyEvent) -> KeyAction {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::ToggleCapture,
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::CycleResolution,
        KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::CycleRamp,
        KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::BrightnessUp,
        KeyCode::Char('-') => KeyAction::BrightnessDown,
        KeyCode::Char(']') => KeyAction::FpsUp,
        KeyCode::Char('[') => KeyAction::FpsDown,
        KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::ToggleMirror,
        KeyCode::Char('b') | KeyCode::Char('B') => KeyAction::ToggleStatusBar,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_toggle_capture() {
        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(s), KeyAction::ToggleCapture);

        let upper = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(upper), KeyAction::ToggleCapture);
    }

    #[test]
    fn test_cycle_keys() {
        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(r), KeyAction::CycleResolution);

        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(c), KeyAction::CycleRamp);
    }

    #[test]
    fn test_brightness_keys() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(plus), KeyAction::BrightnessUp);

        // '=' is the unshifted '+' on most layouts
        let equals = KeyEvent::new(KeyCode::Char('='), KeyModifiers::NONE);
        assert_eq!(handle_key_event(equals), KeyAction::BrightnessUp);

        let minus = KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(minus), KeyAction::BrightnessDown);
    }

    #[test]
    fn test_fps_keys() {
        let close = KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(close), KeyAction::FpsUp);

        let open = KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE);
        assert_eq!(handle_key_event(open), KeyAction::FpsDown);
    }

    #[test]
    fn test_unknown_key_is_none() {
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(x), KeyAction::None);

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_x), KeyAction::None);
    }
}
