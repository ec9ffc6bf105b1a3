use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Show the directory picker
    PickDirectory,
    /// Open the selected file with its default application
    Open,
    /// Enter the selected directory or open the selected file
    Activate,
    /// Select the next row
    Next,
    /// Select the previous row
    Previous,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q, Esc or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Buttons
        (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::PickDirectory,
        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::Open,

        // Same as a double-click on the selected row
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Activate,

        // Navigation
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::Next,
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::Previous,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Next,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Previous,

        // Help: ?
        (KeyCode::Char('?'), _) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

/// Result of a key press while the directory prompt is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Confirm,
    Cancel,
    Insert(char),
    Backspace,
    Clear,
    None,
}

/// Maps keyboard events to directory prompt edits
pub fn handle_picker_input(key: KeyEvent) -> PickerAction {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => PickerAction::Confirm,
        (KeyCode::Esc, _) => PickerAction::Cancel,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => PickerAction::Cancel,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => PickerAction::Clear,
        (KeyCode::Backspace, _) => PickerAction::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => PickerAction::Insert(c),
        _ => PickerAction::None,
    }
}

/// Turns pairs of left clicks on the same row into double-clicks
#[derive(Debug, Default, Clone)]
pub struct ClickTracker {
    last: Option<(usize, Instant)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click on `row` and reports whether it completes a double-click
    pub fn register(&mut self, row: usize, now: Instant, interval: Duration) -> bool {
        if let Some((last_row, at)) = self.last {
            if last_row == row && now.saturating_duration_since(at) <= interval {
                self.last = None;
                return true;
            }
        }

        self.last = Some((row, now));
        false
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
