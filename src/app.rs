//! Event handling for the terminal front-end

use crate::config::BrowserConfig;
use crate::domain::navigation::Browser;
use crate::error::Result;
use crate::file_opener::Launcher;
use crate::tui::{
    handle_key_event, handle_picker_input, row_at, ClickTracker, Dialog, KeyAction, PickerAction,
    ViewState,
};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, widgets::TableState};
use std::time::Instant;

/// Everything the UI thread owns: the browser, the overlay state and the
/// bits of widget state needed to map mouse clicks back to rows.
#[derive(Debug)]
pub struct App {
    pub browser: Browser,
    pub view_state: ViewState,
    pub picker_input: String,
    pub table_state: TableState,
    /// Last area the entry table was drawn into
    pub table_area: Rect,
    config: BrowserConfig,
    clicks: ClickTracker,
    shown_generation: u64,
    should_quit: bool,
}

impl App {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            browser: Browser::new(),
            view_state: ViewState::Browsing,
            picker_input: String::new(),
            table_state: TableState::default(),
            table_area: Rect::default(),
            config,
            clicks: ClickTracker::new(),
            shown_generation: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn title(&self) -> String {
        self.browser.title()
    }

    pub fn handle_key(&mut self, key: KeyEvent, launcher: &mut dyn Launcher) {
        match self.view_state {
            ViewState::Dialog(_) | ViewState::Help => {
                self.view_state = ViewState::Browsing;
            }
            ViewState::PickDirectory => self.handle_picker_key(key),
            ViewState::Browsing => match handle_key_event(key) {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::PickDirectory => self.open_picker(),
                KeyAction::Open => {
                    let result = self.browser.open_selected(launcher);
                    self.report(result);
                }
                KeyAction::Activate => {
                    let result = self.browser.activate_selected(launcher);
                    self.report(result);
                }
                KeyAction::Next => self.browser.select_next(),
                KeyAction::Previous => self.browser.select_previous(),
                KeyAction::Help => self.view_state = ViewState::Help,
                KeyAction::None => {}
            },
        }
    }

    /// Left click selects a row, a second click on it activates it
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant, launcher: &mut dyn Launcher) {
        if self.view_state != ViewState::Browsing {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = row_at(
                    self.table_area,
                    self.table_state.offset(),
                    self.browser.entries().len(),
                    mouse.column,
                    mouse.row,
                ) else {
                    return;
                };

                self.browser.select(Some(index));
                if self
                    .clicks
                    .register(index, now, self.config.double_click_interval)
                {
                    let result = self.browser.activate_selected(launcher);
                    self.report(result);
                }
            }
            MouseEventKind::ScrollDown => self.browser.select_next(),
            MouseEventKind::ScrollUp => self.browser.select_previous(),
            _ => {}
        }
    }

    /// Shows the directory prompt, prefilled with where the user is now
    pub fn open_picker(&mut self) {
        let start = self
            .browser
            .current_dir()
            .unwrap_or(self.config.picker_start.as_path());

        self.picker_input = start.display().to_string();
        self.view_state = ViewState::PickDirectory;
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match handle_picker_input(key) {
            PickerAction::Confirm => self.confirm_picker(),
            PickerAction::Cancel => {
                self.view_state = ViewState::Browsing;
                let result = self.browser.select_directory(None).map(|_| ());
                self.report(result);
            }
            PickerAction::Insert(c) => self.picker_input.push(c),
            PickerAction::Backspace => {
                self.picker_input.pop();
            }
            PickerAction::Clear => self.picker_input.clear(),
            PickerAction::None => {}
        }
    }

    fn confirm_picker(&mut self) {
        self.view_state = ViewState::Browsing;

        let choice = if self.picker_input.trim().is_empty() {
            None
        } else {
            Some(BrowserConfig::expand_path(&self.picker_input))
        };

        let result = self.browser.select_directory(choice).map(|_| ());
        self.report(result);
    }

    /// Shows failures as a dialog and resets per-listing widget state
    fn report(&mut self, result: Result<()>) {
        if self.browser.listing_generation() != self.shown_generation {
            self.shown_generation = self.browser.listing_generation();
            self.table_state = TableState::default();
            self.clicks.reset();
        }

        if let Err(err) = result {
            self.view_state = ViewState::Dialog(Dialog::from_error(&err));
        }
    }
}
