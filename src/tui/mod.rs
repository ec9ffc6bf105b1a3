// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;

// Re-exports
pub use colors::*;
pub use helpers::{centered_rect, centered_rect_fixed_height, layout_chunks, row_at};
pub use input::{handle_key_event, handle_picker_input, ClickTracker, KeyAction, PickerAction};

use crate::app::App;
use crate::domain::navigation::Browser;
use crate::error::DirmanError;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Heading drawn at the top of the window
pub const HEADING: &str = "DIRECTORY FILE MANAGER";

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main table view
    Browsing,
    /// Directory prompt visible
    PickDirectory,
    /// Modal message, dismissed by any key
    Dialog(Dialog),
    /// Help overlay visible
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

/// A modal error or informational message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn from_error(err: &DirmanError) -> Self {
        let (severity, title) = if err.is_informational() {
            (Severity::Info, "Notice")
        } else {
            (Severity::Error, "Error")
        };

        Self {
            severity,
            title: title.to_string(),
            message: err.to_string(),
        }
    }
}

/// Renders the whole screen and any overlay for the current view state
pub fn render(frame: &mut Frame, app: &mut App) {
    let (header, table, footer) = layout_chunks(frame.area());

    render_header(frame, header, &app.browser);
    render_entries(frame, table, app);
    render_footer(frame, footer, &app.browser);

    match &app.view_state {
        ViewState::Browsing => {}
        ViewState::PickDirectory => render_picker_overlay(frame, &app.picker_input),
        ViewState::Dialog(dialog) => render_dialog_overlay(frame, dialog),
        ViewState::Help => render_help_overlay(frame),
    }
}

/// Heading plus the window title, which carries the current path
fn render_header(frame: &mut Frame, area: Rect, browser: &Browser) {
    let heading = Line::from(Span::styled(
        HEADING,
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    ));

    let location = match browser.current_dir() {
        Some(dir) => Line::from(Span::styled(
            dir.display().to_string(),
            Style::default().fg(TEXT_PRIMARY),
        )),
        None => Line::from(Span::styled(
            "No directory selected",
            Style::default().fg(TEXT_SECONDARY),
        )),
    };

    let header = Paragraph::new(vec![heading, location])
        .block(
            Block::default()
                .title(format!(" {} ", browser.title()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Renders the entry table, or a hint when no directory is chosen yet
fn render_entries(frame: &mut Frame, area: Rect, app: &mut App) {
    app.table_area = area;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR));

    if app.browser.current_dir().is_none() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Press p to choose a directory",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
        frame.render_widget(hint, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from(Text::from("Size (KiB)").alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.browser.entries().iter().map(|entry| {
        let name_style = if entry.is_directory {
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };

        Row::new(vec![
            Cell::from(Span::styled(entry.name.clone(), name_style)),
            Cell::from(Span::styled(
                entry.file_type.clone(),
                Style::default().fg(TEXT_SECONDARY),
            )),
            Cell::from(Text::from(entry.size_display()).alignment(Alignment::Right)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(56),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
        ],
    )
    .header(header)
    .block(block.title(format!(" {} entries ", app.browser.entries().len())))
    .highlight_style(
        Style::default()
            .bg(SELECTION_BG)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    app.table_state.select(app.browser.selected_index());
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Footer with the two buttons; Open is dimmed while nothing is selected
fn render_footer(frame: &mut Frame, area: Rect, browser: &Browser) {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |l: &'static str| Span::styled(l, Style::default().fg(TEXT_SECONDARY));

    let open_style = if browser.is_open_enabled() {
        Style::default().fg(TEXT_PRIMARY)
    } else {
        Style::default()
            .fg(TEXT_DISABLED)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    let open_key_style = if browser.is_open_enabled() {
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DISABLED)
    };

    let controls = Line::from(vec![
        key(" p "),
        Span::styled("Choose directory", Style::default().fg(TEXT_PRIMARY)),
        Span::raw("  │  "),
        Span::styled("o ", open_key_style),
        Span::styled("Open file", open_style),
        Span::raw("  │  "),
        key("Enter "),
        label("Enter/Open"),
        Span::raw("  │  "),
        key("↑↓ "),
        label("Select"),
        Span::raw("  │  "),
        key("? "),
        label("Help"),
        Span::raw("  │  "),
        key("q "),
        label("Quit"),
    ]);

    let footer = Paragraph::new(controls)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Renders the directory prompt
pub fn render_picker_overlay(frame: &mut Frame, input: &str) {
    let area = centered_rect_fixed_height(70, 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Choose directory ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let lines = vec![
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("█", Style::default().fg(ACCENT_HIGHLIGHT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: open  │  Esc: cancel  │  Ctrl+U: clear",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Renders a modal error or notice
pub fn render_dialog_overlay(frame: &mut Frame, dialog: &Dialog) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let accent = match dialog.severity {
        Severity::Error => ACCENT_PRIMARY,
        Severity::Info => ACCENT_HIGHLIGHT,
    };

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(BG_DARK));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.message.clone(),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let entry = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("  {:<14}", keys),
                Style::default().fg(ACCENT_HIGHLIGHT),
            ),
            Span::styled(what, Style::default().fg(TEXT_PRIMARY)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        entry("p", "Choose directory"),
        entry("o", "Open selected file"),
        entry("Enter", "Enter directory / open file"),
        entry("double-click", "Enter directory / open file"),
        entry("↑ ↓ / k j", "Move selection"),
        entry("?", "Toggle help"),
        entry("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrowserConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn app_with_tree() -> (App, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), vec![b'a'; 100]).unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let mut app = App::new(BrowserConfig::default());
        app.browser
            .select_directory(Some(temp_dir.path().to_path_buf()))
            .unwrap();
        (app, temp_dir)
    }

    #[test]
    fn test_dialog_from_error() {
        let notice = Dialog::from_error(&DirmanError::InvalidOpenTarget {
            path: PathBuf::from("/tmp/sub"),
        });
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(notice.title, "Notice");
        assert!(notice.message.contains("is a directory"));

        let failure = Dialog::from_error(&DirmanError::PermissionDenied {
            path: PathBuf::from("/root"),
        });
        assert_eq!(failure.severity, Severity::Error);
        assert_eq!(failure.title, "Error");
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_render_initial_state() {
            let mut app = App::new(BrowserConfig::default());
            let screen = draw(&mut app);

            assert!(screen.contains(HEADING));
            assert!(screen.contains("Directory Manager"));
            assert!(screen.contains("No directory selected"));
            assert!(screen.contains("Choose directory"));
        }

        #[test]
        fn test_render_listing() {
            let (mut app, _temp_dir) = app_with_tree();
            let screen = draw(&mut app);

            assert!(screen.contains("Name"));
            assert!(screen.contains("Size (KiB)"));
            assert!(screen.contains("a.txt"));
            assert!(screen.contains("Text File"));
            assert!(screen.contains("0.10"));
            assert!(screen.contains("sub"));
            assert!(screen.contains("directory"));
            assert!(screen.contains("2 entries"));
        }

        #[test]
        fn test_render_records_table_area() {
            let (mut app, _temp_dir) = app_with_tree();
            draw(&mut app);

            assert_eq!(app.table_area, Rect::new(0, 4, 100, 17));
        }

        #[test]
        fn test_render_dialog() {
            let mut app = App::new(BrowserConfig::default());
            app.view_state = ViewState::Dialog(Dialog {
                severity: Severity::Error,
                title: "Error".to_string(),
                message: "Cannot read directory".to_string(),
            });

            let screen = draw(&mut app);
            assert!(screen.contains("Cannot read directory"));
            assert!(screen.contains("Press any key"));
        }

        #[test]
        fn test_render_picker() {
            let mut app = App::new(BrowserConfig::default());
            app.view_state = ViewState::PickDirectory;
            app.picker_input = "/home/u/docs".to_string();

            let screen = draw(&mut app);
            assert!(screen.contains("Choose directory"));
            assert!(screen.contains("/home/u/docs"));
        }

        #[test]
        fn test_render_help_overlay() {
            let mut app = App::new(BrowserConfig::default());
            app.view_state = ViewState::Help;

            let screen = draw(&mut app);
            assert!(screen.contains("Keyboard Shortcuts"));
            assert!(screen.contains("Open selected file"));
        }
    }
}
