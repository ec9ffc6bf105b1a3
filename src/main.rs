use dirman::cli::Args;
use dirman::tui::render;
use dirman::{open_file, App, BrowserConfig, DirmanError, Launcher};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Instant;

fn main() {
    // Only --help and --version; every run starts without a directory
    let _args = Args::parse_args();

    if let Err(e) = run_app(BrowserConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Runs the TUI application
pub fn run_app(config: BrowserConfig) -> Result<(), DirmanError> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Suspends the TUI terminal to allow external programs to run
fn suspend_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Resumes the TUI terminal after external program exits
fn resume_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(())
}

/// Opens files with the system handler while the TUI is suspended.
///
/// A failure to restore the terminal is kept aside so the loop can stop;
/// it is not a launch failure.
struct TerminalLauncher<'a, B: ratatui::backend::Backend + io::Write> {
    terminal: &'a mut Terminal<B>,
    resume_error: Option<io::Error>,
}

impl<'a, B: ratatui::backend::Backend + io::Write> TerminalLauncher<'a, B> {
    fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self {
            terminal,
            resume_error: None,
        }
    }
}

impl<B: ratatui::backend::Backend + io::Write> Launcher for TerminalLauncher<'_, B> {
    fn open_with_default_application(&mut self, path: &Path) -> io::Result<()> {
        suspend_terminal(self.terminal)?;

        // Blocks until the platform launcher returns
        let open_result = open_file(path);

        if let Err(e) = resume_terminal(self.terminal) {
            self.resume_error = Some(e);
        }

        open_result
    }
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), DirmanError> {
    let mut shown_title = String::new();

    while !app.should_quit() {
        let title = app.title();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            shown_title = title;
        }

        terminal.draw(|frame| render(frame, app))?;

        // One event at a time, handled to completion
        let event = event::read()?;
        let mut launcher = TerminalLauncher::new(terminal);

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key, &mut launcher);
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse, Instant::now(), &mut launcher);
            }
            _ => {}
        }

        if let Some(e) = launcher.resume_error.take() {
            return Err(e.into());
        }
    }

    Ok(())
}
