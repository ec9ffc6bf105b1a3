//! Opening files with the operating system's default application

use std::io;
use std::path::Path;

/// The "open with default application" capability.
///
/// The navigation logic only ever talks to this trait, so tests can swap in
/// a recorder and the terminal front-end can wrap the real call.
pub trait Launcher {
    fn open_with_default_application(&mut self, path: &Path) -> io::Result<()>;
}

/// Launcher backed by the platform handler (`xdg-open`, `open`, `start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_with_default_application(&mut self, path: &Path) -> io::Result<()> {
        open_file(path)
    }
}

/// Opens `path` with its registered application, blocking until the
/// platform launcher returns.
pub fn open_file(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        ));
    }

    open::that(path)
}
