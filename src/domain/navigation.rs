//! Navigation state and the browser controller that owns it

use crate::domain::{list_directory, DirectoryEntry};
use crate::error::{DirmanError, Result};
use crate::file_opener::Launcher;
use std::path::{Path, PathBuf};

/// Base window title, extended with the current path once one is chosen
pub const APP_TITLE: &str = "Directory Manager";

/// The single "current directory" value. `None` until the user picks one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_dir: Option<PathBuf>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Joins a displayed entry name onto the current directory
    pub fn resolve(&self, name: &str) -> PathBuf {
        match &self.current_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Owns the navigation state together with the rows currently on screen.
///
/// Rows are always a full listing of the current directory: every
/// transition lists first and only commits on success.
#[derive(Debug, Default)]
pub struct Browser {
    nav: NavigationState,
    entries: Vec<DirectoryEntry>,
    selected: Option<usize>,
    generation: u64,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.nav.current_dir()
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Bumped every time the rows are replaced by a fresh listing
    pub fn listing_generation(&self) -> u64 {
        self.generation
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// The Open action is available exactly when a row is selected
    pub fn is_open_enabled(&self) -> bool {
        self.selected_entry().is_some()
    }

    pub fn title(&self) -> String {
        match self.nav.current_dir() {
            Some(dir) => format!("{} - {}", APP_TITLE, dir.display()),
            None => APP_TITLE.to_string(),
        }
    }

    /// Selects a row; an out-of-range index clears the selection
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.entries.len());
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.entries.len() - 1,
        });
    }

    /// Handles the result of the directory picker. `None` means the user
    /// cancelled and nothing changes.
    ///
    /// Returns whether a transition happened.
    pub fn select_directory(&mut self, choice: Option<PathBuf>) -> Result<bool> {
        let Some(path) = choice else {
            return Ok(false);
        };

        self.relist(path)?;
        Ok(true)
    }

    /// Descends into a directory row
    pub fn navigate_into(&mut self, entry: &DirectoryEntry) -> Result<()> {
        let target = self.nav.resolve(&entry.name);
        if !entry.is_directory {
            return Err(DirmanError::NotADirectory { path: target });
        }

        self.relist(target)
    }

    /// Double-click behaviour: directories are entered, files are launched
    pub fn activate_selected(&mut self, launcher: &mut dyn Launcher) -> Result<()> {
        let Some(entry) = self.selected_entry().cloned() else {
            return Ok(());
        };

        if entry.is_directory {
            self.navigate_into(&entry)
        } else {
            self.open_selected(launcher)
        }
    }

    /// The explicit Open action. A no-op without a selection.
    pub fn open_selected(&mut self, launcher: &mut dyn Launcher) -> Result<()> {
        let Some(entry) = self.selected_entry() else {
            return Ok(());
        };

        let path = self.nav.resolve(&entry.name);
        if path.is_dir() {
            return Err(DirmanError::InvalidOpenTarget { path });
        }

        launcher
            .open_with_default_application(&path)
            .map_err(|source| DirmanError::LaunchFailure { path, source })
    }

    fn relist(&mut self, path: PathBuf) -> Result<()> {
        let entries = list_directory(&path)?;

        self.nav.current_dir = Some(path);
        self.entries = entries;
        self.selected = None;
        self.generation += 1;
        Ok(())
    }
}
