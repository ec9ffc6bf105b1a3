//! Error types surfaced to the user as dialogs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirmanError {
    /// The directory exists but may not be enumerated by this user
    #[error("Permission denied: cannot access directory {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other failure while reading a directory
    #[error("Cannot read directory {}: {source}", .path.display())]
    EnumerationFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The OS could not open the file with its default application
    #[error("Cannot open file {}: {source}", .path.display())]
    LaunchFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The explicit Open action was used on a directory
    #[error("{} is a directory, double-click or press Enter to open it", .path.display())]
    InvalidOpenTarget { path: PathBuf },

    /// Navigation was requested into an entry that is not a directory
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl DirmanError {
    /// Builds the listing error for a failed directory read
    pub fn from_listing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            DirmanError::PermissionDenied { path }
        } else {
            DirmanError::EnumerationFailure { path, source }
        }
    }

    /// Informational conditions are shown as notices rather than errors
    pub fn is_informational(&self) -> bool {
        matches!(self, DirmanError::InvalidOpenTarget { .. })
    }
}

pub type Result<T> = std::result::Result<T, DirmanError>;
