//! Dirman - a terminal directory manager library
//!
//! This crate lists the immediate contents of a directory with an inferred
//! type and size per entry, keeps track of the directory being browsed, and
//! opens files with the operating system's default application.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod file_opener;
pub mod tui;

// Re-export primary types for convenience
pub use app::App;
pub use config::BrowserConfig;
pub use domain::navigation::{Browser, NavigationState};
pub use domain::{file_type_label, list_directory, DirectoryEntry};
pub use error::{DirmanError, Result};
pub use file_opener::{open_file, Launcher, SystemLauncher};
