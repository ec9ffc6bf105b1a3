//! Runtime settings. Nothing is read from or written to disk.

use std::path::PathBuf;
use std::time::Duration;

/// Two clicks on the same row closer together than this count as a double-click
pub const DEFAULT_DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Where the directory picker starts before any directory is chosen
    pub picker_start: PathBuf,
    pub double_click_interval: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            picker_start: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            double_click_interval: DEFAULT_DOUBLE_CLICK_INTERVAL,
        }
    }
}

impl BrowserConfig {
    /// Expands a leading `~` and makes relative input absolute
    pub fn expand_path(input: &str) -> PathBuf {
        let trimmed = input.trim();

        let expanded = match trimmed.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
                match dirs::home_dir() {
                    Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
                    None => PathBuf::from(trimmed),
                }
            }
            _ => PathBuf::from(trimmed),
        };

        std::path::absolute(&expanded).unwrap_or(expanded)
    }
}
