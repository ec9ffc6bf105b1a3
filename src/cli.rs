// CLI module for argument parsing
use clap::Parser;

/// Dirman - a terminal directory manager
///
/// Pick a directory, browse its entries with their type and size, and open
/// files with the application your system associates with them.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dirman")]
#[command(author, version, about, long_about = None)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert!(Args::try_parse_from(["dirman"]).is_ok());
    }

    #[test]
    fn test_rejects_positional_directory() {
        // Every run starts without a directory selected
        assert!(Args::try_parse_from(["dirman", "/tmp"]).is_err());
    }

    #[test]
    fn test_help_and_version_flags() {
        let help = Args::try_parse_from(["dirman", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = Args::try_parse_from(["dirman", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
