//! Command-line interface definitions.
//!
//! # Example
//!
//! ```bash
//! # Start the interactive menu with a directory preloaded
//! imagekeep ~/Pictures
//!
//! # Verbose mode for debugging
//! imagekeep -v ~/Pictures
//!
//! # Structured errors on stderr for scripting
//! imagekeep --json-errors ~/Pictures
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Interactive image inventory manager.
///
/// Catalogs the image files of a directory, orders them by size, detects
/// content-identical duplicates (BLAKE3), and deletes duplicate copies on
/// request.
#[derive(Debug, Parser)]
#[command(name = "imagekeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to load into the inventory at startup
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report the final error as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_directory() {
        let cli = Cli::try_parse_from(["imagekeep", "/photos"]).unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("/photos")));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_verbosity_count() {
        let cli = Cli::try_parse_from(["imagekeep", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["imagekeep", "-q", "-v"]).is_err());
    }
}
