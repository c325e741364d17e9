//! CLI argument definitions
//!
//! Running `mathutf` without a subcommand prints the reference sheet.

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};

/// mathutf CLI
#[derive(Parser, Debug)]
#[command(name = "mathutf")]
#[command(about = "Look up and search Unicode math symbols", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress everything but errors on stderr
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search symbols by key, Unicode name, category or alias
    Search(SearchArgs),
    /// Print the character for an exact key
    Get {
        /// Symbol key, e.g. `alpha` or `subset_eq`
        key: String,
    },
    /// List every available top-level name
    Keys,
    /// List entries for a character
    Which {
        /// A single character, e.g. `∑`
        #[arg(value_name = "CHAR")]
        chr: char,
    },
    /// List entries rendered by a markup command
    Tex {
        /// Markup command, e.g. `\alpha`
        command: String,
    },
    /// Verify canonical names against the Unicode name database
    Check,
}

/// Search command arguments
#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Case-insensitive regular expression; `*` lists everything
    pub query: String,

    /// Maximum number of results (at least 1)
    #[arg(short = 'l', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Default tracing filter for the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let args = SearchArgs {
            query: "beta".to_string(),
            limit: Some(10),
            json: false,
        };
        assert_eq!(args.query, "beta");
        assert_eq!(args.limit, Some(10));
    }

    #[test]
    fn test_log_level() {
        let cli = Cli { command: None, verbose: false, quiet: false };
        assert_eq!(cli.log_level(), "warn");
        let cli = Cli { command: None, verbose: true, quiet: false };
        assert_eq!(cli.log_level(), "debug");
        let cli = Cli { command: None, verbose: true, quiet: true };
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
