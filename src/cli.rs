//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Upload, list, preview and remove media files on an upload server.
#[derive(Debug, Parser)]
#[command(name = "mediabin", version, about)]
pub struct Cli {
    /// Override the configured server base URL for this invocation
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate local files and upload them as one batch
    Up {
        /// Files to upload (at most 10 per batch)
        #[arg(required = true, value_name = "FILE")]
        paths: Vec<PathBuf>,
    },

    /// List the files on the server
    Ls {
        /// Output the raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an uploaded file by id
    Rm {
        /// Id of the file to remove
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show how a file would be previewed, with its media URL
    View {
        /// Id of the file to preview
        id: u64,
    },

    /// Download an uploaded file
    Get {
        /// Id of the file to download
        id: u64,

        /// Destination path (default: the configured download directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the active configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn up_collects_every_path() {
        let cli = Cli::parse_from(["mediabin", "up", "a.png", "b.mp4"]);
        match cli.command {
            Command::Up { paths } => {
                assert_eq!(paths, vec![PathBuf::from("a.png"), PathBuf::from("b.mp4")]);
            }
            other => panic!("expected up, got {other:?}"),
        }
    }

    #[test]
    fn up_requires_at_least_one_path() {
        assert!(Cli::try_parse_from(["mediabin", "up"]).is_err());
    }

    #[test]
    fn server_flag_is_global() {
        let cli = Cli::parse_from(["mediabin", "ls", "--server", "http://10.0.0.5:8000"]);
        assert_eq!(cli.server.as_deref(), Some("http://10.0.0.5:8000"));
        assert!(matches!(cli.command, Command::Ls { json: false }));
    }

    #[test]
    fn rm_takes_an_id_and_a_yes_flag() {
        let cli = Cli::parse_from(["mediabin", "rm", "7", "-y"]);
        match cli.command {
            Command::Rm { id, yes } => {
                assert_eq!(id, 7);
                assert!(yes);
            }
            other => panic!("expected rm, got {other:?}"),
        }
    }
}
