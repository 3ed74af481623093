//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Bingo backend configuration tool
#[derive(Parser, Debug)]
#[command(name = "bingo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Instance config file path (defaults to <root>/config.toml)
    #[arg(short, long, global = true, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter config file with a fresh secret (never overwrites)
    Init,

    /// Print the resolved configuration
    Show(ShowArgs),

    /// Load and validate the configuration, creating asset folders if missing
    Check,
}

/// Arguments for the show command
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Only compiled defaults and environment overrides, skip the config file
    #[arg(long)]
    pub defaults: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_init_with_config_path() {
        let cli = Cli::try_parse_from(["bingo", "--config", "/etc/bingo.toml", "init"]).unwrap();

        assert!(matches!(cli.command, Commands::Init));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/bingo.toml")));
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from(["bingo", "show", "--json", "--defaults", "-v"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Show(args) => {
                assert!(args.json);
                assert!(args.defaults);
            }
            other => panic!("expected show, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["bingo", "serve"]).is_err());
    }
}
