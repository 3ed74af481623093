//! Bingo configuration tool - Application entry point
//!
//! CLI-based entry point that dispatches to the configuration commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bingo::{
    cli::{Cli, Commands},
    commands,
    config::ProjectPaths,
};

fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let paths = ProjectPaths::discover();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| paths.default_config_file());
    tracing::debug!(
        "Project root {}, config file {}",
        paths.root().display(),
        config_path.display()
    );

    // Execute command
    let result = match cli.command {
        Commands::Init => commands::init::execute(&paths, &config_path),
        Commands::Show(args) => commands::show::execute(args, &paths, &config_path),
        Commands::Check => commands::check::execute(&paths, &config_path),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
