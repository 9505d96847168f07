use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::migrate::MigrateArgs;

#[derive(Parser)]
#[command(name = "dashspec")]
#[command(about = "Migrate and validate versioned dashboard specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Migrate a document to the latest (or a given) schema version
    Migrate(MigrateArgs),
    /// Check a document against the schema of its declared version
    Validate {
        /// Document to check, or `-` for stdin
        file: String,
    },
    /// List the schema versions and the migrations between them
    Versions,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let status = match cli.command {
        Commands::Migrate(args) => commands::migrate::run(&args, &mut stdout)?,
        Commands::Validate { file } => commands::validate::run(&file, &mut stdout)?,
        Commands::Versions => commands::versions::run(&mut stdout)?,
    };

    Ok(status.into())
}
