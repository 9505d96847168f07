use anyhow::{Context, Result};
use clap::Args;
use dashspec_core::{MigrationDriver, MigrationOptions};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::Status;
use super::utils::{read_document, write_fault};

#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// Document to migrate, or `-` for stdin
    pub file: String,

    /// Version to migrate to (default: latest)
    #[arg(long, value_name = "VERSION")]
    pub target: Option<String>,

    /// Keep filters, date ranges and settings no item references
    #[arg(long)]
    pub no_prune: bool,

    /// TOML file with migration options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the migrated document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl MigrateArgs {
    /// Options from `--config`, overridden by the command-line flags.
    pub fn options(&self) -> Result<MigrationOptions> {
        let mut options = match &self.config {
            Some(path) => MigrationOptions::load(path)?,
            None => MigrationOptions::default(),
        };
        if let Some(target) = &self.target {
            options = options.with_target(target);
        }
        if self.no_prune {
            options = options.with_pruning(false);
        }
        Ok(options)
    }
}

pub fn run(args: &MigrateArgs, out: &mut dyn Write) -> Result<Status> {
    let options = args.options()?;
    let raw = read_document(&args.file)?;

    let outcome = match MigrationDriver::new(options).migrate(&raw) {
        Ok(outcome) => outcome,
        Err(err) => {
            write_fault(out, &err)?;
            return Ok(Status::Rejected);
        }
    };

    if !outcome.pruned.is_empty() {
        tracing::info!(
            "Pruned {} orphaned entries (filters: {:?}, date ranges: {:?}, settings: {:?})",
            outcome.pruned.total(),
            outcome.pruned.filters,
            outcome.pruned.date_ranges,
            outcome.pruned.settings
        );
    }

    let document = outcome.specification.to_json()?;
    let rendered = serde_json::to_string_pretty(&document)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "Wrote {} specification to {}",
                outcome.specification.version(),
                path.display()
            );
        }
        None => writeln!(out, "{}", rendered)?,
    }

    Ok(Status::Accepted)
}
