use anyhow::Result;
use dashspec_core::registry;
use std::io::Write;

use super::Status;

/// Prints every registered version and what each step changes.
pub fn run(out: &mut dyn Write) -> Result<Status> {
    let registry = registry();

    writeln!(out, "Schema versions (oldest first):")?;
    for version in registry.versions() {
        let marker = if version == registry.latest() {
            " (latest)"
        } else {
            ""
        };
        writeln!(out, "  {}{}", version, marker)?;
    }

    writeln!(out)?;
    writeln!(out, "Migrations:")?;
    for migration in registry.migrations() {
        writeln!(
            out,
            "  {} -> {}: {}",
            migration.from_version(),
            migration.to_version(),
            migration.description()
        )?;
        for field in migration.lossy_fields() {
            writeln!(out, "      lossy on downgrade: {}", field)?;
        }
    }

    Ok(Status::Accepted)
}
