use anyhow::Result;
use dashspec_core::migration::declared_version;
use dashspec_core::{MigrationDriver, MigrationOptions};
use std::io::Write;

use super::Status;
use super::utils::{read_document, write_fault};

/// Parses the document against the schema of its declared version without
/// migrating it.
pub fn run(file: &str, out: &mut dyn Write) -> Result<Status> {
    let raw = read_document(file)?;

    let driver = MigrationDriver::new(MigrationOptions::default().with_pruning(false));
    let checked = declared_version(&raw).and_then(|version| driver.migrate_to(&raw, &version));

    match checked {
        Ok(outcome) => {
            writeln!(
                out,
                "{}: valid {} specification",
                file,
                outcome.source_version
            )?;
            Ok(Status::Accepted)
        }
        Err(err) => {
            write_fault(out, &err)?;
            Ok(Status::Rejected)
        }
    }
}
