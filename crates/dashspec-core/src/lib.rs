//! Versioned dashboard specification schemas and the engine that migrates
//! documents between them.
//!
//! A dashboard specification is a JSON document describing a grid of tiles
//! (query visualizations, text, iframes, GIS maps, ...) together with the
//! filters, date ranges and visualization settings those tiles reference.
//! Every document carries a dated `version` tag. Loading a document means
//! migrating it to the latest version:
//!
//! ```ignore
//! use dashspec_core::{MigrationDriver, MigrationOptions};
//!
//! let driver = MigrationDriver::new(MigrationOptions::default());
//! match driver.migrate(&raw) {
//!     Ok(outcome) => store(outcome.specification.to_json()?),
//!     Err(err) => respond(err.to_fault()),
//! }
//! ```

pub mod config;
pub mod error;
pub mod migration;
pub mod prune;
pub mod schema;
pub mod version;

#[cfg(test)]
mod fixtures;

pub use config::MigrationOptions;
pub use error::{FaultKind, MigrationError, MigrationFault, SchemaError, TransformError};
pub use migration::{Migration, MigrationDriver, MigrationOutcome, VersionRegistry, registry};
pub use prune::{PruneReport, prune_orphans};
pub use schema::{DashboardModel, VersionedSpecification};
pub use version::{EARLIEST, LATEST, Version};
