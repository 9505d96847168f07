//! Schema migration for dashboard specifications.
//!
//! This module provides a linear version chain for moving documents between
//! schema generations. The framework ensures that:
//!
//! - Every step of the chain is walked in order (no skipping)
//! - Every intermediate document is validated against its own schema
//! - Transforms are pure and never hand back half-rewritten documents
//! - The chain is checked for continuity when the registry is built
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MigrationDriver                           │
//! │  (declared version → ... → target, validating each step)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              V
//!                       VersionRegistry
//!          (SchemaModel per version, Migration per boundary)
//!                              │
//!                              V
//!   2021-03-15 ⇄ 2021-04-01 ⇄ ... ⇄ 2021-10-19 ⇄ 2021-10-25
//! ```
//!
//! # Adding a New Version
//!
//! 1. **Add the tag** to `version.rs` and point `LATEST` at it.
//! 2. **Add a schema module** under `schema/`, re-exporting unchanged types
//!    from the previous generation, and list it in `schema::generations()`,
//!    `schema::parse()`, `VersionedSpecification` and `schema::latest`.
//! 3. **Write the migration** in `steps/` and append it to `steps::all()`.
//!
//! The registry panics on first use if step 3 is missing or out of order.

mod driver;
pub(crate) mod json;
mod registry;
pub mod steps;
mod traits;

pub use driver::{MigrationDriver, MigrationOutcome, declared_version};
pub use registry::{VersionRegistry, registry};
pub use traits::Migration;
