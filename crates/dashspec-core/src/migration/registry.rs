//! The schema version registry.
//!
//! Versions form a single linear chain: every version except the latest has
//! exactly one upgrade to the next version, and every version except the
//! earliest has exactly one downgrade to the previous one. Migrating across
//! several versions always walks every intermediate step.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::steps;
use super::traits::Migration;
use crate::error::{MigrationError, Result};
use crate::schema::{self, SchemaModel};
use crate::version::Version;

static REGISTRY: Lazy<VersionRegistry> = Lazy::new(VersionRegistry::builtin);

/// The process-wide registry of built-in schema versions.
///
/// Built on first use and immutable afterwards.
pub fn registry() -> &'static VersionRegistry {
    &REGISTRY
}

/// Registry of schema generations and the migrations between them.
///
/// `migrations[i]` connects `schemas[i]` to `schemas[i + 1]`. When adding
/// migrations via `register()`, the registry checks that each new
/// migration starts where the chain currently ends.
///
/// # Example
///
/// ```ignore
/// let mut registry = VersionRegistry::new(schema::generations());
/// registry.register(Arc::new(DividerItemMigration)); // 2021-03-15 → 2021-04-01
/// registry.register(Arc::new(GoalLineMigration));    // 2021-04-01 → 2021-05-10
/// ```
#[derive(Debug)]
pub struct VersionRegistry {
    schemas: Vec<SchemaModel>,
    migrations: Vec<Arc<dyn Migration>>,
}

impl VersionRegistry {
    /// Creates a registry over `schemas`, with no migrations yet.
    ///
    /// # Panics
    ///
    /// Panics if `schemas` is empty or not in strictly increasing version order.
    pub fn new(schemas: Vec<SchemaModel>) -> Self {
        assert!(!schemas.is_empty(), "Version registry needs at least one schema");
        for pair in schemas.windows(2) {
            assert!(
                pair[0].version() < pair[1].version(),
                "Schema versions out of order: {} registered before {}",
                pair[0].version_tag(),
                pair[1].version_tag()
            );
        }
        Self {
            schemas,
            migrations: Vec::new(),
        }
    }

    /// The registry of every built-in generation and migration.
    pub fn builtin() -> Self {
        let mut registry = Self::new(schema::generations());
        registry.register_all(steps::all());
        assert!(
            registry.is_complete(),
            "Built-in migration chain stops at {}",
            registry.chain_end()
        );
        registry
    }

    /// Registers a single migration, validating chain continuity.
    ///
    /// # Panics
    ///
    /// Panics if the migration doesn't start where the chain currently ends,
    /// or doesn't end at the next registered schema version.
    pub fn register(&mut self, migration: Arc<dyn Migration>) {
        let expected_from = self.chain_end();
        assert_eq!(
            expected_from,
            migration.from_version(),
            "Migration chain broken: expected migration from {}, but got migration from {} ('{}')",
            expected_from,
            migration.from_version(),
            migration.description()
        );

        let next = self.migrations.len() + 1;
        let Some(expected_to) = self.schemas.get(next).map(SchemaModel::version) else {
            panic!(
                "Migration '{}' targets {} but no schema is registered after {}",
                migration.description(),
                migration.to_version(),
                expected_from
            );
        };
        assert_eq!(
            expected_to,
            migration.to_version(),
            "Migration chain broken: migration '{}' from {} must target {}, not {}",
            migration.description(),
            expected_from,
            expected_to,
            migration.to_version()
        );

        self.migrations.push(migration);
    }

    /// Registers multiple migrations at once, in chain order.
    ///
    /// # Panics
    ///
    /// Panics if any migration breaks the chain continuity.
    pub fn register_all(&mut self, migrations: Vec<Arc<dyn Migration>>) {
        for migration in migrations {
            self.register(migration);
        }
    }

    /// True when every pair of adjacent schemas is connected.
    pub fn is_complete(&self) -> bool {
        self.migrations.len() + 1 == self.schemas.len()
    }

    fn chain_end(&self) -> Version {
        self.schemas[self.migrations.len()].version()
    }

    fn index_of(&self, version: &Version) -> Result<usize> {
        self.schemas
            .iter()
            .position(|schema| &schema.version() == version)
            .ok_or_else(|| MigrationError::UnknownVersion(version.to_string()))
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.index_of(version).is_ok()
    }

    pub fn latest(&self) -> Version {
        self.schemas[self.schemas.len() - 1].version()
    }

    pub fn earliest(&self) -> Version {
        self.schemas[0].version()
    }

    /// All registered versions, oldest first.
    pub fn versions(&self) -> Vec<Version> {
        self.schemas.iter().map(SchemaModel::version).collect()
    }

    pub fn migrations(&self) -> &[Arc<dyn Migration>] {
        &self.migrations
    }

    pub fn next(&self, version: &Version) -> Result<Option<Version>> {
        let index = self.index_of(version)?;
        Ok(self.schemas.get(index + 1).map(SchemaModel::version))
    }

    pub fn previous(&self, version: &Version) -> Result<Option<Version>> {
        let index = self.index_of(version)?;
        Ok(index
            .checked_sub(1)
            .map(|previous| self.schemas[previous].version()))
    }

    /// The migration upgrading documents of `version`; `None` at the latest.
    pub fn upgrade_fn(&self, version: &Version) -> Result<Option<&dyn Migration>> {
        let index = self.index_of(version)?;
        Ok(self.migrations.get(index).map(|migration| migration.as_ref()))
    }

    /// The migration downgrading documents of `version`; `None` at the earliest.
    pub fn downgrade_fn(&self, version: &Version) -> Result<Option<&dyn Migration>> {
        let index = self.index_of(version)?;
        Ok(index
            .checked_sub(1)
            .and_then(|previous| self.migrations.get(previous))
            .map(|migration| migration.as_ref()))
    }

    pub fn schema(&self, version: &Version) -> Result<&SchemaModel> {
        let index = self.index_of(version)?;
        Ok(&self.schemas[index])
    }

    /// Every version visited going from `from` to `to`, both included.
    pub fn path(&self, from: &Version, to: &Version) -> Result<Vec<Version>> {
        let start = self.index_of(from)?;
        let end = self.index_of(to)?;
        let path = if start <= end {
            self.schemas[start..=end]
                .iter()
                .map(SchemaModel::version)
                .collect()
        } else {
            self.schemas[end..=start]
                .iter()
                .rev()
                .map(SchemaModel::version)
                .collect()
        };
        Ok(path)
    }
}
