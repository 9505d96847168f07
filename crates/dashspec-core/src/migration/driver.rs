//! Walks a document along the version chain.
//!
//! The driver reads the document's declared version, validates the document
//! against that version's schema, then applies one transform per step
//! towards the target. After every step it rewrites the `version` tag and
//! re-parses the result against the next schema, so a transform bug
//! surfaces at the step that caused it.

use serde_json::Value;

use super::registry::{VersionRegistry, registry};
use super::traits::Migration;
use crate::config::MigrationOptions;
use crate::error::{MigrationError, Result};
use crate::prune::PruneReport;
use crate::schema::{VersionedSpecification, latest};
use crate::version::Version;

/// A successfully migrated document.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationOutcome {
    /// The version the input declared.
    pub source_version: Version,
    /// Every version visited, source and target included.
    pub path: Vec<Version>,
    pub specification: VersionedSpecification,
    /// Entries removed by orphan pruning; empty when pruning is disabled.
    pub pruned: PruneReport,
}

impl MigrationOutcome {
    pub fn target_version(&self) -> Version {
        self.specification.version()
    }

    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// The migrated document, if it was migrated to the latest version.
    pub fn into_latest(self) -> Option<latest::DashboardSpecification> {
        self.specification.into_latest()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Upgrade,
    Downgrade,
}

/// Migrates single documents between schema versions.
///
/// # Example
///
/// ```ignore
/// let driver = MigrationDriver::new(MigrationOptions::default());
/// let outcome = driver.migrate(&raw)?;
/// let spec = outcome.into_latest().expect("default target is the latest version");
/// ```
#[derive(Debug, Clone)]
pub struct MigrationDriver<'r> {
    registry: &'r VersionRegistry,
    options: MigrationOptions,
}

impl MigrationDriver<'static> {
    /// Creates a driver over the built-in registry.
    pub fn new(options: MigrationOptions) -> Self {
        Self::with_registry(registry(), options)
    }
}

impl Default for MigrationDriver<'static> {
    fn default() -> Self {
        Self::new(MigrationOptions::default())
    }
}

impl<'r> MigrationDriver<'r> {
    pub fn with_registry(registry: &'r VersionRegistry, options: MigrationOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &MigrationOptions {
        &self.options
    }

    /// The configured target version, or the registry's latest.
    pub fn target(&self) -> Result<Version> {
        let Some(tag) = &self.options.target_version else {
            return Ok(self.registry.latest());
        };
        let version =
            Version::parse(tag).map_err(|_| MigrationError::UnknownVersion(tag.clone()))?;
        if !self.registry.contains(&version) {
            return Err(MigrationError::UnknownVersion(tag.clone()));
        }
        Ok(version)
    }

    /// Migrates `raw` to the configured target version.
    ///
    /// Faults in the document's own version take precedence over a bad
    /// configured target.
    pub fn migrate(&self, raw: &Value) -> Result<MigrationOutcome> {
        let result = self
            .source_version(raw)
            .and_then(|source| Ok((source, self.target()?)))
            .and_then(|(source, target)| self.run(raw, source, &target));
        log_rejection(&result);
        result
    }

    /// Migrates `raw` to `target`, upgrading or downgrading as needed.
    pub fn migrate_to(&self, raw: &Value, target: &Version) -> Result<MigrationOutcome> {
        let result = self
            .source_version(raw)
            .and_then(|source| self.run(raw, source, target));
        log_rejection(&result);
        result
    }

    /// The document's declared version, which must be registered.
    fn source_version(&self, raw: &Value) -> Result<Version> {
        let source = declared_version(raw)?;
        if !self.registry.contains(&source) {
            return Err(MigrationError::InvalidVersion(source.to_string()));
        }
        Ok(source)
    }

    fn run(&self, raw: &Value, source: Version, target: &Version) -> Result<MigrationOutcome> {
        if !self.registry.contains(target) {
            return Err(MigrationError::UnknownVersion(target.to_string()));
        }

        let mut specification = self
            .registry
            .schema(&source)?
            .parse(raw)
            .map_err(|err| MigrationError::malformed(source, err))?;

        let direction = if source <= *target {
            Direction::Upgrade
        } else {
            Direction::Downgrade
        };
        let planned = self.registry.path(&source, target)?;

        if source == *target {
            tracing::debug!(
                "Dashboard specification is already at version {}, no migration needed",
                source
            );
        } else {
            tracing::info!(
                "Starting {} from {} to {} ({} steps)",
                match direction {
                    Direction::Upgrade => "upgrade",
                    Direction::Downgrade => "downgrade",
                },
                source,
                target,
                planned.len() - 1
            );
        }

        let mut document = raw.clone();
        let mut current = source;
        let mut path = vec![source];
        while current != *target {
            let migration = self.step(&current, direction)?;
            let next = match direction {
                Direction::Upgrade => migration.to_version(),
                Direction::Downgrade => migration.from_version(),
            };
            tracing::debug!(
                "Migration step {}/{}: {} -> {} ({})",
                path.len(),
                planned.len() - 1,
                current,
                next,
                migration.description()
            );

            document = apply(migration, direction, &document, &current, &next)?;
            retag(&mut document, &next);
            specification = self
                .registry
                .schema(&next)?
                .parse(&document)
                .map_err(|err| MigrationError::malformed(next, err))?;

            current = next;
            path.push(next);
        }

        let pruned = if self.options.prune_orphans {
            specification.prune_orphans()
        } else {
            PruneReport::default()
        };

        if source != *target {
            tracing::info!("Migration completed successfully: {} -> {}", source, target);
        }

        Ok(MigrationOutcome {
            source_version: source,
            path,
            specification,
            pruned,
        })
    }

    fn step(&self, current: &Version, direction: Direction) -> Result<&'r dyn Migration> {
        let registry: &'r VersionRegistry = self.registry;
        let migration = match direction {
            Direction::Upgrade => registry.upgrade_fn(current)?,
            Direction::Downgrade => registry.downgrade_fn(current)?,
        };
        migration.ok_or_else(|| {
            let message = "no migration registered".to_string();
            match direction {
                Direction::Upgrade => MigrationError::UpgradeFailed {
                    from: current.to_string(),
                    to: "next version".to_string(),
                    message,
                },
                Direction::Downgrade => MigrationError::DowngradeFailed {
                    from: current.to_string(),
                    to: "previous version".to_string(),
                    message,
                },
            }
        })
    }
}

fn log_rejection(result: &Result<MigrationOutcome>) {
    if let Err(err) = result {
        tracing::warn!("Dashboard specification rejected: {}", err);
    }
}

fn apply(
    migration: &dyn Migration,
    direction: Direction,
    document: &Value,
    from: &Version,
    to: &Version,
) -> Result<Value> {
    match direction {
        Direction::Upgrade => {
            migration
                .upgrade(document)
                .map_err(|err| MigrationError::UpgradeFailed {
                    from: from.to_string(),
                    to: to.to_string(),
                    message: err.to_string(),
                })
        }
        Direction::Downgrade => {
            migration
                .downgrade(document)
                .map_err(|err| MigrationError::DowngradeFailed {
                    from: from.to_string(),
                    to: to.to_string(),
                    message: err.to_string(),
                })
        }
    }
}

fn retag(document: &mut Value, version: &Version) {
    if let Some(root) = document.as_object_mut() {
        root.insert("version".to_string(), Value::String(version.to_string()));
    }
}

/// Reads the `version` field of a raw document.
pub fn declared_version(raw: &Value) -> Result<Version> {
    match raw.get("version") {
        None | Some(Value::Null) => Err(MigrationError::MissingVersion),
        Some(Value::String(tag)) => Version::parse(tag),
        Some(other) => Err(MigrationError::InvalidVersion(other.to_string())),
    }
}
