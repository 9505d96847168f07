//! Core trait for one step of the schema version chain.

use serde_json::Value;
use std::fmt;

use crate::error::TransformError;
use crate::version::Version;

/// An upgrade/downgrade pair between two adjacent schema versions.
///
/// Both directions operate on the untyped JSON tree: the input is borrowed
/// and a new tree is returned, so a failed transform never leaves a
/// half-rewritten document behind. Neither direction touches the `version`
/// tag; the driver rewrites it after each step.
pub trait Migration: Send + Sync + fmt::Debug {
    /// Returns the version this migration upgrades from.
    fn from_version(&self) -> Version;

    /// Returns the version this migration upgrades to.
    fn to_version(&self) -> Version;

    /// Returns a human-readable description of the schema change.
    ///
    /// Used for logging and by `dashspec versions`.
    fn description(&self) -> &str;

    /// Fields whose values do not survive a downgrade across this step.
    ///
    /// Empty when the downgrade is an exact inverse of the upgrade.
    fn lossy_fields(&self) -> &'static [&'static str] {
        &[]
    }

    /// Checks if this migration upgrades documents of the given version.
    fn can_migrate(&self, version: &Version) -> bool {
        version == &self.from_version()
    }

    /// Rewrites a `from_version` document into `to_version` shape.
    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError>;

    /// Rewrites a `to_version` document into `from_version` shape.
    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError>;
}
