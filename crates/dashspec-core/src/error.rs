//! Error types for dashboard specification migration.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A structural fault found while parsing a document against one schema
/// generation.
///
/// `path` points at the offending field when it is known, using
/// `items[3].item.settingId` style notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{}{}",
    .path.as_deref().map(|path| format!("{path}: ")).unwrap_or_default(),
    .message
)]
pub struct SchemaError {
    pub path: Option<String>,
    pub message: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }

    pub fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// A failure inside an upgrade or downgrade transform.
///
/// Transforms only ever see documents that validated against their source
/// schema, so any of these indicates corrupt input or a transform bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("missing field '{path}'")]
    MissingField { path: String },

    #[error("field '{path}' is not {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
    },

    #[error("unexpected field '{path}'")]
    UnexpectedField { path: String },
}

impl TransformError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub fn unexpected_type(path: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedType {
            path: path.into(),
            expected,
        }
    }

    pub fn unexpected_field(path: impl Into<String>) -> Self {
        Self::UnexpectedField { path: path.into() }
    }
}

/// Why a document could not be migrated.
///
/// Every variant is local to one document and deterministic: retrying the
/// same input yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MigrationError {
    /// The document has no `version` field.
    #[error("Dashboard specification has no version")]
    MissingVersion,

    /// The document's `version` is not a tag the registry knows.
    #[error("Invalid dashboard specification version: '{0}'")]
    InvalidVersion(String),

    /// A registry lookup used a version the registry does not know.
    #[error("Unknown schema version: '{0}'")]
    UnknownVersion(String),

    #[error("Upgrade from {from} to {to} failed: {message}")]
    UpgradeFailed {
        from: String,
        to: String,
        message: String,
    },

    #[error("Downgrade from {from} to {to} failed: {message}")]
    DowngradeFailed {
        from: String,
        to: String,
        message: String,
    },

    /// The document does not parse against the schema of `version`.
    #[error("Malformed specification for version {version}: {source}")]
    MalformedSpecification {
        version: String,
        #[source]
        source: SchemaError,
    },
}

impl MigrationError {
    pub fn malformed(version: impl fmt::Display, source: SchemaError) -> Self {
        Self::MalformedSpecification {
            version: version.to_string(),
            source,
        }
    }

    /// The wire-level fault category for this error.
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::MissingVersion => FaultKind::MissingVersion,
            Self::InvalidVersion(_) | Self::UnknownVersion(_) => FaultKind::InvalidVersion,
            Self::UpgradeFailed { .. } => FaultKind::UpgradeFailed,
            Self::DowngradeFailed { .. } => FaultKind::DowngradeFailed,
            Self::MalformedSpecification { .. } => FaultKind::MalformedSpecification,
        }
    }

    pub fn is_version_fault(&self) -> bool {
        matches!(
            self.kind(),
            FaultKind::MissingVersion | FaultKind::InvalidVersion
        )
    }

    pub fn to_fault(&self) -> MigrationFault {
        MigrationFault {
            message: self.to_string(),
            validation_fault: self.kind(),
        }
    }
}

/// Fault categories surfaced to callers of the migration engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultKind {
    MissingVersion,
    InvalidVersion,
    UpgradeFailed,
    DowngradeFailed,
    MalformedSpecification,
}

/// The structured fault object handed back to the web layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationFault {
    pub message: String,
    pub validation_fault: FaultKind,
}

impl From<MigrationError> for MigrationFault {
    fn from(err: MigrationError) -> Self {
        err.to_fault()
    }
}

/// A type alias for `Result<T, MigrationError>`.
pub type Result<T> = std::result::Result<T, MigrationError>;
