//! Typed models for every dashboard specification schema generation.
//!
//! Each generation lives in its own module named after its version tag.
//! A generation re-exports every type it inherits unchanged from the
//! previous one and defines only what changed, so `v2021_10_14::Filter` and
//! `v2021_03_15::Filter` are the same type while the two `IndicatorLayer`s
//! are not.
//!
//! All models are strict: unknown fields, unknown enum values and item
//! variants from later generations are rejected at parse time. Semantic
//! checks that serde cannot express (reference integrity, layout bounds)
//! run in [`DashboardModel::validate`].
//!
//! # Example
//!
//! ```ignore
//! use dashspec_core::schema;
//! use dashspec_core::version::Version;
//!
//! let spec = schema::parse(&raw, &Version::parse("2021-10-25")?)?;
//! assert_eq!(schema::serialize(&spec)?, raw);
//! ```

mod common;
mod model;

pub mod v2021_03_15;
pub mod v2021_04_01;
pub mod v2021_05_10;
pub mod v2021_06_21;
pub mod v2021_07_12;
pub mod v2021_08_05;
pub mod v2021_08_16;
pub mod v2021_10_14;
pub mod v2021_10_19;
pub mod v2021_10_25;

/// The current generation.
pub mod latest {
    pub use super::v2021_10_25::*;
}

pub use common::{
    BaseLayer, BucketType, DateRange, DateType, Filter, FlowHolder, MapDisplay, MapSettings,
    MapViewSpecificSettings, PlaceholderItem, PlaceholderType, PositionedHolder, QueryItem,
    SortOrder, SpacerItem, TitleSettings, ViewType, VisualizationSettings,
};
pub use model::{DashboardItemVariant, DashboardModel, ItemHolder, ItemPayload, ViewTypeBranches};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::prune::{self, PruneReport};
use crate::version::{self, Version};

/// A validated document of any generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(non_camel_case_types)]
pub enum VersionedSpecification {
    V2021_03_15(v2021_03_15::DashboardSpecification),
    V2021_04_01(v2021_04_01::DashboardSpecification),
    V2021_05_10(v2021_05_10::DashboardSpecification),
    V2021_06_21(v2021_06_21::DashboardSpecification),
    V2021_07_12(v2021_07_12::DashboardSpecification),
    V2021_08_05(v2021_08_05::DashboardSpecification),
    V2021_08_16(v2021_08_16::DashboardSpecification),
    V2021_10_14(v2021_10_14::DashboardSpecification),
    V2021_10_19(v2021_10_19::DashboardSpecification),
    V2021_10_25(v2021_10_25::DashboardSpecification),
}

/// Runs `$body` with `$model` bound to the generation-specific document.
macro_rules! with_model {
    ($spec:expr, $model:ident => $body:expr) => {
        match $spec {
            VersionedSpecification::V2021_03_15($model) => $body,
            VersionedSpecification::V2021_04_01($model) => $body,
            VersionedSpecification::V2021_05_10($model) => $body,
            VersionedSpecification::V2021_06_21($model) => $body,
            VersionedSpecification::V2021_07_12($model) => $body,
            VersionedSpecification::V2021_08_05($model) => $body,
            VersionedSpecification::V2021_08_16($model) => $body,
            VersionedSpecification::V2021_10_14($model) => $body,
            VersionedSpecification::V2021_10_19($model) => $body,
            VersionedSpecification::V2021_10_25($model) => $body,
        }
    };
}

fn tag_of<M: DashboardModel>(_: &M) -> &'static str {
    M::VERSION
}

impl VersionedSpecification {
    pub fn version_tag(&self) -> &'static str {
        with_model!(self, model => tag_of(model))
    }

    pub fn version(&self) -> Version {
        Version::from_static(self.version_tag())
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        with_model!(self, model => model.validate())
    }

    pub fn to_json(&self) -> Result<Value, SchemaError> {
        serialize(self)
    }

    /// Removes filters, date ranges and settings no item references.
    pub fn prune_orphans(&mut self) -> PruneReport {
        with_model!(self, model => prune::prune_orphans(model))
    }

    pub fn as_latest(&self) -> Option<&latest::DashboardSpecification> {
        match self {
            Self::V2021_10_25(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn into_latest(self) -> Option<latest::DashboardSpecification> {
        match self {
            Self::V2021_10_25(spec) => Some(spec),
            _ => None,
        }
    }
}

// ============================================================================
// Schema models
// ============================================================================

type ParseFn = fn(&Value) -> Result<VersionedSpecification, SchemaError>;

/// Parser and metadata for one generation, as stored in the registry.
#[derive(Clone, Copy)]
pub struct SchemaModel {
    version: &'static str,
    item_types: &'static [&'static str],
    parse_fn: ParseFn,
}

impl SchemaModel {
    pub fn of<M: DashboardModel>() -> Self {
        Self {
            version: M::VERSION,
            item_types: <<M::Holder as ItemHolder>::Item as DashboardItemVariant>::TYPE_TAGS,
            parse_fn: parse_versioned::<M>,
        }
    }

    pub fn version(&self) -> Version {
        Version::from_static(self.version)
    }

    pub fn version_tag(&self) -> &'static str {
        self.version
    }

    /// The item `type` discriminators legal in this generation.
    pub fn item_types(&self) -> &'static [&'static str] {
        self.item_types
    }

    pub fn parse(&self, raw: &Value) -> Result<VersionedSpecification, SchemaError> {
        (self.parse_fn)(raw)
    }
}

impl std::fmt::Debug for SchemaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaModel")
            .field("version", &self.version)
            .field("item_types", &self.item_types)
            .finish()
    }
}

/// Every generation, oldest first.
pub fn generations() -> Vec<SchemaModel> {
    vec![
        SchemaModel::of::<v2021_03_15::DashboardSpecification>(),
        SchemaModel::of::<v2021_04_01::DashboardSpecification>(),
        SchemaModel::of::<v2021_05_10::DashboardSpecification>(),
        SchemaModel::of::<v2021_06_21::DashboardSpecification>(),
        SchemaModel::of::<v2021_07_12::DashboardSpecification>(),
        SchemaModel::of::<v2021_08_05::DashboardSpecification>(),
        SchemaModel::of::<v2021_08_16::DashboardSpecification>(),
        SchemaModel::of::<v2021_10_14::DashboardSpecification>(),
        SchemaModel::of::<v2021_10_19::DashboardSpecification>(),
        SchemaModel::of::<v2021_10_25::DashboardSpecification>(),
    ]
}

/// Parses and validates `raw` as a document of generation `M`.
pub fn parse_as<M: DashboardModel>(raw: &Value) -> Result<M, SchemaError> {
    let model = M::deserialize(raw)?;
    model.validate()?;
    Ok(model)
}

fn parse_versioned<M: DashboardModel>(raw: &Value) -> Result<VersionedSpecification, SchemaError> {
    parse_as::<M>(raw).map(M::into_versioned)
}

/// Parses `raw` against the schema of `version`.
pub fn parse(raw: &Value, version: &Version) -> Result<VersionedSpecification, SchemaError> {
    let tag = version.to_string();
    let parse_fn: ParseFn = match tag.as_str() {
        version::V2021_03_15 => parse_versioned::<v2021_03_15::DashboardSpecification>,
        version::V2021_04_01 => parse_versioned::<v2021_04_01::DashboardSpecification>,
        version::V2021_05_10 => parse_versioned::<v2021_05_10::DashboardSpecification>,
        version::V2021_06_21 => parse_versioned::<v2021_06_21::DashboardSpecification>,
        version::V2021_07_12 => parse_versioned::<v2021_07_12::DashboardSpecification>,
        version::V2021_08_05 => parse_versioned::<v2021_08_05::DashboardSpecification>,
        version::V2021_08_16 => parse_versioned::<v2021_08_16::DashboardSpecification>,
        version::V2021_10_14 => parse_versioned::<v2021_10_14::DashboardSpecification>,
        version::V2021_10_19 => parse_versioned::<v2021_10_19::DashboardSpecification>,
        version::V2021_10_25 => parse_versioned::<v2021_10_25::DashboardSpecification>,
        _ => {
            return Err(SchemaError::at(
                "version",
                format!("no schema is registered for '{}'", tag),
            ));
        }
    };
    parse_fn(raw)
}

pub fn serialize(spec: &VersionedSpecification) -> Result<Value, SchemaError> {
    Ok(serde_json::to_value(spec)?)
}
