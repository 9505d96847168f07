//! Traits every schema generation implements, and the shared validation
//! built on them.
//!
//! A generation declares its types in its own module and then wires them up
//! with two macros:
//!
//! - `dashboard_items!` declares the closed set of item variants legal for
//!   the generation and registers their `type` discriminators.
//! - `dashboard_model!` implements [`DashboardModel`] for the generation's
//!   root document.
//!
//! Everything in this module is generic over [`DashboardModel`], so
//! reference checks and pruning are written once for every generation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::VersionedSpecification;
use super::common::{
    DateRange, Filter, FlowHolder, PositionedHolder, QueryItem, ViewType, VisualizationSettings,
    check_keys,
};
use crate::error::SchemaError;

/// Generation-specific checks on one item payload.
pub trait ItemPayload {
    fn validate(&self, _path: &str) -> Result<(), SchemaError> {
        Ok(())
    }
}

/// One generation's closed item sum type.
pub trait DashboardItemVariant {
    /// The `type` discriminators this generation accepts.
    const TYPE_TAGS: &'static [&'static str];

    fn item_id(&self) -> &str;

    fn type_tag(&self) -> &'static str;

    /// The query payload, if this item is a query tile.
    fn as_query(&self) -> Option<&QueryItem>;

    fn validate_payload(&self, path: &str) -> Result<(), SchemaError>;
}

/// Position and payload of one dashboard tile.
pub trait ItemHolder {
    type Item: DashboardItemVariant;

    fn id(&self) -> &str;
    fn x(&self) -> u32;
    /// Explicit row, for generations that store one.
    fn y(&self) -> Option<u32>;
    fn columns(&self) -> u32;
    fn rows(&self) -> u32;
    fn item(&self) -> &Self::Item;
}

impl<I: DashboardItemVariant> ItemHolder for PositionedHolder<I> {
    type Item = I;

    fn id(&self) -> &str {
        &self.id
    }

    fn x(&self) -> u32 {
        self.x
    }

    fn y(&self) -> Option<u32> {
        Some(self.y)
    }

    fn columns(&self) -> u32 {
        self.columns
    }

    fn rows(&self) -> u32 {
        self.rows
    }

    fn item(&self) -> &I {
        &self.item
    }
}

impl<I: DashboardItemVariant> ItemHolder for FlowHolder<I> {
    type Item = I;

    fn id(&self) -> &str {
        &self.id
    }

    fn x(&self) -> u32 {
        self.x
    }

    fn y(&self) -> Option<u32> {
        None
    }

    fn columns(&self) -> u32 {
        self.columns
    }

    fn rows(&self) -> u32 {
        self.rows
    }

    fn item(&self) -> &I {
        &self.item
    }
}

/// The per-view-type settings block of one generation.
pub trait ViewTypeBranches {
    /// View types whose branch is present, in `ViewType::ALL` order.
    fn populated(&self) -> Vec<ViewType>;
}

/// The root document of one schema generation.
pub trait DashboardModel:
    Sized + Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned
{
    /// The version tag documents of this generation must carry.
    const VERSION: &'static str;

    type Holder: ItemHolder;
    type ViewTypes: ViewTypeBranches;

    fn declared_version(&self) -> &str;
    fn column_count(&self) -> u32;
    fn holders(&self) -> &[Self::Holder];

    fn filters(&self) -> &BTreeMap<String, Filter>;
    fn filters_mut(&mut self) -> &mut BTreeMap<String, Filter>;

    fn date_ranges(&self) -> &BTreeMap<String, DateRange>;
    fn date_ranges_mut(&mut self) -> &mut BTreeMap<String, DateRange>;

    fn settings(&self) -> &BTreeMap<String, VisualizationSettings<Self::ViewTypes>>;
    fn settings_mut(&mut self) -> &mut BTreeMap<String, VisualizationSettings<Self::ViewTypes>>;

    fn into_versioned(self) -> VersionedSpecification;

    /// Checks everything serde cannot: version tag, layout bounds and
    /// reference integrity.
    fn validate(&self) -> Result<(), SchemaError> {
        validate_model(self)
    }

    /// Query payloads of every item, in holder order.
    fn query_items(&self) -> Vec<&QueryItem> {
        self.holders()
            .iter()
            .filter_map(|holder| holder.item().as_query())
            .collect()
    }
}

fn validate_model<M: DashboardModel>(model: &M) -> Result<(), SchemaError> {
    if model.declared_version() != M::VERSION {
        return Err(SchemaError::at(
            "version",
            format!(
                "expected '{}', found '{}'",
                M::VERSION,
                model.declared_version()
            ),
        ));
    }

    let column_count = model.column_count();
    if column_count == 0 {
        return Err(SchemaError::new("column count must be positive"));
    }

    check_keys("filters", model.filters(), |filter| filter.id.as_str())?;
    check_keys("dateRanges", model.date_ranges(), |range| range.id.as_str())?;
    for (key, range) in model.date_ranges() {
        range.validate(&format!("dateRanges.{}", key))?;
    }

    check_keys("settings", model.settings(), |settings| settings.id.as_str())?;
    let mut branches = BTreeMap::new();
    for (key, settings) in model.settings() {
        let populated = settings.view_type_settings.populated();
        match populated.as_slice() {
            [view_type] => {
                branches.insert(key.as_str(), *view_type);
            }
            _ => {
                return Err(SchemaError::at(
                    format!("settings.{}.viewTypeSettings", key),
                    format!(
                        "expected exactly one view type branch, found {}",
                        populated.len()
                    ),
                ));
            }
        }
    }

    let mut holder_ids = BTreeSet::new();
    for (index, holder) in model.holders().iter().enumerate() {
        let path = format!("items[{}]", index);

        if !holder_ids.insert(holder.id()) {
            return Err(SchemaError::at(
                format!("{}.id", path),
                format!("duplicate item holder id '{}'", holder.id()),
            ));
        }
        if holder.columns() == 0 {
            return Err(SchemaError::at(format!("{}.columns", path), "must be positive"));
        }
        if holder.rows() == 0 {
            return Err(SchemaError::at(format!("{}.rows", path), "must be positive"));
        }
        if u64::from(holder.x()) + u64::from(holder.columns()) > u64::from(column_count) {
            return Err(SchemaError::at(
                format!("{}.x", path),
                format!(
                    "tile spans columns {}..{} but the dashboard has {}",
                    holder.x(),
                    u64::from(holder.x()) + u64::from(holder.columns()),
                    column_count
                ),
            ));
        }

        let item_path = format!("{}.item", path);
        holder.item().validate_payload(&item_path)?;
        if let Some(query) = holder.item().as_query() {
            validate_query_references(model, query, &branches, &item_path)?;
        }
    }

    Ok(())
}

fn validate_query_references<M: DashboardModel>(
    model: &M,
    query: &QueryItem,
    branches: &BTreeMap<&str, ViewType>,
    path: &str,
) -> Result<(), SchemaError> {
    let branch = branches.get(query.setting_id.as_str()).ok_or_else(|| {
        SchemaError::at(
            format!("{}.settingId", path),
            format!("unknown visualization settings '{}'", query.setting_id),
        )
    })?;
    if *branch != query.visualization_type {
        return Err(SchemaError::at(
            format!("{}.visualizationType", path),
            format!(
                "item renders as {} but settings '{}' hold {}",
                query.visualization_type, query.setting_id, branch
            ),
        ));
    }

    if let Some(filter_id) = &query.filter_id {
        if !model.filters().contains_key(filter_id) {
            return Err(SchemaError::at(
                format!("{}.filterId", path),
                format!("unknown filter '{}'", filter_id),
            ));
        }
    }

    if let Some(date_range_id) = &query.date_range_id {
        if !model.date_ranges().contains_key(date_range_id) {
            return Err(SchemaError::at(
                format!("{}.dateRangeId", path),
                format!("unknown date range '{}'", date_range_id),
            ));
        }
    }

    Ok(())
}

/// Declares a generation's closed item sum type.
///
/// Every generation has a `Query(QueryItem)` variant. Each payload type must
/// implement [`ItemPayload`] and carry an `id` field.
macro_rules! dashboard_items {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident($payload:ty) = $tag:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = "type")]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant($payload),
            )+
        }

        impl $crate::schema::DashboardItemVariant for $name {
            const TYPE_TAGS: &'static [&'static str] = &[$($tag),+];

            fn item_id(&self) -> &str {
                match self {
                    $(Self::$variant(item) => &item.id,)+
                }
            }

            fn type_tag(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $tag,)+
                }
            }

            fn as_query(&self) -> Option<&$crate::schema::QueryItem> {
                match self {
                    Self::Query(item) => Some(item),
                    _ => None,
                }
            }

            fn validate_payload(&self, path: &str) -> Result<(), $crate::error::SchemaError> {
                match self {
                    $(Self::$variant(item) => $crate::schema::ItemPayload::validate(item, path),)+
                }
            }
        }
    };
}

/// Implements [`DashboardModel`] for a generation's root document.
///
/// The root must have `version`, `items`, `filters`, `date_ranges` and
/// `settings` fields.
macro_rules! dashboard_model {
    (
        $spec:ident,
        version = $version:expr,
        variant = $variant:ident,
        holder = $holder:ty,
        view_types = $view_types:ty,
        column_count = |$this:ident| $column_count:expr $(,)?
    ) => {
        impl $crate::schema::DashboardModel for $spec {
            const VERSION: &'static str = $version;

            type Holder = $holder;
            type ViewTypes = $view_types;

            fn declared_version(&self) -> &str {
                &self.version
            }

            fn column_count(&self) -> u32 {
                let $this = self;
                $column_count
            }

            fn holders(&self) -> &[Self::Holder] {
                &self.items
            }

            fn filters(&self) -> &::std::collections::BTreeMap<String, $crate::schema::Filter> {
                &self.filters
            }

            fn filters_mut(
                &mut self,
            ) -> &mut ::std::collections::BTreeMap<String, $crate::schema::Filter> {
                &mut self.filters
            }

            fn date_ranges(
                &self,
            ) -> &::std::collections::BTreeMap<String, $crate::schema::DateRange> {
                &self.date_ranges
            }

            fn date_ranges_mut(
                &mut self,
            ) -> &mut ::std::collections::BTreeMap<String, $crate::schema::DateRange> {
                &mut self.date_ranges
            }

            fn settings(
                &self,
            ) -> &::std::collections::BTreeMap<
                String,
                $crate::schema::VisualizationSettings<Self::ViewTypes>,
            > {
                &self.settings
            }

            fn settings_mut(
                &mut self,
            ) -> &mut ::std::collections::BTreeMap<
                String,
                $crate::schema::VisualizationSettings<Self::ViewTypes>,
            > {
                &mut self.settings
            }

            fn into_versioned(self) -> $crate::schema::VersionedSpecification {
                $crate::schema::VersionedSpecification::$variant(self)
            }
        }
    };
}

/// Implements [`ViewTypeBranches`] for a `viewTypeSettings` struct with
/// `table`, `bar_chart`, `time_series` and `map` option fields.
macro_rules! view_type_branches {
    ($settings:ident) => {
        impl $crate::schema::ViewTypeBranches for $settings {
            fn populated(&self) -> Vec<$crate::schema::ViewType> {
                let mut populated = Vec::new();
                if self.table.is_some() {
                    populated.push($crate::schema::ViewType::Table);
                }
                if self.bar_chart.is_some() {
                    populated.push($crate::schema::ViewType::BarChart);
                }
                if self.time_series.is_some() {
                    populated.push($crate::schema::ViewType::TimeSeries);
                }
                if self.map.is_some() {
                    populated.push($crate::schema::ViewType::Map);
                }
                populated
            }
        }
    };
}

pub(crate) use dashboard_items;
pub(crate) use dashboard_model;
pub(crate) use view_type_branches;
