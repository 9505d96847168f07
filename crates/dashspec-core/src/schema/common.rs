//! Leaf types shared unchanged by several schema generations.
//!
//! A generation module re-exports the types it did not change, so a type
//! living here is frozen for every generation that uses it. Changing one of
//! these shapes means defining a replacement in the new generation's module.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::model::ItemPayload;
use crate::error::SchemaError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Visualization kinds a query item can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewType {
    Table,
    BarChart,
    TimeSeries,
    Map,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [
        ViewType::Table,
        ViewType::BarChart,
        ViewType::TimeSeries,
        ViewType::Map,
    ];

    /// The wire name, also used as the key in `viewTypeSettings`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ViewType::Table => "TABLE",
            ViewType::BarChart => "BAR_CHART",
            ViewType::TimeSeries => "TIME_SERIES",
            ViewType::Map => "MAP",
        }
    }
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BucketType {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Tile set drawn underneath map and GIS visualizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseLayer {
    Streets,
    Satellite,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapDisplay {
    Dots,
    ScaledDots,
    ShadedRegions,
    Heatmap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateType {
    CurrentCalendarMonth,
    LastCalendarMonth,
    CurrentYear,
    LastYear,
    AllTime,
    Custom,
}

// ============================================================================
// Auxiliary entities referenced by query items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Filter {
    pub id: String,
    pub dimension: String,
    pub values: Vec<String>,
    pub invert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DateRange {
    pub id: String,
    pub date_type: DateType,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
}

impl DateRange {
    /// Checks the bounds. `CUSTOM` ranges need both bounds, in order.
    pub fn validate(&self, path: &str) -> Result<(), SchemaError> {
        let start = parse_bound(path, "startDate", self.start_date.as_deref())?;
        let end = parse_bound(path, "endDate", self.end_date.as_deref())?;

        if self.date_type == DateType::Custom {
            if start.is_none() {
                return Err(SchemaError::at(
                    format!("{}.startDate", path),
                    "custom date range requires a start date",
                ));
            }
            if end.is_none() {
                return Err(SchemaError::at(
                    format!("{}.endDate", path),
                    "custom date range requires an end date",
                ));
            }
        }

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(SchemaError::at(
                    format!("{}.startDate", path),
                    format!("start date {} is after end date {}", start, end),
                ));
            }
        }

        Ok(())
    }
}

fn parse_bound(path: &str, field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, SchemaError> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                SchemaError::at(
                    format!("{}.{}", path, field),
                    format!("'{}' is not a YYYY-MM-DD date", raw),
                )
            })
        })
        .transpose()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TitleSettings {
    pub title: String,
    pub subtitle: String,
}

/// Settings for one visualization, generic over the generation's view type
/// branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct VisualizationSettings<V> {
    pub id: String,
    pub title_settings: TitleSettings,
    pub view_type_settings: V,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MapViewSpecificSettings {
    pub base_layer: BaseLayer,
    pub current_display: MapDisplay,
    pub zoom_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MapSettings {
    pub view_specific_settings: MapViewSpecificSettings,
}

// ============================================================================
// Item holders
// ============================================================================

/// A tile with an explicit grid position (generations up to `2021-06-21`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PositionedHolder<I> {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub columns: u32,
    pub rows: u32,
    pub item: I,
}

/// A tile whose vertical position follows from its place in the item list
/// (generations from `2021-07-12`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FlowHolder<I> {
    pub id: String,
    pub x: u32,
    pub columns: u32,
    pub rows: u32,
    pub item: I,
}

// ============================================================================
// Item payloads present since the baseline
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct QueryItem {
    pub id: String,
    pub name: String,
    pub query_id: String,
    pub visualization_type: ViewType,
    pub setting_id: String,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_range_id: Option<String>,
}

impl ItemPayload for QueryItem {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextItem {
    pub id: String,
    pub text: String,
}

impl ItemPayload for TextItem {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IFrameItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "iFrameURL")]
    pub iframe_url: String,
}

impl ItemPayload for IFrameItem {}

/// The kind of tile a placeholder is waiting to become.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceholderType {
    #[serde(rename = "QUERY_ITEM")]
    Query,
    #[serde(rename = "TEXT_ITEM")]
    Text,
    #[serde(rename = "IFRAME_ITEM")]
    IFrame,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub id: String,
    pub item_type: PlaceholderType,
    pub value: String,
}

impl ItemPayload for PlaceholderItem {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacerItem {
    pub id: String,
}

impl ItemPayload for SpacerItem {}

/// Deserializer for optional fields: the key may be absent, but an explicit
/// `null` is rejected so it cannot vanish on re-serialization.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Map keys must match the `id` of the entry they hold.
pub(crate) fn check_keys<T>(
    section: &str,
    entries: &BTreeMap<String, T>,
    id_of: impl Fn(&T) -> &str,
) -> Result<(), SchemaError> {
    for (key, entry) in entries {
        let id = id_of(entry);
        if key != id {
            return Err(SchemaError::at(
                format!("{}.{}.id", section, key),
                format!("entry id '{}' does not match its key", id),
            ));
        }
    }
    Ok(())
}
