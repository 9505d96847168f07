//! Baseline schema generation (`2021-03-15`).
//!
//! Tiles carry explicit `x`/`y` grid positions, chart axes carry their goal
//! line inline, and dashboard-wide options live in `options`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use super::common::{
    BaseLayer, BucketType, DateRange, DateType, Filter, IFrameItem, MapDisplay, MapSettings,
    MapViewSpecificSettings, PlaceholderItem, PlaceholderType, PositionedHolder, QueryItem,
    SortOrder, SpacerItem, TextItem, TitleSettings, ViewType,
};
use super::model::{dashboard_items, dashboard_model, view_type_branches};
use crate::version::V2021_03_15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DashboardOptions {
    pub title: String,
    pub column_count: u32,
    pub show_filter_button: bool,
}

/// A y-axis. Empty `goal_line` and `goal_line_label` mean no goal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AxisSettings {
    pub title: String,
    pub goal_line: String,
    pub goal_line_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AxesSettings {
    pub y1_axis: AxisSettings,
    pub y2_axis: AxisSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BarChartViewSpecificSettings {
    pub sort_order: SortOrder,
    pub stack_bars: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BarChartSettings {
    pub axes: AxesSettings,
    pub view_specific_settings: BarChartViewSpecificSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TimeSeriesViewSpecificSettings {
    pub bucket_type: BucketType,
    pub show_data_labels: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TimeSeriesSettings {
    pub axes: AxesSettings,
    pub view_specific_settings: TimeSeriesViewSpecificSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TableViewSpecificSettings {
    pub row_height: u32,
    pub enable_pagination: bool,
    pub wrap_column_titles: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TableSettings {
    pub view_specific_settings: TableViewSpecificSettings,
}

/// One optional branch per view type; validation requires exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ViewTypeSettings {
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub table: Option<TableSettings>,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub bar_chart: Option<BarChartSettings>,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_series: Option<TimeSeriesSettings>,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub map: Option<MapSettings>,
}

view_type_branches!(ViewTypeSettings);

pub type VisualizationSettings = super::common::VisualizationSettings<ViewTypeSettings>;

dashboard_items! {
    /// Tile variants legal at `2021-03-15`.
    pub enum DashboardItem {
        Query(QueryItem) = "QUERY_ITEM",
        Text(TextItem) = "TEXT_ITEM",
        IFrame(IFrameItem) = "IFRAME_ITEM",
        Placeholder(PlaceholderItem) = "PLACEHOLDER_ITEM",
        Spacer(SpacerItem) = "SPACER_ITEM",
    }
}

pub type DashboardItemHolder = PositionedHolder<DashboardItem>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DashboardSpecification {
    pub version: String,
    pub options: DashboardOptions,
    pub items: Vec<DashboardItemHolder>,
    pub filters: BTreeMap<String, Filter>,
    pub date_ranges: BTreeMap<String, DateRange>,
    pub settings: BTreeMap<String, VisualizationSettings>,
}

dashboard_model!(
    DashboardSpecification,
    version = V2021_03_15,
    variant = V2021_03_15,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.options.column_count,
);
