//! Schema generation `2021-05-10`: goal lines leave the axis settings and
//! become a list on the chart's view-specific settings, so a chart can draw
//! more than one per axis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{dashboard_model, view_type_branches};
pub use super::v2021_04_01::{
    BaseLayer, BucketType, DashboardItem, DashboardItemHolder, DashboardOptions, DateRange,
    DateType, DividerItem, Filter, IFrameItem, MapDisplay, MapSettings, MapViewSpecificSettings,
    PlaceholderItem, PlaceholderType, PositionedHolder, QueryItem, SortOrder, SpacerItem,
    TableSettings, TableViewSpecificSettings, TextItem, TitleSettings, ViewType,
};
use crate::version::V2021_05_10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    #[serde(rename = "y1Axis")]
    Y1,
    #[serde(rename = "y2Axis")]
    Y2,
}

impl AxisId {
    pub const ALL: [AxisId; 2] = [AxisId::Y1, AxisId::Y2];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AxisId::Y1 => "y1Axis",
            AxisId::Y2 => "y2Axis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GoalLine {
    pub axis: AxisId,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AxisSettings {
    pub title: String,
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
    pub goal_lines: Vec<GoalLine>,
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
    pub goal_lines: Vec<GoalLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TimeSeriesSettings {
    pub axes: AxesSettings,
    pub view_specific_settings: TimeSeriesViewSpecificSettings,
}

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
    version = V2021_05_10,
    variant = V2021_05_10,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.options.column_count,
);
