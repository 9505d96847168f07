//! Schema generation `2021-10-25`: tables can auto-expand grouped rows.
//!
//! This is the latest generation; see `schema::latest`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{dashboard_model, view_type_branches};
pub use super::v2021_10_19::{
    AxesSettings, AxisId, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, CommonSettings, DashboardItem, DashboardItemHolder, DateRange, DateType,
    DividerItem, Filter, FilterPanelSettings, FlowHolder, GisItem, GoalLine, IFrameItem,
    IndicatorLayer, IndicatorLayerModel, LayoutSettings, MapDisplay, MapSettings,
    MapViewSpecificSettings, PlaceholderItem, PlaceholderType, QueryItem, SortOrder, SpacerItem,
    TextItem, TimeSeriesSettings, TimeSeriesViewSpecificSettings, TitleSettings, ViewType,
    Viewport,
};
use crate::version::V2021_10_25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TableViewSpecificSettings {
    pub row_height: u32,
    pub enable_pagination: bool,
    pub wrap_column_titles: bool,
    pub enable_auto_expand: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TableSettings {
    pub view_specific_settings: TableViewSpecificSettings,
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
    pub common_settings: CommonSettings,
    pub items: Vec<DashboardItemHolder>,
    pub filters: BTreeMap<String, Filter>,
    pub date_ranges: BTreeMap<String, DateRange>,
    pub settings: BTreeMap<String, VisualizationSettings>,
}

dashboard_model!(
    DashboardSpecification,
    version = V2021_10_25,
    variant = V2021_10_25,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.common_settings.layout.column_count,
);
