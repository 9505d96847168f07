//! Schema generation `2021-06-21`: dashboard-wide `options` become the
//! structured `commonSettings` block.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::dashboard_model;
pub use super::v2021_05_10::{
    AxesSettings, AxisId, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, DashboardItem, DashboardItemHolder, DateRange, DateType, DividerItem, Filter,
    GoalLine, IFrameItem, MapDisplay, MapSettings, MapViewSpecificSettings, PlaceholderItem,
    PlaceholderType, PositionedHolder, QueryItem, SortOrder, SpacerItem, TableSettings,
    TableViewSpecificSettings, TextItem, TimeSeriesSettings, TimeSeriesViewSpecificSettings,
    TitleSettings, ViewType, ViewTypeSettings, VisualizationSettings,
};
use crate::version::V2021_06_21;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub column_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FilterPanelSettings {
    pub visible: bool,
    /// Filter panel components expanded when the dashboard opens.
    pub initial_selected_components: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CommonSettings {
    pub title: String,
    pub layout: LayoutSettings,
    pub filter_panel: FilterPanelSettings,
}

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
    version = V2021_06_21,
    variant = V2021_06_21,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.common_settings.layout.column_count,
);
