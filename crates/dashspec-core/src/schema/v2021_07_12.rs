//! Schema generation `2021-07-12`: tiles no longer store `y`. The item list
//! is kept in reading order and the frontend packs each tile as high as it
//! fits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::dashboard_model;
pub use super::v2021_06_21::{
    AxesSettings, AxisId, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, CommonSettings, DashboardItem, DateRange, DateType, DividerItem, Filter,
    FilterPanelSettings, GoalLine, IFrameItem, LayoutSettings, MapDisplay, MapSettings,
    MapViewSpecificSettings, PlaceholderItem, PlaceholderType, QueryItem, SortOrder, SpacerItem,
    TableSettings, TableViewSpecificSettings, TextItem, TimeSeriesSettings,
    TimeSeriesViewSpecificSettings, TitleSettings, ViewType, ViewTypeSettings,
    VisualizationSettings,
};
pub use super::common::FlowHolder;
use crate::version::V2021_07_12;

pub type DashboardItemHolder = FlowHolder<DashboardItem>;

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
    version = V2021_07_12,
    variant = V2021_07_12,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.common_settings.layout.column_count,
);
