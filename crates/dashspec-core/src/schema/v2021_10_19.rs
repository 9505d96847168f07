//! Schema generation `2021-10-19`: text and iframe tiles use the field names
//! the rest of the document does (`content`, `url`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{ItemPayload, dashboard_items, dashboard_model};
pub use super::v2021_10_14::{
    AxesSettings, AxisId, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, CommonSettings, DateRange, DateType, DividerItem, Filter, FilterPanelSettings,
    FlowHolder, GisItem, GoalLine, IndicatorLayer, IndicatorLayerModel, LayoutSettings,
    MapDisplay, MapSettings, MapViewSpecificSettings, PlaceholderItem, PlaceholderType, QueryItem,
    SortOrder, SpacerItem, TableSettings, TableViewSpecificSettings, TimeSeriesSettings,
    TimeSeriesViewSpecificSettings, TitleSettings, ViewType, ViewTypeSettings, Viewport,
    VisualizationSettings,
};
use crate::version::V2021_10_19;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextItem {
    pub id: String,
    pub content: String,
}

impl ItemPayload for TextItem {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IFrameItem {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl ItemPayload for IFrameItem {}

dashboard_items! {
    /// Tile variants legal at `2021-10-19`.
    pub enum DashboardItem {
        Query(QueryItem) = "QUERY_ITEM",
        Text(TextItem) = "TEXT_ITEM",
        IFrame(IFrameItem) = "IFRAME_ITEM",
        Placeholder(PlaceholderItem) = "PLACEHOLDER_ITEM",
        Spacer(SpacerItem) = "SPACER_ITEM",
        Divider(DividerItem) = "DIVIDER_ITEM",
        Gis(GisItem<IndicatorLayer>) = "GIS_ITEM",
    }
}

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
    version = V2021_10_19,
    variant = V2021_10_19,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.common_settings.layout.column_count,
);
