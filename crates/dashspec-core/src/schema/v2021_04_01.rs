//! Schema generation `2021-04-01`: adds the `DIVIDER_ITEM` tile.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{ItemPayload, dashboard_items, dashboard_model};
pub use super::v2021_03_15::{
    AxesSettings, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, DashboardOptions, DateRange, DateType, Filter, IFrameItem, MapDisplay,
    MapSettings, MapViewSpecificSettings, PlaceholderItem, PlaceholderType, PositionedHolder,
    QueryItem, SortOrder, SpacerItem, TableSettings, TableViewSpecificSettings, TextItem,
    TimeSeriesSettings, TimeSeriesViewSpecificSettings, TitleSettings, ViewType,
    ViewTypeSettings, VisualizationSettings,
};
use crate::version::V2021_04_01;

/// A horizontal rule separating dashboard sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DividerItem {
    pub id: String,
}

impl ItemPayload for DividerItem {}

dashboard_items! {
    /// Tile variants legal at `2021-04-01`.
    pub enum DashboardItem {
        Query(QueryItem) = "QUERY_ITEM",
        Text(TextItem) = "TEXT_ITEM",
        IFrame(IFrameItem) = "IFRAME_ITEM",
        Placeholder(PlaceholderItem) = "PLACEHOLDER_ITEM",
        Spacer(SpacerItem) = "SPACER_ITEM",
        Divider(DividerItem) = "DIVIDER_ITEM",
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
    version = V2021_04_01,
    variant = V2021_04_01,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.options.column_count,
);
