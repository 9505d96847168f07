//! Schema generation `2021-10-14`: the `controls` wrapper on indicator
//! layers is gone. The selected field is stored directly as `fieldId`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::{dashboard_items, dashboard_model};
pub use super::v2021_08_16::{
    AxesSettings, AxisId, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, CommonSettings, DateRange, DateType, DividerItem, Filter, FilterPanelSettings,
    FlowHolder, GisItem, GoalLine, IFrameItem, IndicatorLayerModel, LayoutSettings, MapDisplay,
    MapSettings, MapViewSpecificSettings, PlaceholderItem, PlaceholderType, QueryItem, SortOrder,
    SpacerItem, TableSettings, TableViewSpecificSettings, TextItem, TimeSeriesSettings,
    TimeSeriesViewSpecificSettings, TitleSettings, ViewType, ViewTypeSettings, Viewport,
    VisualizationSettings,
};
use crate::version::V2021_10_14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct IndicatorLayer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub field_id: String,
    #[serde(
        default,
        deserialize_with = "crate::schema::common::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_labels_to_display: Option<Vec<String>>,
}

impl IndicatorLayerModel for IndicatorLayer {
    fn layer_id(&self) -> &str {
        &self.id
    }
}

dashboard_items! {
    /// Tile variants legal at `2021-10-14`.
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
    version = V2021_10_14,
    variant = V2021_10_14,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.common_settings.layout.column_count,
);
