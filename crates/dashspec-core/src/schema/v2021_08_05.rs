//! Schema generation `2021-08-05`: adds the `GIS_ITEM` tile, a map with
//! stacked indicator layers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::check_keys;
use super::model::{ItemPayload, dashboard_items, dashboard_model};
pub use super::v2021_07_12::{
    AxesSettings, AxisId, AxisSettings, BarChartSettings, BarChartViewSpecificSettings, BaseLayer,
    BucketType, CommonSettings, DateRange, DateType, DividerItem, Filter, FilterPanelSettings,
    FlowHolder, GoalLine, IFrameItem, LayoutSettings, MapDisplay, MapSettings,
    MapViewSpecificSettings, PlaceholderItem, PlaceholderType, QueryItem, SortOrder, SpacerItem,
    TableSettings, TableViewSpecificSettings, TextItem, TimeSeriesSettings,
    TimeSeriesViewSpecificSettings, TitleSettings, ViewType, ViewTypeSettings,
    VisualizationSettings,
};
use crate::error::SchemaError;
use crate::version::V2021_08_05;

/// Implemented by every generation's indicator layer shape.
pub trait IndicatorLayerModel {
    fn layer_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

/// A GIS tile, generic over the generation's indicator layer shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GisItem<L> {
    pub id: String,
    pub name: String,
    pub base_layer: BaseLayer,
    pub viewport: Viewport,
    pub indicator_layers: BTreeMap<String, L>,
}

impl<L: IndicatorLayerModel> ItemPayload for GisItem<L> {
    fn validate(&self, path: &str) -> Result<(), SchemaError> {
        let viewport = &self.viewport;
        if !(-90.0..=90.0).contains(&viewport.latitude) {
            return Err(SchemaError::at(
                format!("{}.viewport.latitude", path),
                format!("{} is outside [-90, 90]", viewport.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&viewport.longitude) {
            return Err(SchemaError::at(
                format!("{}.viewport.longitude", path),
                format!("{} is outside [-180, 180]", viewport.longitude),
            ));
        }
        if !viewport.zoom.is_finite() || viewport.zoom < 0.0 {
            return Err(SchemaError::at(
                format!("{}.viewport.zoom", path),
                "must be a non-negative number",
            ));
        }

        check_keys(
            &format!("{}.indicatorLayers", path),
            &self.indicator_layers,
            |layer| layer.layer_id(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct IndicatorLayerControls {
    pub selected_field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct IndicatorLayer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub controls: IndicatorLayerControls,
}

impl IndicatorLayerModel for IndicatorLayer {
    fn layer_id(&self) -> &str {
        &self.id
    }
}

dashboard_items! {
    /// Tile variants legal at `2021-08-05`.
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
    version = V2021_08_05,
    variant = V2021_08_05,
    holder = DashboardItemHolder,
    view_types = ViewTypeSettings,
    column_count = |spec| spec.common_settings.layout.column_count,
);
