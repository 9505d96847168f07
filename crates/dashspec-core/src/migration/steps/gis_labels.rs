//! `2021-08-05` → `2021-08-16`: optional label selection on indicator layers.

use serde_json::Value;

use crate::error::TransformError;
use crate::migration::json::{for_each_indicator_layer, object_field_mut};
use crate::migration::traits::Migration;
use crate::version::{V2021_08_05, V2021_08_16, Version};

#[derive(Debug, Default)]
pub struct GisLabelsMigration;

impl Migration for GisLabelsMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_08_05)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_08_16)
    }

    fn description(&self) -> &str {
        "Add optional controls.selectedLabelsToDisplay to GIS indicator layers"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["indicatorLayers.*.controls.selectedLabelsToDisplay"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        Ok(spec.clone())
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_indicator_layer(&mut spec, |layer, path| {
            object_field_mut(layer, "controls", path)?.remove("selectedLabelsToDisplay");
            Ok(())
        })?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gis_spec(controls: Value) -> Value {
        json!({
            "items": [{
                "id": "h1", "x": 0, "columns": 6, "rows": 4,
                "item": {
                    "type": "GIS_ITEM", "id": "g1", "name": "Sites", "baseLayer": "DARK",
                    "viewport": { "latitude": 0.5, "longitude": 0.5, "zoom": 2.5 },
                    "indicatorLayers": {
                        "l1": { "id": "l1", "name": "Sites", "visible": true, "controls": controls }
                    }
                }
            }]
        })
    }

    #[test]
    fn test_downgrade_strips_selected_labels() {
        let spec = gis_spec(json!({ "selectedField": "count", "selectedLabelsToDisplay": ["name"] }));
        let downgraded = GisLabelsMigration.downgrade(&spec).unwrap();
        assert_eq!(downgraded, gis_spec(json!({ "selectedField": "count" })));
    }

    #[test]
    fn test_round_trip_is_exact() {
        let spec = gis_spec(json!({ "selectedField": "count" }));
        let upgraded = GisLabelsMigration.upgrade(&spec).unwrap();
        assert_eq!(GisLabelsMigration.downgrade(&upgraded).unwrap(), spec);
    }
}
