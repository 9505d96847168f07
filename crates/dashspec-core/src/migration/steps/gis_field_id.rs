//! `2021-08-16` → `2021-10-14`: indicator layer `controls` are flattened.
//!
//! `controls.selectedField` becomes `fieldId` and
//! `controls.selectedLabelsToDisplay` moves up onto the layer. Both
//! directions are exact.

use serde_json::{Map, Value};

use crate::error::TransformError;
use crate::migration::json::{
    Object, for_each_indicator_layer, insert_new, join, take, take_object,
};
use crate::migration::traits::Migration;
use crate::version::{V2021_08_16, V2021_10_14, Version};

const SELECTED_LABELS: &str = "selectedLabelsToDisplay";

#[derive(Debug, Default)]
pub struct GisFieldIdMigration;

impl Migration for GisFieldIdMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_08_16)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_10_14)
    }

    fn description(&self) -> &str {
        "Hoist indicator layer controls.selectedField to fieldId"
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_indicator_layer(&mut spec, hoist_controls)?;
        Ok(spec)
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_indicator_layer(&mut spec, nest_controls)?;
        Ok(spec)
    }
}

fn hoist_controls(layer: &mut Object, path: &str) -> Result<(), TransformError> {
    let mut controls = take_object(layer, "controls", path)?;
    let controls_path = join(path, "controls");

    let field_id = take(&mut controls, "selectedField", &controls_path)?;
    insert_new(layer, "fieldId", field_id, path)?;
    if let Some(labels) = controls.remove(SELECTED_LABELS) {
        insert_new(layer, SELECTED_LABELS, labels, path)?;
    }

    match controls.keys().next() {
        Some(key) => Err(TransformError::unexpected_field(join(&controls_path, key))),
        None => Ok(()),
    }
}

fn nest_controls(layer: &mut Object, path: &str) -> Result<(), TransformError> {
    let mut controls = Map::new();
    controls.insert("selectedField".to_string(), take(layer, "fieldId", path)?);
    if let Some(labels) = layer.remove(SELECTED_LABELS) {
        controls.insert(SELECTED_LABELS.to_string(), labels);
    }
    insert_new(layer, "controls", Value::Object(controls), path)
}
