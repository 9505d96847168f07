//! `2021-07-12` → `2021-08-05`: the `GIS_ITEM` tile.

use serde_json::{Value, json};

use crate::error::TransformError;
use crate::migration::json::{field_mut, for_each_item_of_type};
use crate::migration::traits::Migration;
use crate::version::{V2021_07_12, V2021_08_05, Version};

/// Adds GIS tiles. Older readers get a spacer with the same id in the
/// tile's place, so the layout around it is kept.
#[derive(Debug, Default)]
pub struct GisItemMigration;

impl Migration for GisItemMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_07_12)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_08_05)
    }

    fn description(&self) -> &str {
        "Add GIS_ITEM tiles with indicator layers"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["items[].item(GIS_ITEM)"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        Ok(spec.clone())
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_item_of_type(&mut spec, "GIS_ITEM", |item, path| {
            let id = field_mut(item, "id", path)?.take();
            item.clear();
            item.insert("type".to_string(), json!("SPACER_ITEM"));
            item.insert("id".to_string(), id);
            Ok(())
        })?;
        Ok(spec)
    }
}
