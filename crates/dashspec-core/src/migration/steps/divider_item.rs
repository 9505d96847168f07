//! `2021-03-15` → `2021-04-01`: the `DIVIDER_ITEM` tile.

use serde_json::{Value, json};

use crate::error::TransformError;
use crate::migration::json::for_each_item_of_type;
use crate::migration::traits::Migration;
use crate::version::{V2021_03_15, V2021_04_01, Version};

/// Adds the divider tile. Older readers see dividers as spacers, which take
/// up the same grid cells.
#[derive(Debug, Default)]
pub struct DividerItemMigration;

impl Migration for DividerItemMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_03_15)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_04_01)
    }

    fn description(&self) -> &str {
        "Add DIVIDER_ITEM tiles"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["items[].item(DIVIDER_ITEM)"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        Ok(spec.clone())
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_item_of_type(&mut spec, "DIVIDER_ITEM", |item, _| {
            item.insert("type".to_string(), json!("SPACER_ITEM"));
            Ok(())
        })?;
        Ok(spec)
    }
}
