//! `2021-10-19` → `2021-10-25`: tables gain `enableAutoExpand`.

use serde_json::{Value, json};

use crate::error::TransformError;
use crate::migration::json::{for_each_view_type_branch, object_field_mut};
use crate::migration::traits::Migration;
use crate::schema::ViewType;
use crate::version::{V2021_10_19, V2021_10_25, Version};

const AUTO_EXPAND: &str = "enableAutoExpand";

/// Upgrading fills in `false`, the behaviour tables had before the flag
/// existed. Downgrading drops the flag, so `true` does not survive.
#[derive(Debug, Default)]
pub struct TableAutoExpandMigration;

impl Migration for TableAutoExpandMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_10_19)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_10_25)
    }

    fn description(&self) -> &str {
        "Add TABLE viewSpecificSettings.enableAutoExpand (default false)"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["TABLE.viewSpecificSettings.enableAutoExpand"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_view_type_branch(&mut spec, ViewType::Table, |table, path| {
            object_field_mut(table, "viewSpecificSettings", path)?
                .entry(AUTO_EXPAND)
                .or_insert(json!(false));
            Ok(())
        })?;
        Ok(spec)
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for_each_view_type_branch(&mut spec, ViewType::Table, |table, path| {
            object_field_mut(table, "viewSpecificSettings", path)?.remove(AUTO_EXPAND);
            Ok(())
        })?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_spec(view_specific: Value) -> Value {
        json!({
            "settings": {
                "s1": {
                    "id": "s1",
                    "viewTypeSettings": { "TABLE": { "viewSpecificSettings": view_specific } }
                },
                "s2": {
                    "id": "s2",
                    "viewTypeSettings": {
                        "MAP": {
                            "viewSpecificSettings": {
                                "baseLayer": "LIGHT", "currentDisplay": "DOTS", "zoomLevel": 4.5
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_upgrade_defaults_to_false() {
        let spec = table_spec(json!({ "rowHeight": 30 }));
        let upgraded = TableAutoExpandMigration.upgrade(&spec).unwrap();
        assert_eq!(
            upgraded,
            table_spec(json!({ "rowHeight": 30, "enableAutoExpand": false }))
        );
    }

    #[test]
    fn test_upgrade_keeps_existing_value() {
        let spec = table_spec(json!({ "rowHeight": 30, "enableAutoExpand": true }));
        assert_eq!(TableAutoExpandMigration.upgrade(&spec).unwrap(), spec);
    }

    #[test]
    fn test_downgrade_drops_flag() {
        let spec = table_spec(json!({ "rowHeight": 30, "enableAutoExpand": true }));
        let downgraded = TableAutoExpandMigration.downgrade(&spec).unwrap();
        assert_eq!(downgraded, table_spec(json!({ "rowHeight": 30 })));
    }

    #[test]
    fn test_round_trip_is_exact() {
        let spec = table_spec(json!({ "rowHeight": 30 }));
        let upgraded = TableAutoExpandMigration.upgrade(&spec).unwrap();
        assert_eq!(TableAutoExpandMigration.downgrade(&upgraded).unwrap(), spec);
    }
}
