//! `2021-05-10` → `2021-06-21`: `options` becomes `commonSettings`.

use serde_json::{Value, json};

use crate::error::TransformError;
use crate::migration::json::{insert_new, join, root_mut, take, take_object};
use crate::migration::traits::Migration;
use crate::version::{V2021_05_10, V2021_06_21, Version};

#[derive(Debug, Default)]
pub struct CommonSettingsMigration;

impl Migration for CommonSettingsMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_05_10)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_06_21)
    }

    fn description(&self) -> &str {
        "Replace options with structured commonSettings"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["commonSettings.filterPanel.initialSelectedComponents"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        let root = root_mut(&mut spec)?;

        let mut options = take_object(root, "options", "")?;
        let title = take(&mut options, "title", "options")?;
        let column_count = take(&mut options, "columnCount", "options")?;
        let show_filter_button = take(&mut options, "showFilterButton", "options")?;
        if let Some(key) = options.keys().next() {
            return Err(TransformError::unexpected_field(join("options", key)));
        }

        let common_settings = json!({
            "title": title,
            "layout": { "columnCount": column_count },
            "filterPanel": {
                "visible": show_filter_button,
                "initialSelectedComponents": []
            }
        });
        insert_new(root, "commonSettings", common_settings, "")?;
        Ok(spec)
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        let root = root_mut(&mut spec)?;

        let mut common_settings = take_object(root, "commonSettings", "")?;
        let title = take(&mut common_settings, "title", "commonSettings")?;
        let mut layout = take_object(&mut common_settings, "layout", "commonSettings")?;
        let column_count = take(&mut layout, "columnCount", "commonSettings.layout")?;
        let mut filter_panel = take_object(&mut common_settings, "filterPanel", "commonSettings")?;
        let visible = take(&mut filter_panel, "visible", "commonSettings.filterPanel")?;

        let options = json!({
            "title": title,
            "columnCount": column_count,
            "showFilterButton": visible
        });
        insert_new(root, "options", options, "")?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_spec() -> Value {
        json!({
            "version": "2021-05-10",
            "options": { "title": "Overview", "columnCount": 12, "showFilterButton": false },
            "items": []
        })
    }

    #[test]
    fn test_upgrade_builds_common_settings() {
        let upgraded = CommonSettingsMigration.upgrade(&options_spec()).unwrap();
        assert!(upgraded.get("options").is_none());
        assert_eq!(
            upgraded["commonSettings"],
            json!({
                "title": "Overview",
                "layout": { "columnCount": 12 },
                "filterPanel": { "visible": false, "initialSelectedComponents": [] }
            })
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        let spec = options_spec();
        let upgraded = CommonSettingsMigration.upgrade(&spec).unwrap();
        assert_eq!(CommonSettingsMigration.downgrade(&upgraded).unwrap(), spec);
    }

    #[test]
    fn test_downgrade_drops_initial_components() {
        let mut upgraded = CommonSettingsMigration.upgrade(&options_spec()).unwrap();
        upgraded["commonSettings"]["filterPanel"]["initialSelectedComponents"] =
            json!(["region", "sex"]);
        assert_eq!(
            CommonSettingsMigration.downgrade(&upgraded).unwrap(),
            options_spec()
        );
    }

    #[test]
    fn test_upgrade_without_options_fails() {
        let spec = json!({ "version": "2021-05-10", "items": [] });
        let err = CommonSettingsMigration.upgrade(&spec).unwrap_err();
        assert_eq!(err, TransformError::missing("options"));
    }
}
