//! `2021-10-14` → `2021-10-19`: text and iframe payload fields renamed.

use serde_json::Value;

use crate::error::TransformError;
use crate::migration::json::{for_each_item_of_type, rename};
use crate::migration::traits::Migration;
use crate::version::{V2021_10_14, V2021_10_19, Version};

/// (item type, old field, new field)
const RENAMES: [(&str, &str, &str); 2] = [
    ("TEXT_ITEM", "text", "content"),
    ("IFRAME_ITEM", "iFrameURL", "url"),
];

#[derive(Debug, Default)]
pub struct ContentFieldMigration;

impl Migration for ContentFieldMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_10_14)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_10_19)
    }

    fn description(&self) -> &str {
        "Rename TEXT_ITEM.text to content and IFRAME_ITEM.iFrameURL to url"
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for (item_type, old, new) in RENAMES {
            for_each_item_of_type(&mut spec, item_type, |item, path| {
                rename(item, old, new, path)
            })?;
        }
        Ok(spec)
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for (item_type, old, new) in RENAMES {
            for_each_item_of_type(&mut spec, item_type, |item, path| {
                rename(item, new, old, path)
            })?;
        }
        Ok(spec)
    }
}
