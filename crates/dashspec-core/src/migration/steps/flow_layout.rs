//! `2021-06-21` → `2021-07-12`: holders lose their `y` coordinate.
//!
//! The upgrade sorts holders into reading order (`y`, then `x`) and drops
//! `y`. The downgrade cannot recover the original rows, so it rebuilds them
//! by dropping each holder, in list order, onto the skyline of the holders
//! placed before it. Layouts that were already packed that way come back
//! unchanged; any other layout comes back packed, without overlaps.

use serde_json::{Value, json};

use crate::error::TransformError;
use crate::migration::json::{
    array_field_mut, as_object_mut, for_each_holder, insert_new, read_u64, root_mut, take_u64,
};
use crate::migration::traits::Migration;
use crate::version::{V2021_06_21, V2021_07_12, Version};

#[derive(Debug, Default)]
pub struct FlowLayoutMigration;

impl Migration for FlowLayoutMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_06_21)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_07_12)
    }

    fn description(&self) -> &str {
        "Store holders in reading order and drop the y coordinate"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["items[].y (recomputed by skyline packing)"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        let holders = array_field_mut(root_mut(&mut spec)?, "items", "")?;

        let mut keyed = Vec::with_capacity(holders.len());
        for (index, mut holder) in std::mem::take(holders).into_iter().enumerate() {
            let path = format!("items[{}]", index);
            let object = as_object_mut(&mut holder, &path)?;
            let y = take_u64(object, "y", &path)?;
            let x = read_u64(object, "x", &path)?;
            keyed.push(((y, x), holder));
        }
        // Stable, so holders sharing a cell keep their relative order.
        keyed.sort_by_key(|(position, _)| *position);

        *holders = keyed.into_iter().map(|(_, holder)| holder).collect();
        Ok(spec)
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        let mut skyline = Skyline::default();
        for_each_holder(&mut spec, |holder, path| {
            let x = read_u64(holder, "x", path)?;
            let columns = read_u64(holder, "columns", path)?;
            let rows = read_u64(holder, "rows", path)?;
            let y = skyline.place(x, columns, rows);
            insert_new(holder, "y", json!(y), path)
        })?;
        Ok(spec)
    }
}

/// Column spans and bottom rows of the tiles placed so far.
#[derive(Debug, Default)]
struct Skyline {
    placed: Vec<(u64, u64, u64)>,
}

impl Skyline {
    /// Places a tile on top of everything already in the columns it spans
    /// and returns its row.
    fn place(&mut self, x: u64, columns: u64, rows: u64) -> u64 {
        let end = x.saturating_add(columns);
        let y = self
            .placed
            .iter()
            .filter(|(start, stop, _)| *start < end && x < *stop)
            .map(|(_, _, bottom)| *bottom)
            .max()
            .unwrap_or(0);
        self.placed.push((x, end, y.saturating_add(rows)));
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(id: &str, x: u64, y: u64, columns: u64, rows: u64) -> Value {
        json!({
            "id": id, "x": x, "y": y, "columns": columns, "rows": rows,
            "item": { "type": "SPACER_ITEM", "id": format!("item-{}", id) }
        })
    }

    fn layout(holders: Vec<Value>) -> Value {
        json!({
            "version": "2021-06-21",
            "commonSettings": { "layout": { "columnCount": 12 } },
            "items": holders
        })
    }

    fn ids(spec: &Value) -> Vec<String> {
        spec["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|holder| holder["id"].as_str().unwrap().to_string())
            .collect()
    }

    fn boxes(spec: &Value) -> Vec<(u64, u64, u64, u64)> {
        spec["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                (
                    h["x"].as_u64().unwrap(),
                    h["y"].as_u64().unwrap(),
                    h["columns"].as_u64().unwrap(),
                    h["rows"].as_u64().unwrap(),
                )
            })
            .collect()
    }

    fn overlaps(a: (u64, u64, u64, u64), b: (u64, u64, u64, u64)) -> bool {
        a.0 < b.0 + b.2 && b.0 < a.0 + a.2 && a.1 < b.1 + b.3 && b.1 < a.1 + a.3
    }

    #[test]
    fn test_upgrade_sorts_by_row_then_column() {
        let spec = layout(vec![
            holder("c", 0, 4, 12, 2),
            holder("b", 6, 0, 6, 4),
            holder("a", 0, 0, 6, 4),
        ]);
        let upgraded = FlowLayoutMigration.upgrade(&spec).unwrap();

        assert_eq!(ids(&upgraded), vec!["a", "b", "c"]);
        for holder in upgraded["items"].as_array().unwrap() {
            assert!(holder.get("y").is_none());
        }
    }

    #[test]
    fn test_packed_layout_round_trips() {
        let spec = layout(vec![
            holder("a", 0, 0, 6, 4),
            holder("b", 6, 0, 6, 2),
            holder("c", 6, 2, 6, 2),
            holder("d", 0, 4, 12, 1),
        ]);
        let upgraded = FlowLayoutMigration.upgrade(&spec).unwrap();
        assert_eq!(FlowLayoutMigration.downgrade(&upgraded).unwrap(), spec);
    }

    #[test]
    fn test_downgrade_of_sparse_layout_packs_without_overlap() {
        let spec = layout(vec![
            holder("a", 0, 3, 8, 2),
            holder("b", 4, 9, 8, 3),
            holder("c", 2, 20, 4, 1),
        ]);
        let upgraded = FlowLayoutMigration.upgrade(&spec).unwrap();
        let downgraded = FlowLayoutMigration.downgrade(&upgraded).unwrap();

        assert_eq!(ids(&downgraded), vec!["a", "b", "c"]);
        let placed = boxes(&downgraded);
        assert_eq!(placed[0].1, 0);
        assert_eq!(placed[1].1, 2);
        assert_eq!(placed[2].1, 5);
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!overlaps(*a, *b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_upgrade_requires_y() {
        let mut spec = layout(vec![holder("a", 0, 0, 6, 4)]);
        spec["items"][0].as_object_mut().unwrap().remove("y");
        let err = FlowLayoutMigration.upgrade(&spec).unwrap_err();
        assert_eq!(err, TransformError::missing("items[0].y"));
    }
}
