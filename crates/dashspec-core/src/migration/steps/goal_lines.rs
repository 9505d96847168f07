//! `2021-04-01` → `2021-05-10`: chart goal lines become a list.
//!
//! Before, each axis carried one goal line as two strings, with empty
//! strings meaning "none". After, the chart's `viewSpecificSettings` holds
//! a `goalLines` list tagged with the axis each line belongs to.

use serde_json::{Value, json};

use crate::error::TransformError;
use crate::migration::json::{
    Object, for_each_view_type_branch, insert_new, join, object_field_mut, take, take_string,
};
use crate::migration::traits::Migration;
use crate::schema::ViewType;
use crate::version::{V2021_04_01, V2021_05_10, Version};

const AXES: [&str; 2] = ["y1Axis", "y2Axis"];
const CHARTS: [ViewType; 2] = [ViewType::BarChart, ViewType::TimeSeries];

#[derive(Debug, Default)]
pub struct GoalLineMigration;

impl Migration for GoalLineMigration {
    fn from_version(&self) -> Version {
        Version::from_static(V2021_04_01)
    }

    fn to_version(&self) -> Version {
        Version::from_static(V2021_05_10)
    }

    fn description(&self) -> &str {
        "Move axis goal lines into viewSpecificSettings.goalLines"
    }

    fn lossy_fields(&self) -> &'static [&'static str] {
        &["viewSpecificSettings.goalLines[1..] per axis"]
    }

    fn upgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for view_type in CHARTS {
            for_each_view_type_branch(&mut spec, view_type, upgrade_chart)?;
        }
        Ok(spec)
    }

    fn downgrade(&self, spec: &Value) -> Result<Value, TransformError> {
        let mut spec = spec.clone();
        for view_type in CHARTS {
            for_each_view_type_branch(&mut spec, view_type, downgrade_chart)?;
        }
        Ok(spec)
    }
}

fn upgrade_chart(chart: &mut Object, path: &str) -> Result<(), TransformError> {
    let mut goal_lines = Vec::new();
    {
        let axes = object_field_mut(chart, "axes", path)?;
        let axes_path = join(path, "axes");
        for axis in AXES {
            let axis_path = join(&axes_path, axis);
            let settings = object_field_mut(axes, axis, &axes_path)?;
            let value = take_string(settings, "goalLine", &axis_path)?;
            let label = take_string(settings, "goalLineLabel", &axis_path)?;
            if !value.is_empty() || !label.is_empty() {
                goal_lines.push(json!({ "axis": axis, "value": value, "label": label }));
            }
        }
    }

    let view_specific = object_field_mut(chart, "viewSpecificSettings", path)?;
    insert_new(
        view_specific,
        "goalLines",
        Value::Array(goal_lines),
        &join(path, "viewSpecificSettings"),
    )
}

fn downgrade_chart(chart: &mut Object, path: &str) -> Result<(), TransformError> {
    let view_specific_path = join(path, "viewSpecificSettings");
    let goal_lines = {
        let view_specific = object_field_mut(chart, "viewSpecificSettings", path)?;
        take(view_specific, "goalLines", &view_specific_path)?
    };
    let goal_lines_path = join(&view_specific_path, "goalLines");

    let axes = object_field_mut(chart, "axes", path)?;
    let axes_path = join(path, "axes");
    for axis in AXES {
        let (value, label) = first_goal_line(&goal_lines, axis, &goal_lines_path)?;
        let settings = object_field_mut(axes, axis, &axes_path)?;
        let axis_path = join(&axes_path, axis);
        insert_new(settings, "goalLine", Value::String(value), &axis_path)?;
        insert_new(settings, "goalLineLabel", Value::String(label), &axis_path)?;
    }
    Ok(())
}

/// Value and label of the first goal line drawn on `axis`, or empty strings.
fn first_goal_line(
    goal_lines: &Value,
    axis: &str,
    path: &str,
) -> Result<(String, String), TransformError> {
    let lines = goal_lines
        .as_array()
        .ok_or_else(|| TransformError::unexpected_type(path, "an array"))?;

    for (index, line) in lines.iter().enumerate() {
        let line_path = format!("{}[{}]", path, index);
        let field = |key: &str| -> Result<String, TransformError> {
            line.get(key)
                .ok_or_else(|| TransformError::missing(join(&line_path, key)))?
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| TransformError::unexpected_type(join(&line_path, key), "a string"))
        };
        if field("axis")? == axis {
            return Ok((field("value")?, field("label")?));
        }
    }
    Ok((String::new(), String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_spec(y1: (&str, &str), y2: (&str, &str)) -> Value {
        json!({
            "settings": {
                "s1": {
                    "id": "s1",
                    "viewTypeSettings": {
                        "BAR_CHART": {
                            "axes": {
                                "y1Axis": { "title": "Cases", "goalLine": y1.0, "goalLineLabel": y1.1 },
                                "y2Axis": { "title": "", "goalLine": y2.0, "goalLineLabel": y2.1 }
                            },
                            "viewSpecificSettings": { "sortOrder": "ASCENDING", "stackBars": true }
                        }
                    }
                },
                "s2": {
                    "id": "s2",
                    "viewTypeSettings": {
                        "TABLE": { "viewSpecificSettings": { "rowHeight": 20 } }
                    }
                }
            }
        })
    }

    #[test]
    fn test_upgrade_collects_goal_lines() {
        let spec = chart_spec(("500", "Target"), ("", ""));
        let upgraded = GoalLineMigration.upgrade(&spec).unwrap();
        let chart = &upgraded["settings"]["s1"]["viewTypeSettings"]["BAR_CHART"];

        assert_eq!(chart["axes"]["y1Axis"], json!({ "title": "Cases" }));
        assert_eq!(chart["axes"]["y2Axis"], json!({ "title": "" }));
        assert_eq!(
            chart["viewSpecificSettings"]["goalLines"],
            json!([{ "axis": "y1Axis", "value": "500", "label": "Target" }])
        );
        assert_eq!(upgraded["settings"]["s2"], spec["settings"]["s2"]);
    }

    #[test]
    fn test_round_trip_is_exact() {
        for spec in [
            chart_spec(("500", "Target"), ("", "")),
            chart_spec(("", ""), ("", "")),
            chart_spec(("1", ""), ("", "Label only")),
        ] {
            let upgraded = GoalLineMigration.upgrade(&spec).unwrap();
            assert_eq!(GoalLineMigration.downgrade(&upgraded).unwrap(), spec);
        }
    }

    #[test]
    fn test_downgrade_keeps_first_line_per_axis() {
        let spec = json!({
            "settings": {
                "s1": {
                    "id": "s1",
                    "viewTypeSettings": {
                        "TIME_SERIES": {
                            "axes": { "y1Axis": { "title": "A" }, "y2Axis": { "title": "B" } },
                            "viewSpecificSettings": {
                                "bucketType": "DAY",
                                "showDataLabels": false,
                                "goalLines": [
                                    { "axis": "y2Axis", "value": "7", "label": "Week" },
                                    { "axis": "y1Axis", "value": "1", "label": "Low" },
                                    { "axis": "y1Axis", "value": "9", "label": "High" }
                                ]
                            }
                        }
                    }
                }
            }
        });
        let downgraded = GoalLineMigration.downgrade(&spec).unwrap();
        let chart = &downgraded["settings"]["s1"]["viewTypeSettings"]["TIME_SERIES"];

        assert_eq!(
            chart["axes"]["y1Axis"],
            json!({ "title": "A", "goalLine": "1", "goalLineLabel": "Low" })
        );
        assert_eq!(
            chart["axes"]["y2Axis"],
            json!({ "title": "B", "goalLine": "7", "goalLineLabel": "Week" })
        );
        assert!(chart["viewSpecificSettings"].get("goalLines").is_none());
    }

    #[test]
    fn test_upgrade_fails_on_missing_axis_field() {
        let mut spec = chart_spec(("500", "Target"), ("", ""));
        spec["settings"]["s1"]["viewTypeSettings"]["BAR_CHART"]["axes"]["y2Axis"]
            .as_object_mut()
            .unwrap()
            .remove("goalLineLabel");

        let err = GoalLineMigration.upgrade(&spec).unwrap_err();
        assert_eq!(
            err,
            TransformError::missing(
                "settings.s1.viewTypeSettings.BAR_CHART.axes.y2Axis.goalLineLabel"
            )
        );
        assert!(spec["settings"]["s1"]["viewTypeSettings"]["BAR_CHART"]["axes"]["y1Axis"]
            .get("goalLine")
            .is_some());
    }
}
