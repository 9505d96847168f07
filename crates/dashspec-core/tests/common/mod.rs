//! Documents shared by the integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

/// An earliest-generation dashboard whose tiles all rest on the tiles above
/// them, so it survives the layout boundary in both directions.
pub fn earliest_dashboard() -> Value {
    json!({
        "version": "2021-03-15",
        "options": {
            "title": "Clinic capacity",
            "columnCount": 12,
            "showFilterButton": false
        },
        "items": [
            {
                "id": "top", "x": 0, "y": 0, "columns": 8, "rows": 3,
                "item": {
                    "type": "QUERY_ITEM", "id": "beds", "name": "Beds in use",
                    "queryId": "query-beds", "visualizationType": "TIME_SERIES",
                    "settingId": "beds-settings", "dateRangeId": "last-month"
                }
            },
            {
                "id": "side", "x": 8, "y": 0, "columns": 4, "rows": 5,
                "item": { "type": "TEXT_ITEM", "id": "notes", "text": "Refreshed hourly" }
            },
            {
                "id": "bottom", "x": 0, "y": 3, "columns": 8, "rows": 2,
                "item": {
                    "type": "QUERY_ITEM", "id": "staff", "name": "Staff on shift",
                    "queryId": "query-staff", "visualizationType": "TABLE",
                    "settingId": "staff-settings", "filterId": "icu"
                }
            },
            {
                "id": "embed", "x": 0, "y": 5, "columns": 12, "rows": 2,
                "item": {
                    "type": "IFRAME_ITEM", "id": "guide", "title": "Triage guide",
                    "iFrameURL": "https://example.org/triage"
                }
            }
        ],
        "filters": {
            "icu": { "id": "icu", "dimension": "ward", "values": ["ICU"], "invert": false },
            "unused-filter": { "id": "unused-filter", "dimension": "ward", "values": ["ER"], "invert": true }
        },
        "dateRanges": {
            "last-month": { "id": "last-month", "dateType": "LAST_CALENDAR_MONTH" }
        },
        "settings": {
            "beds-settings": {
                "id": "beds-settings",
                "titleSettings": { "title": "Beds", "subtitle": "" },
                "viewTypeSettings": {
                    "TIME_SERIES": {
                        "axes": {
                            "y1Axis": { "title": "Beds", "goalLine": "80", "goalLineLabel": "Capacity" },
                            "y2Axis": { "title": "", "goalLine": "", "goalLineLabel": "" }
                        },
                        "viewSpecificSettings": { "bucketType": "DAY", "showDataLabels": false }
                    }
                }
            },
            "staff-settings": {
                "id": "staff-settings",
                "titleSettings": { "title": "Staff", "subtitle": "by ward" },
                "viewTypeSettings": {
                    "TABLE": {
                        "viewSpecificSettings": {
                            "rowHeight": 28, "enablePagination": false, "wrapColumnTitles": true
                        }
                    }
                }
            }
        }
    })
}

/// A `2021-08-16` dashboard with one GIS tile and one table.
pub fn gis_dashboard() -> Value {
    json!({
        "version": "2021-08-16",
        "commonSettings": {
            "title": "Facilities",
            "layout": { "columnCount": 6 },
            "filterPanel": { "visible": true, "initialSelectedComponents": ["icu"] }
        },
        "items": [
            {
                "id": "map", "x": 0, "columns": 6, "rows": 5,
                "item": {
                    "type": "GIS_ITEM",
                    "id": "facilities",
                    "name": "Facility map",
                    "baseLayer": "SATELLITE",
                    "viewport": { "latitude": 51.5, "longitude": -0.25, "zoom": 9.5 },
                    "indicatorLayers": {
                        "hospitals": {
                            "id": "hospitals", "name": "Hospitals", "visible": true,
                            "controls": {
                                "selectedField": "bed_count",
                                "selectedLabelsToDisplay": ["name"]
                            }
                        },
                        "pharmacies": {
                            "id": "pharmacies", "name": "Pharmacies", "visible": false,
                            "controls": { "selectedField": "open_hours" }
                        }
                    }
                }
            },
            {
                "id": "table", "x": 0, "columns": 6, "rows": 3,
                "item": {
                    "type": "QUERY_ITEM", "id": "staff", "name": "Staff on shift",
                    "queryId": "query-staff", "visualizationType": "TABLE",
                    "settingId": "staff-settings", "filterId": "icu"
                }
            }
        ],
        "filters": {
            "icu": { "id": "icu", "dimension": "ward", "values": ["ICU"], "invert": false }
        },
        "dateRanges": {},
        "settings": {
            "staff-settings": {
                "id": "staff-settings",
                "titleSettings": { "title": "Staff", "subtitle": "" },
                "viewTypeSettings": {
                    "TABLE": {
                        "viewSpecificSettings": {
                            "rowHeight": 28, "enablePagination": true, "wrapColumnTitles": false
                        }
                    }
                }
            }
        }
    })
}

/// `earliest_dashboard()` moved to `2021-04-01` with a full-width divider
/// resting under the last tile.
pub fn divider_dashboard() -> Value {
    let mut raw = earliest_dashboard();
    raw["version"] = json!("2021-04-01");
    if let Some(items) = raw["items"].as_array_mut() {
        items.push(json!({
            "id": "rule", "x": 0, "y": 7, "columns": 12, "rows": 1,
            "item": { "type": "DIVIDER_ITEM", "id": "div1" }
        }));
    }
    raw
}

/// A latest-generation dashboard holding a divider, a GIS tile and a text
/// tile, none of which reference shared components.
pub fn latest_divider_and_gis() -> Value {
    json!({
        "version": "2021-10-25",
        "commonSettings": {
            "title": "Regions",
            "layout": { "columnCount": 12 },
            "filterPanel": { "visible": false, "initialSelectedComponents": [] }
        },
        "items": [
            {
                "id": "h9", "x": 0, "columns": 12, "rows": 1,
                "item": { "type": "DIVIDER_ITEM", "id": "div1" }
            },
            {
                "id": "h10", "x": 0, "columns": 8, "rows": 6,
                "item": {
                    "type": "GIS_ITEM",
                    "id": "g1",
                    "name": "Facilities",
                    "baseLayer": "LIGHT",
                    "viewport": { "latitude": -1.5, "longitude": 36.5, "zoom": 6.5 },
                    "indicatorLayers": {
                        "l1": {
                            "id": "l1", "name": "Clinics", "visible": true,
                            "fieldId": "clinic_count",
                            "selectedLabelsToDisplay": ["name", "district"]
                        },
                        "l2": { "id": "l2", "name": "Labs", "visible": false, "fieldId": "lab_count" }
                    }
                }
            },
            {
                "id": "h11", "x": 8, "columns": 4, "rows": 6,
                "item": { "type": "TEXT_ITEM", "id": "legend", "content": "Clinics and labs" }
            }
        ],
        "filters": {},
        "dateRanges": {},
        "settings": {}
    })
}
