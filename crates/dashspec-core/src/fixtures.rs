//! Sample documents shared by unit tests.
//!
//! `baseline()` is gravity-packed, so it survives the layout boundary in
//! both directions. `latest()` is exactly `baseline()` upgraded to the
//! current generation without pruning.

use serde_json::{Value, json};

pub fn baseline() -> Value {
    json!({
        "version": "2021-03-15",
        "options": {
            "title": "Outbreak overview",
            "columnCount": 12,
            "showFilterButton": true
        },
        "items": [
            {
                "id": "h1", "x": 0, "y": 0, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q1", "name": "Cases by region",
                    "queryId": "query-cases", "visualizationType": "BAR_CHART",
                    "settingId": "s1", "filterId": "f1", "dateRangeId": "d1"
                }
            },
            {
                "id": "h2", "x": 6, "y": 0, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q2", "name": "Case table",
                    "queryId": "query-cases", "visualizationType": "TABLE",
                    "settingId": "s2"
                }
            },
            {
                "id": "h3", "x": 0, "y": 4, "columns": 4, "rows": 2,
                "item": { "type": "TEXT_ITEM", "id": "t1", "text": "Updated daily" }
            },
            {
                "id": "h4", "x": 4, "y": 4, "columns": 4, "rows": 2,
                "item": {
                    "type": "IFRAME_ITEM", "id": "i1", "title": "Guidance",
                    "iFrameURL": "https://example.org/guidance"
                }
            },
            {
                "id": "h5", "x": 8, "y": 4, "columns": 4, "rows": 2,
                "item": {
                    "type": "PLACEHOLDER_ITEM", "id": "p1", "itemType": "QUERY_ITEM",
                    "value": "Vaccination rate"
                }
            },
            {
                "id": "h6", "x": 0, "y": 6, "columns": 12, "rows": 1,
                "item": { "type": "SPACER_ITEM", "id": "sp1" }
            },
            {
                "id": "h7", "x": 0, "y": 7, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q3", "name": "Cases over time",
                    "queryId": "query-cases", "visualizationType": "TIME_SERIES",
                    "settingId": "s3", "dateRangeId": "d1"
                }
            },
            {
                "id": "h8", "x": 6, "y": 7, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q4", "name": "Case map",
                    "queryId": "query-cases", "visualizationType": "MAP",
                    "settingId": "s4", "filterId": "f1"
                }
            }
        ],
        "filters": {
            "f1": { "id": "f1", "dimension": "region", "values": ["North", "South"], "invert": false },
            "f_orphan": { "id": "f_orphan", "dimension": "sex", "values": ["F"], "invert": true }
        },
        "dateRanges": {
            "d1": { "id": "d1", "dateType": "CUSTOM", "startDate": "2021-01-01", "endDate": "2021-03-01" },
            "d_orphan": { "id": "d_orphan", "dateType": "LAST_YEAR" }
        },
        "settings": {
            "s1": {
                "id": "s1",
                "titleSettings": { "title": "Cases", "subtitle": "by region" },
                "viewTypeSettings": {
                    "BAR_CHART": {
                        "axes": {
                            "y1Axis": { "title": "Cases", "goalLine": "500", "goalLineLabel": "Target" },
                            "y2Axis": { "title": "", "goalLine": "", "goalLineLabel": "" }
                        },
                        "viewSpecificSettings": { "sortOrder": "DESCENDING", "stackBars": false }
                    }
                }
            },
            "s2": {
                "id": "s2",
                "titleSettings": { "title": "Case table", "subtitle": "" },
                "viewTypeSettings": {
                    "TABLE": {
                        "viewSpecificSettings": {
                            "rowHeight": 32, "enablePagination": true, "wrapColumnTitles": false
                        }
                    }
                }
            },
            "s3": {
                "id": "s3",
                "titleSettings": { "title": "Cases over time", "subtitle": "weekly" },
                "viewTypeSettings": {
                    "TIME_SERIES": {
                        "axes": {
                            "y1Axis": { "title": "Cases", "goalLine": "", "goalLineLabel": "" },
                            "y2Axis": { "title": "Deaths", "goalLine": "20", "goalLineLabel": "Threshold" }
                        },
                        "viewSpecificSettings": { "bucketType": "WEEK", "showDataLabels": true }
                    }
                }
            },
            "s4": {
                "id": "s4",
                "titleSettings": { "title": "Case map", "subtitle": "" },
                "viewTypeSettings": {
                    "MAP": {
                        "viewSpecificSettings": {
                            "baseLayer": "STREETS", "currentDisplay": "SCALED_DOTS", "zoomLevel": 3.5
                        }
                    }
                }
            },
            "s_orphan": {
                "id": "s_orphan",
                "titleSettings": { "title": "Unused", "subtitle": "" },
                "viewTypeSettings": {
                    "TABLE": {
                        "viewSpecificSettings": {
                            "rowHeight": 24, "enablePagination": false, "wrapColumnTitles": true
                        }
                    }
                }
            }
        }
    })
}

pub fn latest() -> Value {
    json!({
        "version": "2021-10-25",
        "commonSettings": {
            "title": "Outbreak overview",
            "layout": { "columnCount": 12 },
            "filterPanel": { "visible": true, "initialSelectedComponents": [] }
        },
        "items": [
            {
                "id": "h1", "x": 0, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q1", "name": "Cases by region",
                    "queryId": "query-cases", "visualizationType": "BAR_CHART",
                    "settingId": "s1", "filterId": "f1", "dateRangeId": "d1"
                }
            },
            {
                "id": "h2", "x": 6, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q2", "name": "Case table",
                    "queryId": "query-cases", "visualizationType": "TABLE",
                    "settingId": "s2"
                }
            },
            {
                "id": "h3", "x": 0, "columns": 4, "rows": 2,
                "item": { "type": "TEXT_ITEM", "id": "t1", "content": "Updated daily" }
            },
            {
                "id": "h4", "x": 4, "columns": 4, "rows": 2,
                "item": {
                    "type": "IFRAME_ITEM", "id": "i1", "title": "Guidance",
                    "url": "https://example.org/guidance"
                }
            },
            {
                "id": "h5", "x": 8, "columns": 4, "rows": 2,
                "item": {
                    "type": "PLACEHOLDER_ITEM", "id": "p1", "itemType": "QUERY_ITEM",
                    "value": "Vaccination rate"
                }
            },
            {
                "id": "h6", "x": 0, "columns": 12, "rows": 1,
                "item": { "type": "SPACER_ITEM", "id": "sp1" }
            },
            {
                "id": "h7", "x": 0, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q3", "name": "Cases over time",
                    "queryId": "query-cases", "visualizationType": "TIME_SERIES",
                    "settingId": "s3", "dateRangeId": "d1"
                }
            },
            {
                "id": "h8", "x": 6, "columns": 6, "rows": 4,
                "item": {
                    "type": "QUERY_ITEM", "id": "q4", "name": "Case map",
                    "queryId": "query-cases", "visualizationType": "MAP",
                    "settingId": "s4", "filterId": "f1"
                }
            }
        ],
        "filters": {
            "f1": { "id": "f1", "dimension": "region", "values": ["North", "South"], "invert": false },
            "f_orphan": { "id": "f_orphan", "dimension": "sex", "values": ["F"], "invert": true }
        },
        "dateRanges": {
            "d1": { "id": "d1", "dateType": "CUSTOM", "startDate": "2021-01-01", "endDate": "2021-03-01" },
            "d_orphan": { "id": "d_orphan", "dateType": "LAST_YEAR" }
        },
        "settings": {
            "s1": {
                "id": "s1",
                "titleSettings": { "title": "Cases", "subtitle": "by region" },
                "viewTypeSettings": {
                    "BAR_CHART": {
                        "axes": {
                            "y1Axis": { "title": "Cases" },
                            "y2Axis": { "title": "" }
                        },
                        "viewSpecificSettings": {
                            "sortOrder": "DESCENDING",
                            "stackBars": false,
                            "goalLines": [
                                { "axis": "y1Axis", "value": "500", "label": "Target" }
                            ]
                        }
                    }
                }
            },
            "s2": {
                "id": "s2",
                "titleSettings": { "title": "Case table", "subtitle": "" },
                "viewTypeSettings": {
                    "TABLE": {
                        "viewSpecificSettings": {
                            "rowHeight": 32, "enablePagination": true, "wrapColumnTitles": false,
                            "enableAutoExpand": false
                        }
                    }
                }
            },
            "s3": {
                "id": "s3",
                "titleSettings": { "title": "Cases over time", "subtitle": "weekly" },
                "viewTypeSettings": {
                    "TIME_SERIES": {
                        "axes": {
                            "y1Axis": { "title": "Cases" },
                            "y2Axis": { "title": "Deaths" }
                        },
                        "viewSpecificSettings": {
                            "bucketType": "WEEK",
                            "showDataLabels": true,
                            "goalLines": [
                                { "axis": "y2Axis", "value": "20", "label": "Threshold" }
                            ]
                        }
                    }
                }
            },
            "s4": {
                "id": "s4",
                "titleSettings": { "title": "Case map", "subtitle": "" },
                "viewTypeSettings": {
                    "MAP": {
                        "viewSpecificSettings": {
                            "baseLayer": "STREETS", "currentDisplay": "SCALED_DOTS", "zoomLevel": 3.5
                        }
                    }
                }
            },
            "s_orphan": {
                "id": "s_orphan",
                "titleSettings": { "title": "Unused", "subtitle": "" },
                "viewTypeSettings": {
                    "TABLE": {
                        "viewSpecificSettings": {
                            "rowHeight": 24, "enablePagination": false, "wrapColumnTitles": true,
                            "enableAutoExpand": false
                        }
                    }
                }
            }
        }
    })
}

/// `latest()` with a divider and a GIS tile appended (holders 8 and 9).
pub fn latest_with_gis() -> Value {
    let mut spec = latest();
    if let Some(items) = spec["items"].as_array_mut() {
        items.push(divider_holder());
        items.push(gis_holder());
    }
    spec
}

pub fn divider_holder() -> Value {
    json!({
        "id": "h9", "x": 0, "columns": 12, "rows": 1,
        "item": { "type": "DIVIDER_ITEM", "id": "div1" }
    })
}

pub fn gis_holder() -> Value {
    json!({
        "id": "h10", "x": 0, "columns": 12, "rows": 6,
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
    })
}
