//! Reference-integrity cleanup for migrated documents.
//!
//! Query items are the only referrers: each points at one settings entry and
//! optionally at a filter and a date range. Anything in those maps that no
//! item points at is an orphan and is dropped. Item holders are never
//! touched.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::schema::DashboardModel;

/// Ids reachable from the item holders of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    pub settings: BTreeSet<String>,
    pub filters: BTreeSet<String>,
    pub date_ranges: BTreeSet<String>,
}

impl References {
    pub fn collect<M: DashboardModel>(spec: &M) -> Self {
        let mut refs = Self::default();
        for query in spec.query_items() {
            refs.settings.insert(query.setting_id.clone());
            if let Some(filter_id) = &query.filter_id {
                refs.filters.insert(filter_id.clone());
            }
            if let Some(date_range_id) = &query.date_range_id {
                refs.date_ranges.insert(date_range_id.clone());
            }
        }
        refs
    }
}

/// Ids removed by one pruning pass, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PruneReport {
    pub filters: Vec<String>,
    pub date_ranges: Vec<String>,
    pub settings: Vec<String>,
}

impl PruneReport {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.filters.len() + self.date_ranges.len() + self.settings.len()
    }
}

/// Drops every filter, date range and settings entry no item references.
///
/// Idempotent: a second pass over the result removes nothing.
pub fn prune_orphans<M: DashboardModel>(spec: &mut M) -> PruneReport {
    let refs = References::collect(spec);
    let mut report = PruneReport::default();

    spec.filters_mut().retain(|id, _| {
        let keep = refs.filters.contains(id);
        if !keep {
            report.filters.push(id.clone());
        }
        keep
    });
    spec.date_ranges_mut().retain(|id, _| {
        let keep = refs.date_ranges.contains(id);
        if !keep {
            report.date_ranges.push(id.clone());
        }
        keep
    });
    spec.settings_mut().retain(|id, _| {
        let keep = refs.settings.contains(id);
        if !keep {
            report.settings.push(id.clone());
        }
        keep
    });

    if !report.is_empty() {
        tracing::debug!(
            "Pruned {} orphaned entries from {} document (filters: {:?}, date ranges: {:?}, settings: {:?})",
            report.total(),
            M::VERSION,
            report.filters,
            report.date_ranges,
            report.settings
        );
    }

    report
}
