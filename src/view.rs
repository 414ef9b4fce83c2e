// compute_view: the pure (state, dataset) -> ViewModel function run after
// every navigation event. Each selected level narrows the working set and
// derives the next level's options from it afresh.

use tracing::debug;

use crate::aggregation::{self, CLASSIFICATION_BASIS};
use crate::dataset::{Dataset, distinct_values};
use crate::models::{
    DeviceView, LocationView, RatedRecord, ServerView, StorageNodeView, UsagePoint, ViewModel,
};
use crate::navigator::DrilldownState;
use crate::presenter;

pub const TITLE: &str = "Networker Infrastructure Drilldown";
pub const OVERALL_PIE_TITLE: &str = "Overall Backup Success Rate";

pub fn compute_view(state: &DrilldownState, dataset: &Dataset) -> ViewModel {
    debug!(?state, "computing view");
    let records = dataset.records();
    let overall = aggregation::overall_totals(records);

    ViewModel {
        title: TITLE.to_string(),
        overall_pie: presenter::success_failure_pie(OVERALL_PIE_TITLE, overall),
        location_options: dataset.locations(),
        location: state
            .location
            .as_deref()
            .map(|location| location_view(state, records, location)),
    }
}

/// Records under `parent` whose `key` equals `value`.
fn narrow<'a>(
    parent: &[&'a RatedRecord],
    value: &str,
    key: impl Fn(&RatedRecord) -> &str,
) -> Vec<&'a RatedRecord> {
    parent.iter().copied().filter(|r| key(*r) == value).collect()
}

fn location_view(state: &DrilldownState, records: &[RatedRecord], location: &str) -> LocationView {
    let working: Vec<&RatedRecord> = records
        .iter()
        .filter(|r| r.record.location == location)
        .collect();

    let summaries = aggregation::server_summaries(working.iter().copied());
    let totals = aggregation::location_totals(&summaries, CLASSIFICATION_BASIS);

    LocationView {
        name: location.to_string(),
        nmc_server: working
            .first()
            .map(|r| presenter::nmc_server_banner(location, &r.record.nmc_server)),
        servers_heading: format!("Servers at {}", location),
        server_table: presenter::server_rows(&summaries, CLASSIFICATION_BASIS),
        pie: presenter::success_failure_pie(
            format!("Backup Success vs Failure at {}", location),
            totals,
        ),
        server_options: distinct_values(working.iter().map(|r| r.record.server.as_str())),
        server: match state.server.as_deref() {
            Some(server) if !working.is_empty() => Some(server_view(state, &working, server)),
            _ => None,
        },
    }
}

fn server_view(state: &DrilldownState, parent: &[&RatedRecord], server: &str) -> ServerView {
    let working = narrow(parent, server, |r| r.record.server.as_str());
    ServerView {
        name: server.to_string(),
        storage_nodes_heading: format!("Storage Nodes under {}", server),
        storage_nodes: distinct_values(working.iter().map(|r| r.record.storage_node.as_str())),
        storage_node: match state.storage_node.as_deref() {
            Some(node) if !working.is_empty() => Some(storage_node_view(state, &working, node)),
            _ => None,
        },
    }
}

fn storage_node_view(
    state: &DrilldownState,
    parent: &[&RatedRecord],
    storage_node: &str,
) -> StorageNodeView {
    let working = narrow(parent, storage_node, |r| r.record.storage_node.as_str());
    StorageNodeView {
        name: storage_node.to_string(),
        devices_heading: format!("Devices under {}", storage_node),
        devices: distinct_values(working.iter().map(|r| r.record.device.as_str())),
        device: match state.device.as_deref() {
            Some(device) if !working.is_empty() => Some(device_view(&working, device)),
            _ => None,
        },
    }
}

/// Rows missing Month or Used Space are dropped before charting; totals are
/// plain sums over what is left, with an absent available value counting as zero.
fn device_view(parent: &[&RatedRecord], device: &str) -> DeviceView {
    let usable: Vec<(&str, f64, f64)> = narrow(parent, device, |r| r.record.device.as_str())
        .into_iter()
        .filter_map(|r| {
            let month = r.record.month.as_deref()?;
            let used = r.record.used_space_tb?;
            Some((month, used, r.record.available_storage_tb.unwrap_or(0.0)))
        })
        .collect();

    if usable.is_empty() {
        return DeviceView::NoData {
            name: device.to_string(),
            warning: presenter::no_usage_banner(),
        };
    }

    let total_used: f64 = usable.iter().map(|(_, used, _)| used).sum();
    let total_available: f64 = usable.iter().map(|(_, _, available)| available).sum();
    let points = usable
        .iter()
        .map(|(month, used, _)| UsagePoint {
            month: month.to_string(),
            used_space_tb: *used,
        })
        .collect();

    DeviceView::Usage {
        name: device.to_string(),
        chart: presenter::usage_chart(device, points),
        total_used: presenter::total_used_banner(device, total_used),
        total_available: presenter::total_available_banner(device, total_available),
    }
}
