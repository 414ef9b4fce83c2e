// View model: everything the page displays for one navigation state.
// Serialized as camelCase JSON for GET /api/view and WS /ws/drilldown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub title: String,
    /// Always present, independent of any selection.
    pub overall_pie: PieChart,
    pub location_options: Vec<String>,
    pub location: Option<LocationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub name: String,
    /// First NMC server found at the location; `None` when nothing matched.
    pub nmc_server: Option<Banner>,
    pub servers_heading: String,
    pub server_table: Vec<ServerRow>,
    pub pie: PieChart,
    pub server_options: Vec<String>,
    pub server: Option<ServerView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerView {
    pub name: String,
    pub storage_nodes_heading: String,
    /// Rendered as a table and used as the next level's options.
    pub storage_nodes: Vec<String>,
    pub storage_node: Option<StorageNodeView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageNodeView {
    pub name: String,
    pub devices_heading: String,
    pub devices: Vec<String>,
    pub device: Option<DeviceView>,
}

/// Leaf level: a usage chart with totals, or an explicit no-data warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DeviceView {
    #[serde(rename_all = "camelCase")]
    Usage {
        name: String,
        chart: LineChart,
        total_used: Banner,
        total_available: Banner,
    },
    #[serde(rename_all = "camelCase")]
    NoData { name: String, warning: Banner },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRow {
    pub server: String,
    pub storage_node_count: usize,
    pub client_count: usize,
    /// Display string, e.g. "93" or "95.5".
    pub backup_success_rate: String,
    /// Cell color; `None` means unclassified (no styling).
    pub rate_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<UsagePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePoint {
    pub month: String,
    pub used_space_tb: f64,
}
