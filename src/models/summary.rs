// Rollup models: per-server summary and success/failure pie magnitudes

use serde::{Deserialize, Serialize};

/// Per-server rollup within one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSummary {
    pub server: String,
    /// Distinct storage nodes, not rows.
    pub storage_node_count: usize,
    /// Distinct devices, not rows.
    pub client_count: usize,
    /// Unrounded mean of the per-record rates.
    pub backup_success_rate: f64,
}

/// Summed success and failure contributions. These are pie magnitudes, not
/// percentages: across N items they need not add up to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFailure {
    pub success: f64,
    pub failure: f64,
}

impl std::ops::Add for SuccessFailure {
    type Output = SuccessFailure;

    fn add(self, rhs: SuccessFailure) -> SuccessFailure {
        SuccessFailure {
            success: self.success + rhs.success,
            failure: self.failure + rhs.failure,
        }
    }
}

impl std::iter::Sum for SuccessFailure {
    fn sum<I: Iterator<Item = SuccessFailure>>(iter: I) -> Self {
        iter.fold(SuccessFailure::default(), |acc, x| acc + x)
    }
}
