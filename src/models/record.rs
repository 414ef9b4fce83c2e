// Inventory record models (one CSV row, plus the simulated success rate)

use serde::{Deserialize, Serialize};

/// One row of the inventory file. Column names match the CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureRecord {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "NMC Server")]
    pub nmc_server: String,
    #[serde(rename = "Server")]
    pub server: String,
    #[serde(rename = "Storage Node")]
    pub storage_node: String,
    #[serde(rename = "Device")]
    pub device: String,
    /// Period label; time-series rows are sparse so this may be absent.
    #[serde(rename = "Month", default)]
    pub month: Option<String>,
    #[serde(
        rename = "Used Space (TB)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub used_space_tb: Option<f64>,
    #[serde(
        rename = "Available Storage (TB)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub available_storage_tb: Option<f64>,
}

impl InfrastructureRecord {
    /// Record with only the hierarchy path filled in (no usage sample).
    pub fn new(
        location: impl Into<String>,
        nmc_server: impl Into<String>,
        server: impl Into<String>,
        storage_node: impl Into<String>,
        device: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            nmc_server: nmc_server.into(),
            server: server.into(),
            storage_node: storage_node.into(),
            device: device.into(),
            month: None,
            used_space_tb: None,
            available_storage_tb: None,
        }
    }

    /// Attach a usage sample (month, used TB, available TB).
    pub fn with_usage(
        mut self,
        month: impl Into<String>,
        used_space_tb: f64,
        available_storage_tb: f64,
    ) -> Self {
        self.month = Some(month.into());
        self.used_space_tb = Some(used_space_tb);
        self.available_storage_tb = Some(available_storage_tb);
        self
    }
}

/// A record paired with its simulated backup success rate in [80, 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedRecord {
    #[serde(flatten)]
    pub record: InfrastructureRecord,
    #[serde(rename = "Backup Success Rate (%)")]
    pub backup_success_rate: f64,
}

impl RatedRecord {
    pub fn new(record: InfrastructureRecord, backup_success_rate: f64) -> Self {
        Self {
            record,
            backup_success_rate,
        }
    }
}
