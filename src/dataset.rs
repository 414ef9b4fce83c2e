// Dataset loading: read the inventory CSV once at startup and attach a
// simulated backup success rate to every row.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::models::{InfrastructureRecord, RatedRecord};

/// Inventory file, relative to the working directory. Not configurable.
pub const DATASET_PATH: &str = "networker_infrastructure.csv";

/// Seed for the simulated success rates; same input gives the same rates.
pub const SUCCESS_RATE_SEED: u64 = 42;

/// Half-open range the simulated rates are drawn from.
pub const SUCCESS_RATE_MIN: f64 = 80.0;
pub const SUCCESS_RATE_MAX: f64 = 100.0;

/// Columns every inventory file must carry. Month and the usage columns may be absent.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Location",
    "NMC Server",
    "Server",
    "Storage Node",
    "Device",
];

/// Columns the device usage chart reads. Files without them still load, but
/// every device then reports no usage data.
pub const USAGE_COLUMNS: [&str; 3] = ["Month", "Used Space (TB)", "Available Storage (TB)"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// The loaded inventory. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<RatedRecord>,
}

impl Dataset {
    /// Loads [`DATASET_PATH`].
    pub fn load() -> Result<Self, LoadError> {
        Self::load_from_path(DATASET_PATH)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            "loaded {} records across {} locations from {}",
            dataset.len(),
            dataset.locations().len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parses CSV from any reader and rates the rows with the fixed seed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if let Some(column) = missing_columns(&headers, &REQUIRED_COLUMNS).first() {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
        let missing_usage = missing_columns(&headers, &USAGE_COLUMNS);
        if !missing_usage.is_empty() {
            warn!(
                "dataset has no {} column(s); device usage charts will be empty",
                missing_usage.join(", ")
            );
        }

        let records = rdr
            .deserialize::<InfrastructureRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(records))
    }

    /// Rates `records` with a generator seeded by [`SUCCESS_RATE_SEED`].
    pub fn from_records(records: Vec<InfrastructureRecord>) -> Self {
        let mut rng = StdRng::seed_from_u64(SUCCESS_RATE_SEED);
        Self::from_records_with_rng(records, &mut rng)
    }

    pub fn from_records_with_rng<R: Rng + ?Sized>(
        records: Vec<InfrastructureRecord>,
        rng: &mut R,
    ) -> Self {
        let rates = generate_success_rates(records.len(), rng);
        let records = records
            .into_iter()
            .zip(rates)
            .map(|(record, rate)| RatedRecord::new(record, rate))
            .collect();
        Self { records }
    }

    /// Dataset with rates already attached (fixtures, exports).
    pub fn from_rated(records: Vec<RatedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RatedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct locations in first-appearance order.
    pub fn locations(&self) -> Vec<String> {
        distinct_values(self.records.iter().map(|r| r.record.location.as_str()))
    }
}

/// `n` independent uniform draws in [80, 100). Empty when `n == 0`.
pub fn generate_success_rates<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| rng.gen_range(SUCCESS_RATE_MIN..SUCCESS_RATE_MAX))
        .collect()
}

/// Entries of `columns` absent from `headers`, in `columns` order.
pub fn missing_columns<'a>(headers: &csv::StringRecord, columns: &[&'a str]) -> Vec<&'a str> {
    columns
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h == *c))
        .collect()
}

/// Distinct values in first-appearance order.
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
