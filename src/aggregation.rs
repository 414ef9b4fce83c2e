// Success/failure rollups: the threshold rule, per-server summaries and the
// overall and per-location pie magnitudes.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::models::{RatedRecord, ServerSummary, SuccessFailure};

/// A rate at or above this counts as a success.
pub const SUCCESS_THRESHOLD: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// Which value a server's mean rate is classified on: the unrounded mean or
/// the rounded string shown in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationBasis {
    RawValue,
    DisplayValue,
}

/// Basis used for table highlighting and the location pie. Both always use
/// the same basis so a red cell is never counted as a success.
pub const CLASSIFICATION_BASIS: ClassificationBasis = ClassificationBasis::RawValue;

impl ClassificationBasis {
    /// The value that gets classified, or `None` if the display string does not parse.
    pub fn effective_rate(self, rate: f64) -> Option<f64> {
        match self {
            ClassificationBasis::RawValue => Some(rate),
            ClassificationBasis::DisplayValue => parse_display_rate(&format_rate(rate)),
        }
    }
}

pub fn classify(rate: f64) -> Outcome {
    if rate >= SUCCESS_THRESHOLD {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}

/// Classifies a displayed rate string; non-numeric strings are unclassified.
pub fn classify_display(display: &str) -> Option<Outcome> {
    parse_display_rate(display).map(classify)
}

/// Parses a displayed rate; "NaN" and infinities count as non-numeric.
pub fn parse_display_rate(display: &str) -> Option<f64> {
    display
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Weighted contribution of one rate: `(rate, 0)` on success,
/// `(0, 100 - rate)` on failure. Failure is the shortfall from 100, not from the threshold.
pub fn contribution(rate: f64) -> SuccessFailure {
    match classify(rate) {
        Outcome::Success => SuccessFailure {
            success: rate,
            failure: 0.0,
        },
        Outcome::Failure => SuccessFailure {
            success: 0.0,
            failure: 100.0 - rate,
        },
    }
}

/// Sums contributions; zero for no rates.
pub fn tally<I: IntoIterator<Item = f64>>(rates: I) -> SuccessFailure {
    rates.into_iter().map(contribution).sum()
}

/// Overall pie: every record's own rate.
pub fn overall_totals(records: &[RatedRecord]) -> SuccessFailure {
    tally(records.iter().map(|r| r.backup_success_rate))
}

/// Groups records by server (ordered by server name) counting distinct
/// storage nodes and devices and averaging the rates.
pub fn server_summaries<'a, I>(records: I) -> Vec<ServerSummary>
where
    I: IntoIterator<Item = &'a RatedRecord>,
{
    #[derive(Default)]
    struct Acc<'a> {
        storage_nodes: HashSet<&'a str>,
        devices: HashSet<&'a str>,
        rates: Vec<f64>,
    }

    let mut by_server: BTreeMap<&str, Acc<'a>> = BTreeMap::new();
    for r in records {
        let acc = by_server.entry(r.record.server.as_str()).or_default();
        acc.storage_nodes.insert(r.record.storage_node.as_str());
        acc.devices.insert(r.record.device.as_str());
        acc.rates.push(r.backup_success_rate);
    }

    by_server
        .into_iter()
        .map(|(server, acc)| ServerSummary {
            server: server.to_string(),
            storage_node_count: acc.storage_nodes.len(),
            client_count: acc.devices.len(),
            backup_success_rate: mean_f64(&acc.rates),
        })
        .collect()
}

/// Location pie: the threshold rule applied to per-server means, not to raw
/// records, so it is not comparable with [`overall_totals`].
pub fn location_totals(
    summaries: &[ServerSummary],
    basis: ClassificationBasis,
) -> SuccessFailure {
    tally(
        summaries
            .iter()
            .filter_map(|s| basis.effective_rate(s.backup_success_rate)),
    )
}

/// Rounds to 2 decimals and strips trailing zeros and a dangling point:
/// 93.0 -> "93", 95.5 -> "95.5", 94.996 -> "95".
pub fn format_rate(rate: f64) -> String {
    let s = format!("{:.2}", rate);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
