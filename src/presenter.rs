// Presentation mapping: aggregates -> pies, table rows, banners and the usage
// chart. No business rules live here beyond picking labels and colors.

use crate::aggregation::{self, ClassificationBasis, Outcome};
use crate::models::{
    Banner, BannerKind, LineChart, PieChart, PieSlice, ServerRow, ServerSummary, SuccessFailure,
    UsagePoint,
};

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURE_LABEL: &str = "Failure";
pub const SUCCESS_COLOR: &str = "green";
pub const FAILURE_COLOR: &str = "red";

pub const NO_USAGE_DATA: &str = "No usage data available for this device.";

pub fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => SUCCESS_COLOR,
        Outcome::Failure => FAILURE_COLOR,
    }
}

/// Two-slice pie, Success first; colors never depend on the values.
pub fn success_failure_pie(title: impl Into<String>, totals: SuccessFailure) -> PieChart {
    PieChart {
        title: title.into(),
        slices: vec![
            PieSlice {
                label: SUCCESS_LABEL.to_string(),
                value: totals.success,
                color: SUCCESS_COLOR.to_string(),
            },
            PieSlice {
                label: FAILURE_LABEL.to_string(),
                value: totals.failure,
                color: FAILURE_COLOR.to_string(),
            },
        ],
    }
}

/// Color for a rate cell, or `None` when the basis yields no number.
pub fn rate_highlight(rate: f64, basis: ClassificationBasis) -> Option<&'static str> {
    basis
        .effective_rate(rate)
        .map(|r| outcome_color(aggregation::classify(r)))
}

pub fn server_rows(summaries: &[ServerSummary], basis: ClassificationBasis) -> Vec<ServerRow> {
    summaries
        .iter()
        .map(|s| ServerRow {
            server: s.server.clone(),
            storage_node_count: s.storage_node_count,
            client_count: s.client_count,
            backup_success_rate: aggregation::format_rate(s.backup_success_rate),
            rate_color: rate_highlight(s.backup_success_rate, basis).map(str::to_string),
        })
        .collect()
}

pub fn nmc_server_banner(location: &str, nmc_server: &str) -> Banner {
    Banner {
        kind: BannerKind::Info,
        text: format!("NMC Server for {}: {}", location, nmc_server),
    }
}

pub fn usage_chart(device: &str, points: Vec<UsagePoint>) -> LineChart {
    LineChart {
        title: format!("Storage Usage Chart for {}", device),
        x_label: "Month".to_string(),
        y_label: "Used Space (TB)".to_string(),
        points,
    }
}

pub fn total_used_banner(device: &str, used_tb: f64) -> Banner {
    Banner {
        kind: BannerKind::Success,
        text: format!("Total Used Storage for {}: {} TB", device, used_tb),
    }
}

pub fn total_available_banner(device: &str, available_tb: f64) -> Banner {
    Banner {
        kind: BannerKind::Info,
        text: format!("Total Available Storage for {}: {} TB", device, available_tb),
    }
}

pub fn no_usage_banner() -> Banner {
    Banner {
        kind: BannerKind::Warning,
        text: NO_USAGE_DATA.to_string(),
    }
}
