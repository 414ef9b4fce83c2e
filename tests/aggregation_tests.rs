// Aggregation tests: threshold rule, server summaries, overall vs location pies

mod common;

use common::{assert_close, ny_example, rated};
use networker_drilldown::aggregation::*;
use networker_drilldown::models::{ServerSummary, SuccessFailure};

#[test]
fn contribution_is_full_rate_on_success() {
    assert_eq!(
        contribution(96.0),
        SuccessFailure {
            success: 96.0,
            failure: 0.0
        }
    );
}

#[test]
fn contribution_is_shortfall_from_100_on_failure() {
    assert_eq!(
        contribution(90.0),
        SuccessFailure {
            success: 0.0,
            failure: 10.0
        }
    );
}

#[test]
fn threshold_is_inclusive() {
    assert_eq!(classify(SUCCESS_THRESHOLD), Outcome::Success);
    assert_eq!(contribution(95.0).success, 95.0);
    assert_eq!(classify(94.999), Outcome::Failure);
}

#[test]
fn contribution_pair_is_rate_or_shortfall_across_range() {
    let mut rate = 80.0;
    while rate < 100.0 {
        let c = contribution(rate);
        if rate >= SUCCESS_THRESHOLD {
            assert_eq!(c.failure, 0.0);
            assert_close(c.success, rate);
        } else {
            assert_eq!(c.success, 0.0);
            assert_close(c.failure, 100.0 - rate);
        }
        rate += 0.37;
    }
}

#[test]
fn tally_of_nothing_is_zero() {
    assert_eq!(tally(std::iter::empty()), SuccessFailure::default());
    assert_eq!(overall_totals(&[]), SuccessFailure::default());
    assert!(server_summaries(&[]).is_empty());
    assert_eq!(
        location_totals(&[], CLASSIFICATION_BASIS),
        SuccessFailure::default()
    );
}

#[test]
fn overall_sums_every_record() {
    let records = vec![
        rated("NY", "S1", "SN1", "D1", 96.0),
        rated("NY", "S1", "SN2", "D2", 90.0),
        rated("LDN", "S2", "SN3", "D3", 98.0),
    ];
    let totals = overall_totals(&records);
    assert_close(totals.success, 194.0);
    assert_close(totals.failure, 10.0);
}

#[test]
fn summary_counts_distinct_nodes_and_devices_not_rows() {
    let records = vec![
        rated("NY", "S1", "SN1", "D1", 90.0),
        rated("NY", "S1", "SN1", "D1", 92.0),
        rated("NY", "S1", "SN1", "D2", 94.0),
        rated("NY", "S1", "SN2", "D3", 96.0),
    ];
    let summaries = server_summaries(&records);
    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.server, "S1");
    assert_eq!(s.storage_node_count, 2);
    assert_eq!(s.client_count, 3);
    assert_close(s.backup_success_rate, 93.0);
}

#[test]
fn summaries_are_ordered_by_server_name() {
    let records = vec![
        rated("NY", "zeta", "SN1", "D1", 90.0),
        rated("NY", "alpha", "SN2", "D2", 90.0),
        rated("NY", "mid", "SN3", "D3", 90.0),
    ];
    let names: Vec<String> = server_summaries(&records)
        .into_iter()
        .map(|s| s.server)
        .collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn ny_example_location_pie_is_all_failure() {
    let ds = ny_example();
    let summaries = server_summaries(ds.records());
    assert_eq!(summaries.len(), 1);
    assert_close(summaries[0].backup_success_rate, 93.0);
    assert_eq!(summaries[0].storage_node_count, 2);
    assert_eq!(summaries[0].client_count, 2);

    let location = location_totals(&summaries, CLASSIFICATION_BASIS);
    assert_close(location.success, 0.0);
    assert_close(location.failure, 7.0);
}

// The location pie classifies per-server means while the overall pie
// classifies raw records; the same rows give different pies.
#[test]
fn overall_and_location_pies_use_different_granularity() {
    let ds = ny_example();
    let overall = overall_totals(ds.records());
    assert_close(overall.success, 96.0);
    assert_close(overall.failure, 10.0);

    let location = location_totals(&server_summaries(ds.records()), CLASSIFICATION_BASIS);
    assert_ne!(overall, location);
}

#[test]
fn format_rate_strips_trailing_zeros() {
    assert_eq!(format_rate(93.0), "93");
    assert_eq!(format_rate(95.5), "95.5");
    assert_eq!(format_rate(87.25), "87.25");
    assert_eq!(format_rate(94.994), "94.99");
    assert_eq!(format_rate(94.996), "95");
    assert_eq!(format_rate(99.999), "100");
}

#[test]
fn display_strings_classify_at_the_boundary() {
    assert_eq!(classify_display("95.00"), Some(Outcome::Success));
    assert_eq!(classify_display("95"), Some(Outcome::Success));
    assert_eq!(classify_display("94.99"), Some(Outcome::Failure));
    assert_eq!(classify_display("n/a"), None);
    assert_eq!(classify_display(""), None);
    assert_eq!(classify_display("NaN"), None);
}

#[test]
fn raw_value_is_the_configured_basis() {
    assert_eq!(CLASSIFICATION_BASIS, ClassificationBasis::RawValue);
}

// 94.996 displays as "95": the raw basis calls it a failure, the display basis a success.
#[test]
fn basis_decides_rounding_edge_cases() {
    assert_eq!(ClassificationBasis::RawValue.effective_rate(94.996), Some(94.996));
    assert_eq!(ClassificationBasis::DisplayValue.effective_rate(94.996), Some(95.0));

    let summaries = vec![ServerSummary {
        server: "S1".into(),
        storage_node_count: 1,
        client_count: 1,
        backup_success_rate: 94.996,
    }];
    let raw = location_totals(&summaries, ClassificationBasis::RawValue);
    assert_close(raw.success, 0.0);
    assert_close(raw.failure, 100.0 - 94.996);

    let display = location_totals(&summaries, ClassificationBasis::DisplayValue);
    assert_close(display.success, 95.0);
    assert_close(display.failure, 0.0);
}
