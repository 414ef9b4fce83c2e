// Shared test helpers
#![allow(dead_code)]

use networker_drilldown::dataset::Dataset;
use networker_drilldown::models::*;

pub const SAMPLE_CSV: &str = "\
Location,NMC Server,Server,Storage Node,Device,Month,Used Space (TB),Available Storage (TB)
NY,nmc-ny,S1,SN1,D1,2024-01,1.5,10.0
NY,nmc-ny,S1,SN1,D1,2024-02,2.25,20.0
NY,nmc-ny,S1,SN1,D1,2024-03,4.0,
NY,nmc-ny,S1,SN1,D1,2024-04,,5.0
NY,nmc-ny,S1,SN2,D2,,,
NY,nmc-ny-b,S2,SN3,D3,2024-01,3.0,7.0
LDN,nmc-ldn,S9,SN9,D9,2024-01,1.0,1.0
";

pub fn record(location: &str, server: &str, storage_node: &str, device: &str) -> InfrastructureRecord {
    InfrastructureRecord::new(
        location,
        format!("nmc-{}", location.to_lowercase()),
        server,
        storage_node,
        device,
    )
}

pub fn rated(
    location: &str,
    server: &str,
    storage_node: &str,
    device: &str,
    rate: f64,
) -> RatedRecord {
    RatedRecord::new(record(location, server, storage_node, device), rate)
}

/// One location "NY", one server "S1", two devices on distinct storage nodes rated 96 and 90.
pub fn ny_example() -> Dataset {
    Dataset::from_rated(vec![
        rated("NY", "S1", "SN1", "D1", 96.0),
        rated("NY", "S1", "SN2", "D2", 90.0),
    ])
}

pub fn sample_dataset() -> Dataset {
    Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("sample csv")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
