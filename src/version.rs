// Package identity baked in at build time, served by GET /version

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME,
        version: VERSION,
        description: DESCRIPTION,
    }
}
