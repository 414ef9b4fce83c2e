// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod dataset;
pub mod models;
pub mod navigator;
pub mod presenter;
pub mod routes;
pub mod version;
pub mod view;
