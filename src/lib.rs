//! Building energy-efficiency monitor.
//!
//! Weather-driven solar estimation, a retrofit savings calculator and an
//! energy-source emission/cost comparator, served over a small JSON API.

pub mod api;
pub mod app;
pub mod clock;
pub mod config;
pub mod domain;
pub mod emissions;
pub mod savings;
pub mod solar;
pub mod telemetry;
pub mod time_of_day;
pub mod utils;
pub mod weather;
