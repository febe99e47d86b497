//! Trailing-year Instagram report over the Metricool API
//!
//! - Endpoint tables and the sequential fetch loop in `report/`
//! - Date window and item counting in `utils/`
//! - Requires METRICOOL_USER_TOKEN, METRICOOL_USER_ID and METRICOOL_BLOG_ID

pub mod config;
pub mod report;
pub mod utils;
