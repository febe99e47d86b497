//! Metricool REST client for Instagram stats and analytics
//!
//! - Every request carries the `userToken`/`userId`/`blogId` credential triple
//! - Responses are returned as untyped JSON

pub mod index;
