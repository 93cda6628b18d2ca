//! Churnlens: Churn Dataset Chart Projection Library
//!
//! A library for turning a tabular churn dataset plus a declarative chart
//! configuration into renderer-ready series structures: grouped aggregations,
//! scatter coordinates, churn cross-tabs, and per-class profile means.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
