//! Common building blocks for all aggregates

pub mod aggregate_id;
