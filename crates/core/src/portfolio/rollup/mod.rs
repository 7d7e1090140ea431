//! Aggregate rollup - category totals, net worth, allocations.

mod rollup_model;
mod rollup_service;

pub use rollup_model::{AggregateTotals, Allocation};
pub use rollup_service::rollup;

#[cfg(test)]
mod rollup_tests;
