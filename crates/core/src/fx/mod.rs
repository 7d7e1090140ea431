//! Fx module - currency conversion against an externally supplied rate table.

mod fx_errors;
mod fx_model;

pub use fx_errors::FxError;
pub use fx_model::RateTable;

#[cfg(test)]
mod fx_model_tests;
