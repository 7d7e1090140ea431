use thiserror::Error;

/// Errors raised by currency conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("No conversion rate found for {from}->{to}")]
    RateNotFound { from: String, to: String },
}
