//! Unit tests for the rate table.

use super::fx_errors::FxError;
use super::fx_model::RateTable;
use rust_decimal_macros::dec;

fn table() -> RateTable {
    let mut rates = RateTable::new();
    rates.insert("USD", "EUR", dec!(0.9));
    rates.insert("EUR", "USD", dec!(1.1111));
    rates.insert("USD", "USD", dec!(1));
    rates
}

#[test]
fn test_convert_identity() {
    let rates = table();
    assert_eq!(rates.convert(dec!(123.45), "USD", "USD").unwrap(), dec!(123.45));
    // Identity holds even when the currency is absent from the table
    assert_eq!(rates.convert(dec!(7), "JPY", "JPY").unwrap(), dec!(7));
}

#[test]
fn test_convert_applies_factor() {
    let rates = table();
    assert_eq!(rates.convert(dec!(100), "USD", "EUR").unwrap(), dec!(90.0));
}

#[test]
fn test_convert_missing_pair_errors() {
    let rates = table();
    let err = rates.convert(dec!(100), "USD", "JPY").unwrap_err();
    assert_eq!(
        err,
        FxError::RateNotFound {
            from: "USD".to_string(),
            to: "JPY".to_string()
        }
    );
}

#[test]
fn test_convert_or_keep_degrades_to_raw_amount() {
    let rates = table();
    assert_eq!(rates.convert_or_keep(dec!(100), "USD", "JPY"), dec!(100));
    assert_eq!(rates.convert_or_keep(dec!(100), "USD", "EUR"), dec!(90.0));
}
