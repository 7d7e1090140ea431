//! Loan projection - EMI remaining-balance math.

mod loan_balance;

pub use loan_balance::{first_billing_date, payments_made, remaining_balance};
