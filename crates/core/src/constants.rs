/// Fixed row id for the profile singleton
pub const PROFILE_SINGLETON_ID: &str = "PROFILE";

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for percentages and display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
