//! Monetary amount bounds
//!
//! Sums insured and claim amounts are positive and capped at [`MAX_AMOUNT`].
//! The cap keeps every total the analytics compute, over any collection that
//! fits in memory, well inside the range of `Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// Largest accepted amount (one quadrillion)
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Why an amount was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountViolation {
    NotPositive,
    AboveMaximum,
}

impl AmountViolation {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AmountViolation::NotPositive => "positive",
            AmountViolation::AboveMaximum => "max_amount",
        }
    }
}

impl fmt::Display for AmountViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountViolation::NotPositive => f.write_str("must be greater than zero"),
            AmountViolation::AboveMaximum => write!(f, "must not exceed {}", MAX_AMOUNT),
        }
    }
}

/// Checks that an amount lies in `(0, MAX_AMOUNT]`
pub fn check_amount(value: &Decimal) -> Result<(), AmountViolation> {
    if *value <= Decimal::ZERO {
        Err(AmountViolation::NotPositive)
    } else if *value > MAX_AMOUNT {
        Err(AmountViolation::AboveMaximum)
    } else {
        Ok(())
    }
}
