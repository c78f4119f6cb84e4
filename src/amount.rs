//! Conversion between LSK and Beddows, the chain's base integer unit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of Beddows in one LSK.
pub const FIXED_POINT: u64 = 100_000_000;
/// Maximal number of decimal places in an LSK amount.
pub const MAX_DECIMAL_PLACES: u32 = 8;
/// Largest amount (in Beddows) a transaction may carry.
pub const MAX_TRANSACTION_AMOUNT: u64 = i64::MAX as u64;
/// Fee of a token transfer, in Beddows (0.1 LSK).
pub const TRANSFER_FEE: u64 = FIXED_POINT / 10;

/// Amount conversion errors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AmountError {
    /// Input is not a decimal number.
    #[error("Cannot convert non-numeric amount {0:?}")]
    NotNumeric(String),
    /// Input is below zero.
    #[error("LSK amount cannot be negative")]
    Negative,
    /// Input has more than 8 decimal places.
    #[error("LSK amount has too many decimal points")]
    TooManyDecimals,
    /// Converted value exceeds [`MAX_TRANSACTION_AMOUNT`].
    #[error("LSK amount out of range")]
    OutOfRange,
}

pub fn convert_lsk_to_beddows(lsk_amount: &str) -> Result<u64, AmountError> {
    //! Convert a human-readable LSK amount (like `"10"` or `"0.5"`)
    //! into Beddows.
    let amount = Decimal::from_str(lsk_amount.trim())
        .map_err(|_| AmountError::NotNumeric(lsk_amount.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative);
    }
    if amount.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(AmountError::TooManyDecimals);
    }
    let beddows = amount
        .checked_mul(Decimal::from(FIXED_POINT))
        .and_then(|b| b.to_u64())
        .ok_or(AmountError::OutOfRange)?;
    if beddows > MAX_TRANSACTION_AMOUNT {
        return Err(AmountError::OutOfRange);
    }
    Ok(beddows)
}

pub fn convert_beddows_to_lsk(beddows: u64) -> String {
    //! Convert Beddows into a normalized LSK string (no trailing zeros).
    Decimal::from_i128_with_scale(beddows.into(), MAX_DECIMAL_PLACES)
        .normalize()
        .to_string()
}
