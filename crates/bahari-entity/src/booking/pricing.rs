//! Booking price calculation.
//!
//! All money values are whole currency units (KES) held in `i64`; there is
//! no floating point anywhere in the price path. The same function computes
//! the total at quote time, at booking creation, at payment confirmation,
//! and at email rendering, so the persisted and displayed figures are always
//! the same integer.

use chrono::NaiveDate;
use thiserror::Error;

use bahari_core::error::AppError;

/// Errors produced by price calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The stay must span at least one night.
    #[error("stay must be at least one night (got {nights})")]
    NonPositiveNights {
        /// The offending night count.
        nights: i64,
    },
    /// A rate was negative.
    #[error("{field} must be non-negative (got {value})")]
    NegativeRate {
        /// Which input was invalid.
        field: &'static str,
        /// The offending value.
        value: i64,
    },
    /// The multiplication overflowed i64. Unreachable for any realistic
    /// rate, but never silently wrapped.
    #[error("price calculation overflowed")]
    Overflow,
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Number of nights between check-in and check-out, in whole days.
///
/// Rejects zero and negative spans rather than clamping.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64, PricingError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(PricingError::NonPositiveNights { nights });
    }
    Ok(nights)
}

/// Total price for a stay: `room_price * nights + package_addon * nights`.
///
/// `package_addon` is the optional per-night surcharge of an add-on package.
pub fn compute_total(
    room_price: i64,
    nights: i64,
    package_addon: Option<i64>,
) -> Result<i64, PricingError> {
    if nights <= 0 {
        return Err(PricingError::NonPositiveNights { nights });
    }
    if room_price < 0 {
        return Err(PricingError::NegativeRate {
            field: "room price",
            value: room_price,
        });
    }
    let addon = package_addon.unwrap_or(0);
    if addon < 0 {
        return Err(PricingError::NegativeRate {
            field: "package add-on",
            value: addon,
        });
    }

    let nightly = room_price
        .checked_add(addon)
        .ok_or(PricingError::Overflow)?;
    nightly.checked_mul(nights).ok_or(PricingError::Overflow)
}

/// Convenience: nights and total for a dated stay in one step.
pub fn quote(
    room_price: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    package_addon: Option<i64>,
) -> Result<(i64, i64), PricingError> {
    let nights = nights_between(check_in, check_out)?;
    let total = compute_total(room_price, nights, package_addon)?;
    Ok((nights, total))
}
