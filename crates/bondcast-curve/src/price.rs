//! Spot-price computation for one tick.

use bondcast_core::constants::WAD;
use bondcast_core::error::CurveError;

use crate::decay::exponential_to_level;

/// Wad-scaled spot price of the bond at `elapsed` ticks after the last update.
///
/// Computes `WAD * decayed_input / (available_debt + virtual_output)` where
/// `decayed_input` is [`exponential_to_level`] applied to `virtual_input`.
/// Division truncates toward zero.
///
/// # Errors
///
/// - [`CurveError::ZeroDenominator`] if `available_debt + virtual_output == 0`.
/// - Any error of [`exponential_to_level`] for the decay arguments.
/// - [`CurveError::ArithmeticOverflow`] if the wad scaling product or the
///   denominator sum exceeds `u128`.
///
/// # Examples
///
/// ```
/// use bondcast_core::constants::WAD;
/// use bondcast_curve::spot_price;
///
/// // Fresh curve: decayed input equals virtual input, denominator matches it,
/// // so the price is exactly 1.0 wad.
/// let price = spot_price(50 * WAD, 100 * WAD, 50 * WAD, 0, 1, 9_000).unwrap();
/// assert_eq!(price, WAD);
/// ```
pub fn spot_price(
    available_debt: u128,
    virtual_input: u128,
    virtual_output: u128,
    elapsed: u64,
    half_life: u64,
    level_bips: u64,
) -> Result<u128, CurveError> {
    let denominator = available_debt
        .checked_add(virtual_output)
        .ok_or(CurveError::ArithmeticOverflow)?;
    if denominator == 0 {
        return Err(CurveError::ZeroDenominator);
    }

    let decayed = exponential_to_level(virtual_input, elapsed, half_life, level_bips)?;
    let scaled = WAD
        .checked_mul(decayed)
        .ok_or(CurveError::ArithmeticOverflow)?;
    Ok(scaled / denominator)
}
