//! Per-tick price series generation.
//!
//! Builds the ordered sequence the renderer consumes: one spot price per
//! tick over `half_life * half_lives` ticks. Pure function of the
//! parameters; no memoization, no shared state.

use bondcast_core::constants::WAD;
use bondcast_core::error::CurveError;
use bondcast_core::params::CurveParams;

use crate::price::spot_price;

/// Sample the wad spot price once per tick for `half_lives` half-lives.
///
/// Tick `i` samples at `base_elapsed + i`, for `i` in
/// `0..half_life * half_lives`. Validates `params` up front, so a
/// malformed parameter set fails before any sampling.
///
/// # Examples
///
/// ```
/// use bondcast_core::constants::WAD;
/// use bondcast_core::params::CurveParams;
/// use bondcast_curve::price_series;
///
/// let params = CurveParams {
///     available_debt: 50 * WAD,
///     virtual_input: 100 * WAD,
///     virtual_output: 50 * WAD,
///     half_life: 1,
///     level_bips: 9_000,
/// };
/// let prices = price_series(&params, 0, 7).unwrap();
/// assert_eq!(prices.len(), 7);
/// assert_eq!(prices[0], WAD);
/// ```
pub fn price_series(
    params: &CurveParams,
    base_elapsed: u64,
    half_lives: u64,
) -> Result<Vec<u128>, CurveError> {
    params.validate()?;

    let ticks = params
        .half_life
        .checked_mul(half_lives)
        .ok_or(CurveError::ArithmeticOverflow)?;

    let mut prices = Vec::with_capacity(ticks as usize);
    for i in 0..ticks {
        let elapsed = base_elapsed
            .checked_add(i)
            .ok_or(CurveError::ArithmeticOverflow)?;
        prices.push(spot_price(
            params.available_debt,
            params.virtual_input,
            params.virtual_output,
            elapsed,
            params.half_life,
            params.level_bips,
        )?);
    }
    Ok(prices)
}

/// Convert a wad price to a display decimal.
///
/// For rendering only; the load-bearing path never touches floats.
pub fn to_display(wad_price: u128) -> f64 {
    wad_price as f64 / WAD as f64
}
