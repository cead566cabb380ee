//! Immutable parameter set for one forecast run.

use serde::{Deserialize, Serialize};

use crate::constants::BPS_PRECISION;
use crate::error::CurveError;

/// Parameters of a single decaying bonding curve.
///
/// All reserve quantities are wad fixed-point (`u128`, 1 unit = 10^18).
/// `half_life` counts discrete time ticks; `level_bips` is the asymptotic
/// decay target expressed as basis points of `virtual_input`.
///
/// Parameters are immutable once constructed; callers validate with
/// [`CurveParams::validate`] before sampling (fail-fast at the boundary).
///
/// # Examples
///
/// ```
/// use bondcast_core::constants::WAD;
/// use bondcast_core::params::CurveParams;
///
/// let params = CurveParams {
///     available_debt: 50 * WAD,
///     virtual_input: 100 * WAD,
///     virtual_output: 50 * WAD,
///     half_life: 1,
///     level_bips: 9_000,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Outstanding claim amount, part of the price denominator (wad).
    pub available_debt: u128,
    /// Notional input-side reserve that decays over time (wad).
    pub virtual_input: u128,
    /// Notional output-side reserve, part of the price denominator (wad).
    pub virtual_output: u128,
    /// Ticks per halving of the excess above the level target. Must be > 0.
    pub half_life: u64,
    /// Asymptotic target as basis points of `virtual_input`, in [0, 10000].
    pub level_bips: u64,
}

impl CurveParams {
    /// Check the preconditions the sampler relies on.
    ///
    /// Rejects `half_life == 0` (division by zero in the kernel),
    /// `level_bips > 10000` (would push the decayed value above
    /// `virtual_input`), and a zero price denominator.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.half_life == 0 {
            return Err(CurveError::ZeroHalfLife);
        }
        if self.level_bips > BPS_PRECISION {
            return Err(CurveError::LevelBipsOutOfRange(self.level_bips));
        }
        let denominator = self
            .available_debt
            .checked_add(self.virtual_output)
            .ok_or(CurveError::ArithmeticOverflow)?;
        if denominator == 0 {
            return Err(CurveError::ZeroDenominator);
        }
        Ok(())
    }
}
