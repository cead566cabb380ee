//! Exponential-to-level decay kernel.
//!
//! Integer-only approximation of
//! `x * (level + (1 - level) * 2^(-elapsed / half_life))` where
//! `level = level_bips / 10000`. Whole half-lives are applied as right
//! shifts; the fractional period is linearly interpolated. The operation
//! order (shift, then truncating divide, then shift) reproduces the
//! on-chain reference contract exactly.

use bondcast_core::constants::BPS_PRECISION;
use bondcast_core::error::CurveError;

/// Decay `x` toward `x * level_bips / 10000` over `elapsed` ticks.
///
/// The excess above the level target halves once per `half_life` ticks.
/// Between halving boundaries the curve is linearly interpolated: the
/// fractional period removes `z * rem / half_life / 2`, roughly half of
/// the next full shift's effect. The interpolation overshoots the true
/// exponential by at most ~6.2% of the current value (see the accuracy
/// test below).
///
/// Guarantees `0 <= result <= x` for valid inputs, and `result == x` at
/// `elapsed == 0`.
///
/// # Errors
///
/// - [`CurveError::ZeroHalfLife`] if `half_life == 0`.
/// - [`CurveError::LevelBipsOutOfRange`] if `level_bips > 10000`; such
///   values would push the result above `x`.
/// - [`CurveError::ArithmeticOverflow`] if an intermediate product
///   exceeds `u128`.
///
/// # Examples
///
/// ```
/// use bondcast_core::constants::WAD;
/// use bondcast_curve::exponential_to_level;
///
/// // No time elapsed: no decay, for any level.
/// let x = 100 * WAD;
/// assert_eq!(exponential_to_level(x, 0, 1, 9_000).unwrap(), x);
///
/// // One full half-life at level 0: exactly half remains.
/// assert_eq!(exponential_to_level(x, 1, 1, 0).unwrap(), x / 2);
/// ```
pub fn exponential_to_level(
    x: u128,
    elapsed: u64,
    half_life: u64,
    level_bips: u64,
) -> Result<u128, CurveError> {
    if half_life == 0 {
        return Err(CurveError::ZeroHalfLife);
    }
    if level_bips > BPS_PRECISION {
        return Err(CurveError::LevelBipsOutOfRange(level_bips));
    }

    // Whole half-lives: halve once per complete period via right shift.
    // A shift count past the width of u128 means everything has decayed.
    let whole_periods = elapsed / half_life;
    let mut z = if whole_periods >= u128::BITS as u64 {
        0
    } else {
        x >> whole_periods
    };

    // Fractional period: remove z * rem / half_life / 2, truncating the
    // division before the final halving shift (reference contract order).
    let rem = (elapsed % half_life) as u128;
    let slope = z
        .checked_mul(rem)
        .ok_or(CurveError::ArithmeticOverflow)?
        / half_life as u128;
    z -= slope >> 1;

    // Blend back toward the level floor. level_bips <= 10000 and z <= x,
    // so the lift never exceeds x - z.
    let lift = (x - z)
        .checked_mul(level_bips as u128)
        .ok_or(CurveError::ArithmeticOverflow)?
        / BPS_PRECISION as u128;
    Ok(z + lift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondcast_core::constants::WAD;
    use proptest::prelude::*;

    #[test]
    fn zero_elapsed_is_identity() {
        let x = 100 * WAD;
        for level_bips in [0, 1, 5_000, 9_000, 10_000] {
            assert_eq!(
                exponential_to_level(x, 0, 1, level_bips).unwrap(),
                x,
                "no decay expected at elapsed=0, level={level_bips}"
            );
        }
    }

    #[test]
    fn concrete_reference_value() {
        // Matches the reference contract: 100e18 in, zero elapsed, out unchanged.
        assert_eq!(
            exponential_to_level(100_000_000_000_000_000_000, 0, 1, 9_000).unwrap(),
            100_000_000_000_000_000_000
        );
    }

    #[test]
    fn whole_half_lives_shift() {
        let x = 64 * WAD;
        assert_eq!(exponential_to_level(x, 1, 1, 0).unwrap(), 32 * WAD);
        assert_eq!(exponential_to_level(x, 2, 1, 0).unwrap(), 16 * WAD);
        assert_eq!(exponential_to_level(x, 6, 1, 0).unwrap(), WAD);
        // Same elapsed/half_life ratio, longer period.
        assert_eq!(exponential_to_level(x, 300, 100, 0).unwrap(), 8 * WAD);
    }

    #[test]
    fn fractional_period_interpolates() {
        // Half a period at level 0 removes a quarter:
        // z = x, slope = x * 1 / 2 = x/2, z -= x/2 >> 1 = x/4.
        let x = 100 * WAD;
        assert_eq!(exponential_to_level(x, 1, 2, 0).unwrap(), 75 * WAD);
    }

    #[test]
    fn level_blend_exact() {
        // One half-life at 9000 bips: 50 + (100 - 50) * 0.9 = 95.
        let x = 100 * WAD;
        assert_eq!(exponential_to_level(x, 1, 1, 9_000).unwrap(), 95 * WAD);
        // Two half-lives: 25 + 75 * 0.9 = 92.5.
        assert_eq!(
            exponential_to_level(x, 2, 1, 9_000).unwrap(),
            92 * WAD + WAD / 2
        );
    }

    #[test]
    fn full_level_pins_to_x() {
        let x = 123_456_789 * WAD;
        for elapsed in [0, 1, 7, 100, 100_000] {
            assert_eq!(exponential_to_level(x, elapsed, 3, 10_000).unwrap(), x);
        }
    }

    #[test]
    fn converges_to_level_floor() {
        let x = 100 * WAD;
        let floor = 90 * WAD; // 9000 bips of x
        // 200 half-lives: the excess has shifted away entirely.
        assert_eq!(exponential_to_level(x, 200, 1, 9_000).unwrap(), floor);
    }

    #[test]
    fn shift_saturates_past_u128_width() {
        // 130 whole half-lives would be a shift of 130 >= 128; the decayed
        // part is exactly the level floor.
        let x = 100 * WAD;
        assert_eq!(exponential_to_level(x, 130, 1, 0).unwrap(), 0);
        assert_eq!(exponential_to_level(x, 13_000, 100, 9_000).unwrap(), 90 * WAD);
        assert_eq!(exponential_to_level(u128::MAX, u64::MAX, 1, 0).unwrap(), 0);
    }

    #[test]
    fn zero_half_life_rejected() {
        assert_eq!(
            exponential_to_level(WAD, 0, 0, 9_000),
            Err(CurveError::ZeroHalfLife)
        );
    }

    #[test]
    fn level_out_of_range_rejected() {
        assert_eq!(
            exponential_to_level(WAD, 1, 1, 10_001),
            Err(CurveError::LevelBipsOutOfRange(10_001))
        );
    }

    #[test]
    fn interpolation_overflow_surfaces() {
        // z * rem overflows u128 for a near-max x with a large remainder.
        let result = exponential_to_level(u128::MAX, u64::MAX - 1, u64::MAX, 0);
        assert_eq!(result, Err(CurveError::ArithmeticOverflow));
    }

    #[test]
    fn zero_input_stays_zero() {
        for elapsed in [0, 1, 50, 10_000] {
            assert_eq!(exponential_to_level(0, elapsed, 7, 9_000).unwrap(), 0);
        }
    }

    #[test]
    fn sampled_sequence_non_increasing() {
        let x = 1_000_000 * WAD;
        let half_life = 360;
        let mut prev = x;
        for elapsed in 0..(10 * half_life) {
            let z = exponential_to_level(x, elapsed, half_life, 4_000).unwrap();
            assert!(z <= prev, "decay increased at elapsed {elapsed}: {z} > {prev}");
            prev = z;
        }
    }

    #[test]
    fn interpolation_tracks_continuous_exponential() {
        // The fractional-period correction is a linear shortcut; its worst
        // case against 2^(-t) is (1 - f/2) * 2^f at f ≈ 0.557, about +6.2%.
        let x = 1_000_000 * WAD;
        let half_life = 100u64;
        for elapsed in 0..=(4 * half_life) {
            let got = exponential_to_level(x, elapsed, half_life, 0).unwrap() as f64;
            let want = x as f64 * (0.5f64).powf(elapsed as f64 / half_life as f64);
            let rel = (got - want) / want;
            assert!(
                (-1e-9..0.0625).contains(&rel),
                "elapsed {elapsed}: relative deviation {rel}"
            );
        }
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn result_bounded_by_input(
            x in 0u128..=u128::MAX / 100_000,
            elapsed in 0u64..=1_000_000,
            half_life in 1u64..=100_000,
            level_bips in 0u64..=10_000,
        ) {
            let z = exponential_to_level(x, elapsed, half_life, level_bips).unwrap();
            prop_assert!(z <= x, "decayed {} above input {}", z, x);
        }

        #[test]
        fn monotonic_in_elapsed(
            x in 1u128..=u128::MAX / 100_000,
            a in 0u64..=1_000_000,
            b in 0u64..=1_000_000,
            half_life in 1u64..=100_000,
            level_bips in 0u64..10_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let z_lo = exponential_to_level(x, lo, half_life, level_bips).unwrap();
            let z_hi = exponential_to_level(x, hi, half_life, level_bips).unwrap();
            prop_assert!(
                z_hi <= z_lo,
                "not non-increasing: f({}) = {} > f({}) = {}",
                hi, z_hi, lo, z_lo
            );
        }

        #[test]
        fn bounded_below_by_level_floor(
            x in 0u128..=u128::MAX / 100_000,
            elapsed in 0u64..=1_000_000,
            half_life in 1u64..=100_000,
            level_bips in 0u64..=10_000,
        ) {
            let z = exponential_to_level(x, elapsed, half_life, level_bips).unwrap();
            let floor = x * level_bips as u128 / 10_000;
            // Truncation in the blend can land at most one unit under the floor.
            prop_assert!(z + 1 >= floor, "decayed {} under floor {}", z, floor);
        }

        #[test]
        fn asymptote_reaches_level(
            x in 0u128..=u128::MAX / 100_000,
            half_life in 1u64..=1_000,
            level_bips in 0u64..=10_000,
        ) {
            // 128 whole half-lives shift away the entire excess.
            let elapsed = half_life * 128;
            let z = exponential_to_level(x, elapsed, half_life, level_bips).unwrap();
            prop_assert_eq!(z, x * level_bips as u128 / 10_000);
        }

        #[test]
        fn zero_elapsed_identity_prop(
            x in 0u128..=u128::MAX / 100_000,
            half_life in 1u64..=100_000,
            level_bips in 0u64..=10_000,
        ) {
            prop_assert_eq!(
                exponential_to_level(x, 0, half_life, level_bips).unwrap(),
                x
            );
        }
    }
}
