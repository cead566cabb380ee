//! Protocol constants. All monetary values in wad fixed-point (1 unit = 10^18).

/// One whole unit in wad fixed-point, matching 18-decimal token accounting.
///
/// Kept as an exact integer constant. Scaling through a float literal
/// (`1e18`) loses precision once reserves exceed 2^53.
///
/// # Examples
///
/// ```
/// use bondcast_core::constants::WAD;
/// assert_eq!(WAD, 1_000_000_000_000_000_000);
/// assert_eq!(50 * WAD, 50_000_000_000_000_000_000);
/// ```
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Basis-point denominator: 10_000 bips = 100%.
///
/// # Examples
///
/// ```
/// use bondcast_core::constants::BPS_PRECISION;
/// // 9000 bips = 90% of the starting virtual input.
/// assert_eq!(9_000 * 100 / BPS_PRECISION, 90);
/// ```
pub const BPS_PRECISION: u64 = 10_000;
