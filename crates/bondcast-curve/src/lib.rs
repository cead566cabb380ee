//! # bondcast-curve — Decaying bonding-curve price math.
//!
//! All calculations use integer arithmetic only for determinism; results
//! match the deployed on-chain reference contract bit-for-bit.
//!
//! This crate implements the spot-price model for a bond whose price decays
//! toward a floor:
//! - **Decay kernel**: `virtual_input` halves once per complete half-life
//!   via right shift, with a linear interpolation of the fractional period.
//! - **Level blend**: the decayed value is pulled back toward
//!   `virtual_input * level_bips / 10000`, the asymptotic floor.
//! - **Price sampling**: spot price is the wad-scaled ratio of the decayed
//!   input to `available_debt + virtual_output`, sampled once per tick.

pub mod decay;
pub mod forecast;
pub mod price;

pub use decay::exponential_to_level;
pub use forecast::price_series;
pub use price::spot_price;
