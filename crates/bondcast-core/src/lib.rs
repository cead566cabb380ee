//! # bondcast-core
//! Foundation types, constants, and errors for the bondcast forecaster.

pub mod constants;
pub mod error;
pub mod params;
