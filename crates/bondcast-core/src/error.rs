//! Error types for the bondcast forecaster.
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    #[error("half-life must be positive")] ZeroHalfLife,
    #[error("available debt + virtual output must be positive")] ZeroDenominator,
    #[error("level out of range: {0} bips > 10000")] LevelBipsOutOfRange(u64),
    #[error("arithmetic overflow")] ArithmeticOverflow,
}
