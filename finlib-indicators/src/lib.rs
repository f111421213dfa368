#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//! Vectorised technical indicators over in-memory `f64` price series.

/// Foundational types, input conversion, and the error type.
pub mod core;
/// Built-in indicator implementations.
pub mod indicators;
/// Weight kernels and series primitives shared by the indicators.
pub mod kernel;

/// Re-export of the core types to make the crate easy to consume.
pub use crate::core::{to_series, IndicatorError, IndicatorResult, Input, Series};
/// Re-export of the indicator entry points and their parameter sets.
pub use crate::indicators::{
    macd, moving_average, relative_strength, williams_r, MacdOutput, MacdParams,
    MovingAverageParams, RsiParams, WilliamsRParams,
};
/// Re-export of the averaging kind selector.
pub use crate::kernel::AverageKind;
