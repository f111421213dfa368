//! Shared series type, input conversion, and the crate error.

use ndarray::Array1;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// One-dimensional price (or derived) series consumed and produced by every indicator.
pub type Series = Array1<f64>;

/// Result alias used by indicator operations.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// Failure variants surfaced by indicator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// The requested window length is zero.
    #[error("{indicator} period must be greater than zero (got {period})")]
    InvalidPeriod {
        /// Indicator that rejected the period.
        indicator: &'static str,
        /// Offending period.
        period: usize,
    },
    /// The series is too short for the requested window.
    #[error("{indicator} with period {period} needs more than {period} samples (got {len})")]
    InsufficientData {
        /// Indicator that rejected the series.
        indicator: &'static str,
        /// Requested window length.
        period: usize,
        /// Length of the supplied series.
        len: usize,
    },
    /// A textual averaging tag did not name a known kind.
    #[error("unknown moving average kind `{0}` (expected `simple`, `exp` or `exponential`)")]
    UnknownAverageKind(String),
    /// The indicator has no computation behind it.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl IndicatorError {
    /// Builds an [`IndicatorError::InvalidPeriod`].
    pub fn invalid_period(indicator: &'static str, period: usize) -> Self {
        Self::InvalidPeriod { indicator, period }
    }

    /// Builds an [`IndicatorError::InsufficientData`].
    pub fn insufficient_data(indicator: &'static str, period: usize, len: usize) -> Self {
        Self::InsufficientData {
            indicator,
            period,
            len,
        }
    }
}

/// Sample types that can be read as a floating-point price.
pub trait Input {
    /// Returns the sample as `f64`. Values outside the `f64` range become NaN.
    fn value(&self) -> f64;
}

impl Input for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl Input for f32 {
    fn value(&self) -> f64 {
        f64::from(*self)
    }
}

impl Input for Decimal {
    fn value(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_integer_input {
    ($($ty:ty),*) => {
        $(
            impl Input for $ty {
                fn value(&self) -> f64 {
                    self.to_f64().unwrap_or(f64::NAN)
                }
            }
        )*
    };
}

impl_integer_input!(i32, i64, u32, u64, usize);

impl<T> Input for &T
where
    T: Input + ?Sized,
{
    fn value(&self) -> f64 {
        (**self).value()
    }
}

/// Collects a slice of samples into a [`Series`].
pub fn to_series<I>(values: &[I]) -> Series
where
    I: Input,
{
    values.iter().map(Input::value).collect()
}
