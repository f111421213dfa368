//! Moving Average Convergence Divergence indicator implementation.

use ndarray::{ArrayView1, AsArray};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{IndicatorResult, Series};
use crate::indicators::moving_average::moving_average;
use crate::kernel::AverageKind;

/// MACD output (line, histogram, and signal line), each as long as the input.
#[derive(Clone, Debug, PartialEq)]
pub struct MacdOutput {
    /// MACD line (fast average minus slow average).
    pub macd: Series,
    /// Histogram representing the distance between MACD and signal lines.
    pub histogram: Series,
    /// Signal line (average of the MACD line).
    pub signal: Series,
}

impl MacdOutput {
    /// Splits the output into `(macd, histogram, signal)`.
    pub fn into_parts(self) -> (Series, Series, Series) {
        (self.macd, self.histogram, self.signal)
    }
}

/// Computes MACD from exponential moving averages of `x`.
///
/// Window ordering is not checked; `n_fast < n_slow` is only a convention.
/// Every window must leave at least one settled sample, see
/// [`moving_average`].
pub fn macd<'a, V>(
    x: V,
    n_slow: usize,
    n_fast: usize,
    n_sig: usize,
) -> IndicatorResult<MacdOutput>
where
    V: AsArray<'a, f64>,
{
    let x: ArrayView1<'a, f64> = x.into();
    let fast = moving_average(x, n_fast, AverageKind::Exponential)?;
    let slow = moving_average(x, n_slow, AverageKind::Exponential)?;
    let line = fast - slow;
    let signal = moving_average(&line, n_sig, AverageKind::Exponential)?;
    let histogram = &line - &signal;

    trace!(n_slow, n_fast, n_sig, len = x.len(), "computed MACD");
    Ok(MacdOutput {
        macd: line,
        histogram,
        signal,
    })
}

/// Parameters for [`macd`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    /// Slow average window.
    pub slow: usize,
    /// Fast average window.
    pub fast: usize,
    /// Signal line window.
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            slow: 26,
            fast: 12,
            signal: 9,
        }
    }
}

impl MacdParams {
    /// Runs [`macd`] over `x` with these parameters.
    pub fn compute<'a, V>(&self, x: V) -> IndicatorResult<MacdOutput>
    where
        V: AsArray<'a, f64>,
    {
        macd(x, self.slow, self.fast, self.signal)
    }
}
