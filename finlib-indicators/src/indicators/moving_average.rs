//! Windowed simple or exponential moving average.

use ndarray::{s, ArrayView1, AsArray};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{IndicatorError, IndicatorResult, Series};
use crate::kernel::{convolve_head, weights, AverageKind};

const INDICATOR: &str = "MovingAverage";

/// Computes an `n` period moving average of `x`.
///
/// The output has the same length as `x`. Position `i >= n - 1` holds the
/// weighted sum of `x[i - n + 1..=i]`; the first `n` positions are all set to
/// the value at position `n`, the first one computed from a settled window.
/// Requires `1 <= n < x.len()`.
pub fn moving_average<'a, V>(x: V, n: usize, kind: AverageKind) -> IndicatorResult<Series>
where
    V: AsArray<'a, f64>,
{
    let x: ArrayView1<'a, f64> = x.into();
    if n == 0 {
        return Err(IndicatorError::invalid_period(INDICATOR, n));
    }
    if x.len() <= n {
        return Err(IndicatorError::insufficient_data(INDICATOR, n, x.len()));
    }

    let kernel = weights(n, kind);
    let mut averaged = convolve_head(x, kernel.view());
    let settled = averaged[n];
    averaged.slice_mut(s![..n]).fill(settled);

    trace!(period = n, kind = %kind, len = x.len(), "computed moving average");
    Ok(averaged)
}

/// Parameters for [`moving_average`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverageParams {
    /// Window length.
    pub period: usize,
    /// Weighting across the window.
    pub kind: AverageKind,
}

impl Default for MovingAverageParams {
    fn default() -> Self {
        Self {
            period: 20,
            kind: AverageKind::Simple,
        }
    }
}

impl MovingAverageParams {
    /// Runs [`moving_average`] over `x` with these parameters.
    pub fn apply<'a, V>(&self, x: V) -> IndicatorResult<Series>
    where
        V: AsArray<'a, f64>,
    {
        moving_average(x, self.period, self.kind)
    }
}
