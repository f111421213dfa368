//! Williams %R placeholder.

use ndarray::{ArrayView1, AsArray};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{IndicatorError, IndicatorResult, Series};

const INDICATOR: &str = "Williams %R";

/// Williams %R over `period` samples.
///
/// No computation is defined for this indicator; every call fails with
/// [`IndicatorError::NotImplemented`] and never yields a series.
pub fn williams_r<'a, V>(x: V, period: usize) -> IndicatorResult<Series>
where
    V: AsArray<'a, f64>,
{
    let x: ArrayView1<'a, f64> = x.into();
    debug!(period, len = x.len(), "Williams %R requested but not implemented");
    Err(IndicatorError::NotImplemented(INDICATOR))
}

/// Parameters for [`williams_r`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WilliamsRParams {
    /// Lookback period.
    pub period: usize,
}

impl Default for WilliamsRParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl WilliamsRParams {
    /// Runs [`williams_r`] over `x` with these parameters.
    pub fn compute<'a, V>(&self, x: V) -> IndicatorResult<Series>
    where
        V: AsArray<'a, f64>,
    {
        williams_r(x, self.period)
    }
}
