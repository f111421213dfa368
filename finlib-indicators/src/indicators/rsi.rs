//! Relative Strength Index (RSI).

use ndarray::{s, Array1, ArrayView1, AsArray};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{IndicatorError, IndicatorResult, Series};
use crate::kernel::diff;

const INDICATOR: &str = "RSI";

/// Computes the `n` period RSI of `prices`, one value per price.
///
/// The seed averages use the first `n + 1` price changes divided by `n`, with
/// zero changes counted as gains. The first `n` outputs all hold the seed RSI.
///
/// After seeding, only non-positive changes update the running averages and
/// write an output. A strictly positive change leaves that position at `0.0`
/// and the averages untouched. Callers relying on this series must account
/// for those zeros.
///
/// A seed window without losses divides by zero: the seed RSI is `100` when
/// there were gains and NaN when every change was zero.
pub fn relative_strength<'a, V>(prices: V, n: usize) -> IndicatorResult<Series>
where
    V: AsArray<'a, f64>,
{
    let prices: ArrayView1<'a, f64> = prices.into();
    if n == 0 {
        return Err(IndicatorError::invalid_period(INDICATOR, n));
    }

    let len = prices.len();
    let deltas = diff(prices);
    let seed = deltas.slice(s![..deltas.len().min(n + 1)]);
    let divisor = n as f64;
    let decay = (n - 1) as f64;

    let mut up = seed
        .iter()
        .filter(|delta| **delta >= 0.0)
        .fold(0.0_f64, |acc, delta| acc + delta)
        / divisor;
    let mut down = -seed
        .iter()
        .filter(|delta| **delta < 0.0)
        .fold(0.0_f64, |acc, delta| acc + delta)
        / divisor;
    let mut rs = up / down;
    if !rs.is_finite() {
        debug!(up, down, period = n, "RSI seed window has no losses");
    }

    let mut rsi = Array1::zeros(len);
    rsi.slice_mut(s![..len.min(n)]).fill(oscillator(rs));

    let mut skipped = 0usize;
    for i in n..len {
        let delta = deltas[i - 1];
        if delta > 0.0 {
            skipped += 1;
            continue;
        }
        let gain = 0.0;
        let loss = -delta;
        up = (up * decay + gain) / divisor;
        down = (down * decay + loss) / divisor;
        rs = up / down;
        rsi[i] = oscillator(rs);
    }

    if skipped > 0 {
        debug!(skipped, period = n, "RSI left positive-change samples at zero");
    }
    trace!(period = n, len, "computed RSI");
    Ok(rsi)
}

fn oscillator(rs: f64) -> f64 {
    100.0 - 100.0 / (1.0 + rs)
}

/// Parameters for [`relative_strength`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiParams {
    /// Lookback period.
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiParams {
    /// Runs [`relative_strength`] over `prices` with these parameters.
    pub fn compute<'a, V>(&self, prices: V) -> IndicatorResult<Series>
    where
        V: AsArray<'a, f64>,
    {
        relative_strength(prices, self.period)
    }
}
