//! Weight kernels and the convolution/difference primitives indicators are built from.

use std::fmt;
use std::str::FromStr;

use ndarray::{s, Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::core::{IndicatorError, Series};

/// Weighting applied across a moving-average window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageKind {
    /// Every sample in the window carries weight `1/n`.
    #[default]
    Simple,
    /// Weights follow `exp(linspace(-1, 0, n))`, normalised to sum to one.
    #[serde(alias = "exp")]
    Exponential,
}

impl AverageKind {
    /// Canonical tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Exponential => "exponential",
        }
    }
}

impl fmt::Display for AverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AverageKind {
    type Err = IndicatorError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "simple" => Ok(Self::Simple),
            "exp" | "exponential" => Ok(Self::Exponential),
            other => Err(IndicatorError::UnknownAverageKind(other.to_string())),
        }
    }
}

/// Builds the normalised weight vector of length `n` for `kind`.
pub fn weights(n: usize, kind: AverageKind) -> Series {
    let mut kernel = match kind {
        AverageKind::Simple => Array1::ones(n),
        AverageKind::Exponential => Array1::linspace(-1.0, 0.0, n).mapv(f64::exp),
    };
    let total = kernel.sum();
    kernel.mapv_inplace(|weight| weight / total);
    kernel
}

/// Returns the first `x.len()` samples of the full linear convolution of `x` with `kernel`.
///
/// `out[i] = Σ kernel[k] * x[i - k]` over every `k` with `i - k >= 0`, so the
/// leading `kernel.len() - 1` outputs are partial sums rather than averages.
pub fn convolve_head(x: ArrayView1<'_, f64>, kernel: ArrayView1<'_, f64>) -> Series {
    Array1::from_shape_fn(x.len(), |i| {
        let taps = kernel.len().min(i + 1);
        (0..taps).fold(0.0, |acc, k| acc + kernel[k] * x[i - k])
    })
}

/// First differences `x[i + 1] - x[i]`; empty when fewer than two samples are supplied.
pub fn diff(x: ArrayView1<'_, f64>) -> Series {
    if x.len() < 2 {
        return Array1::zeros(0);
    }
    &x.slice(s![1..]) - &x.slice(s![..-1])
}
