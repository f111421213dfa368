//! Built-in indicator implementations provided by the crate.

pub mod macd;
pub mod moving_average;
pub mod rsi;
pub mod williams_r;

pub use macd::{macd, MacdOutput, MacdParams};
pub use moving_average::{moving_average, MovingAverageParams};
pub use rsi::{relative_strength, RsiParams};
pub use williams_r::{williams_r, WilliamsRParams};
