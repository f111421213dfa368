//! Layered configuration for indicator parameters.
//!
//! Sources are merged in order: built-in defaults, an optional TOML file, then
//! environment variables such as `FINLIB__MACD__FAST=5`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File, FileFormat};
use finlib_indicators::{MacdParams, MovingAverageParams, RsiParams, WilliamsRParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "FINLIB";
const ENV_SEPARATOR: &str = "__";

/// Effective parameters for every indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub moving_average: MovingAverageParams,
    pub macd: MacdParams,
    pub rsi: RsiParams,
    pub williams_r: WilliamsRParams,
}

impl IndicatorConfig {
    /// Rejects zero-length windows. A fast MACD window that is not shorter than
    /// the slow one is only logged.
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("moving_average.period", self.moving_average.period),
            ("macd.slow", self.macd.slow),
            ("macd.fast", self.macd.fast),
            ("macd.signal", self.macd.signal),
            ("rsi.period", self.rsi.period),
            ("williams_r.period", self.williams_r.period),
        ];
        for (key, period) in periods {
            if period == 0 {
                bail!("{key} must be greater than zero");
            }
        }
        if self.macd.fast >= self.macd.slow {
            warn!(
                fast = self.macd.fast,
                slow = self.macd.slow,
                "MACD fast window is not shorter than the slow window"
            );
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to render indicator configuration as TOML")
    }
}

/// Loads the configuration from defaults, `path` (if it exists) and the process environment.
pub fn load_config(path: Option<&Path>) -> Result<IndicatorConfig> {
    load_with_environment(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_with_environment(path: Option<&Path>, env: Environment) -> Result<IndicatorConfig> {
    let defaults = Config::try_from(&IndicatorConfig::default())
        .context("failed to serialize default indicator configuration")?;
    let mut builder = Config::builder().add_source(defaults);

    if let Some(path) = path {
        if path.exists() {
            debug!(path = %path.display(), "loading indicator configuration file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        } else {
            warn!(
                path = %path.display(),
                "indicator configuration file not found; using defaults"
            );
        }
    }

    let config: IndicatorConfig = builder
        .add_source(env)
        .build()
        .context("failed to build indicator configuration")?
        .try_deserialize()
        .context("failed to deserialize indicator configuration")?;
    config.validate()?;
    Ok(config)
}
