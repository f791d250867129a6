// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the tick interval as a humantime string
pub const TIMEOUT_ENV: &str = "HELI_TIMEOUT";

/// Configuration for an engine instance
///
/// In TOML:
///
/// ```toml
/// timeout = "100ms"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Interval between synthetic ticks. Zero disables ticking.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Duration,
}

impl EngineConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::with_timeout(Duration::from_millis(millis))
    }

    /// Whether the timer feeder should run
    pub fn ticking_enabled(&self) -> bool {
        !self.timeout.is_zero()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read the tick interval from [`TIMEOUT_ENV`], ticking disabled when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(TIMEOUT_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        let timeout =
            humantime::parse_duration(value).map_err(|source| ConfigError::InvalidDuration {
                var: TIMEOUT_ENV.to_string(),
                value: value.to_string(),
                source,
            })?;
        Ok(Self::with_timeout(timeout))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
