use serde::{Deserialize, Serialize};
use time::Duration;

use crate::ValidationError;

/// Trailing window used for the volume weighted stock price.
pub const DEFAULT_VWSP_WINDOW_MINUTES: u32 = 15;

/// Tunables for a [`crate::Market`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub vwsp_window_minutes: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            vwsp_window_minutes: DEFAULT_VWSP_WINDOW_MINUTES,
        }
    }
}

impl MarketConfig {
    pub fn with_window_minutes(minutes: u32) -> Result<Self, ValidationError> {
        let config = Self {
            vwsp_window_minutes: minutes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.vwsp_window_minutes == 0 {
            return Err(ValidationError::NonPositiveValue {
                field: "vwsp_window_minutes",
            });
        }

        Ok(())
    }

    pub fn vwsp_window(&self) -> Duration {
        Duration::minutes(i64::from(self.vwsp_window_minutes))
    }
}
