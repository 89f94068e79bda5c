use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{EngineError, Result};

/// largest scale a 96-bit decimal can represent
const MAX_SCALE: u32 = 28;

/// engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// rounding applied when a month-based term yields a fractional payment count
    pub term_rounding: TermRounding,
    /// decimal places used by display helpers
    pub display_scale: u32,
}

/// rounding mode for deriving a payment count from a month-based term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TermRounding {
    /// round half to even (banker's rounding)
    #[default]
    HalfEven,
    /// round half away from zero
    HalfUp,
    /// truncate
    Down,
    /// any fraction adds a payment
    Up,
}

impl TermRounding {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            TermRounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            TermRounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            TermRounding::Down => RoundingStrategy::ToZero,
            TermRounding::Up => RoundingStrategy::AwayFromZero,
        }
    }

    /// round to a whole number using this mode
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(0, self.strategy())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            term_rounding: TermRounding::HalfEven,
            display_scale: 2,
        }
    }
}

impl EngineConfig {
    /// configuration with a specific term rounding mode
    pub fn with_term_rounding(term_rounding: TermRounding) -> Self {
        Self {
            term_rounding,
            ..Self::default()
        }
    }

    /// parse a json configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| {
            EngineError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_scale > MAX_SCALE {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "display scale {} exceeds maximum of {}",
                    self.display_scale, MAX_SCALE
                ),
            });
        }
        Ok(())
    }

    /// round a monetary amount to the configured display scale
    pub fn round_for_display(&self, amount: Money) -> Money {
        amount.round_dp(self.display_scale)
    }
}
