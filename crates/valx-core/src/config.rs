//! Valuation configuration.
//!
//! Default assumptions: WACC 10%, perpetual growth 3%, 1,000,000 shares.
//! Default input limits: WACC 1%..30%, growth 0%..10%, at least 1,000 shares.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, ValidationError, ValuationAssumptions};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionDefaults {
    pub discount_rate: f64,
    pub growth_rate: f64,
    pub share_count: u64,
}

impl Default for AssumptionDefaults {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            growth_rate: 0.03,
            share_count: 1_000_000,
        }
    }
}

/// Accepted ranges for user-supplied assumptions.
///
/// These ranges alone do not guarantee `discount_rate > growth_rate`; that
/// is enforced by [`ValuationAssumptions::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_discount_rate: f64,
    pub max_discount_rate: f64,
    pub min_growth_rate: f64,
    pub max_growth_rate: f64,
    pub min_share_count: u64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_discount_rate: 0.01,
            max_discount_rate: 0.30,
            min_growth_rate: 0.0,
            max_growth_rate: 0.10,
            min_share_count: 1_000,
        }
    }
}

impl InputLimits {
    pub fn check(
        &self,
        discount_rate: f64,
        growth_rate: f64,
        share_count: u64,
    ) -> Result<(), ValidationError> {
        check_range(
            "discount_rate",
            discount_rate,
            self.min_discount_rate,
            self.max_discount_rate,
        )?;
        check_range(
            "growth_rate",
            growth_rate,
            self.min_growth_rate,
            self.max_growth_rate,
        )?;

        if share_count < self.min_share_count {
            return Err(ValidationError::ShareCountBelowMinimum {
                value: share_count,
                min: self.min_share_count,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub defaults: AssumptionDefaults,
    pub limits: InputLimits,
}

impl ValuationConfig {
    /// Loads a JSON config file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str::<Self>(&content).map_err(|source| {
            CoreError::MalformedInput {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded valuation config");
        Ok(config)
    }

    /// Applies overrides on top of the defaults, checks the input limits and
    /// builds validated assumptions.
    pub fn assumptions(
        &self,
        discount_rate: Option<f64>,
        growth_rate: Option<f64>,
        share_count: Option<u64>,
    ) -> Result<ValuationAssumptions, ValidationError> {
        let discount_rate = discount_rate.unwrap_or(self.defaults.discount_rate);
        let growth_rate = growth_rate.unwrap_or(self.defaults.growth_rate);
        let share_count = share_count.unwrap_or(self.defaults.share_count);

        self.limits.check(discount_rate, growth_rate, share_count)?;
        ValuationAssumptions::new(discount_rate, growth_rate, share_count)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }

    if value < min || value > max {
        return Err(ValidationError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }

    Ok(())
}
