//! Discounted cash flow valuation.
//!
//! Each period's free cash flow is discounted at the discount rate, and a
//! Gordon-growth terminal value is taken on the last period's flow:
//!
//! ```text
//! PV[t]  = FCL[t] / (1 + r)^t
//! TV     = FCL[N] * (1 + g) / (r - g)
//! EV     = sum(PV) + TV / (1 + r)^N
//! Equity = EV
//! ```
//!
//! Equity equals enterprise value because net debt is taken as zero.

use serde::Serialize;

use crate::{FreeCashFlowSchedule, ValidationError};

/// Discount rate, perpetual growth rate and share count.
///
/// Only constructible through [`ValuationAssumptions::new`], so every value
/// satisfies `0 <= growth_rate < discount_rate < 1` with a positive share
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationAssumptions {
    discount_rate: f64,
    growth_rate: f64,
    share_count: u64,
}

impl ValuationAssumptions {
    pub fn new(
        discount_rate: f64,
        growth_rate: f64,
        share_count: u64,
    ) -> Result<Self, ValidationError> {
        let assumptions = Self {
            discount_rate,
            growth_rate,
            share_count,
        };
        assumptions.validate()?;
        Ok(assumptions)
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn share_count(&self) -> u64 {
        self.share_count
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.discount_rate.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "discount_rate",
            });
        }
        if !self.growth_rate.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "growth_rate",
            });
        }
        if self.discount_rate <= 0.0 || self.discount_rate >= 1.0 {
            return Err(ValidationError::DiscountRateOutOfRange {
                value: self.discount_rate,
            });
        }
        if self.growth_rate < 0.0 {
            return Err(ValidationError::NegativeGrowthRate {
                value: self.growth_rate,
            });
        }
        if self.discount_rate <= self.growth_rate {
            return Err(ValidationError::DegenerateAssumptions {
                discount_rate: self.discount_rate,
                growth_rate: self.growth_rate,
            });
        }
        if self.share_count == 0 {
            return Err(ValidationError::ZeroShareCount);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Discounted flow per period, aligned with the schedule.
    pub present_values: Vec<f64>,
    pub sum_of_present_values: f64,
    /// Undiscounted terminal value at period N.
    pub terminal_value: f64,
    pub discounted_terminal_value: f64,
    pub enterprise_value: f64,
    pub equity_value: f64,
    pub value_per_share: f64,
}

/// Values a free cash flow schedule under `assumptions`.
pub fn value_schedule(
    schedule: &FreeCashFlowSchedule,
    assumptions: &ValuationAssumptions,
) -> Result<ValuationResult, ValidationError> {
    assumptions.validate()?;

    let flows = schedule.free_cash_flows();
    let Some(last_flow) = flows.last() else {
        return Err(ValidationError::EmptySeries {
            field: "free_cash_flow",
        });
    };

    let r = assumptions.discount_rate;
    let g = assumptions.growth_rate;
    let compounding = 1.0 + r;

    let present_values = (1..)
        .zip(flows.iter())
        .map(|(t, flow)| flow / compounding.powi(t))
        .collect::<Vec<_>>();
    let sum_of_present_values = present_values.iter().sum::<f64>();

    let horizon = i32::try_from(flows.len()).unwrap_or(i32::MAX);
    let terminal_value = last_flow * (1.0 + g) / (r - g);
    let discounted_terminal_value = terminal_value / compounding.powi(horizon);

    let enterprise_value = sum_of_present_values + discounted_terminal_value;
    let equity_value = enterprise_value;
    let value_per_share = equity_value / assumptions.share_count as f64;

    tracing::debug!(
        periods = flows.len(),
        enterprise_value,
        terminal_value,
        value_per_share,
        "valued free cash flow schedule"
    );

    Ok(ValuationResult {
        present_values,
        sum_of_present_values,
        terminal_value,
        discounted_terminal_value,
        enterprise_value,
        equity_value,
        value_per_share,
    })
}
