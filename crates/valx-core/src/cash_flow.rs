//! Free cash flow schedule.

use serde::Serialize;

use crate::{FinancialSeries, ResolvedInputs, ValidationError};

/// One row of the schedule. `period` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlowPeriod {
    pub period: u32,
    pub net_income: f64,
    pub depreciation: f64,
    pub capital_expenditure: f64,
    pub change_in_working_capital: f64,
    pub free_cash_flow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FreeCashFlowSchedule {
    periods: Vec<CashFlowPeriod>,
}

impl FreeCashFlowSchedule {
    /// FCL = net income + depreciation - capex - change in working capital,
    /// element-wise by period.
    pub fn compute(
        net_income: &FinancialSeries,
        depreciation: &FinancialSeries,
        capital_expenditure: &FinancialSeries,
        change_in_working_capital: &FinancialSeries,
    ) -> Result<Self, ValidationError> {
        let lengths = [
            net_income.len(),
            depreciation.len(),
            capital_expenditure.len(),
            change_in_working_capital.len(),
        ];
        if lengths.iter().any(|len| *len != lengths[0]) {
            return Err(ValidationError::MismatchedLengths {
                lengths: format!(
                    "net_income={}, depreciation={}, capital_expenditure={}, change_in_working_capital={}",
                    lengths[0], lengths[1], lengths[2], lengths[3]
                ),
            });
        }

        let periods = (1u32..)
            .zip(net_income.iter())
            .zip(depreciation.iter())
            .zip(capital_expenditure.iter())
            .zip(change_in_working_capital.iter())
            .map(|((((period, ni), dep), capex), dwc)| CashFlowPeriod {
                period,
                net_income: ni,
                depreciation: dep,
                capital_expenditure: capex,
                change_in_working_capital: dwc,
                free_cash_flow: ni + dep - capex - dwc,
            })
            .collect();

        Ok(Self { periods })
    }

    pub fn from_inputs(inputs: &ResolvedInputs) -> Result<Self, ValidationError> {
        Self::compute(
            &inputs.net_income.series,
            &inputs.depreciation.series,
            &inputs.capital_expenditure.series,
            &inputs.change_in_working_capital.series,
        )
    }

    pub fn periods(&self) -> &[CashFlowPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn free_cash_flows(&self) -> FinancialSeries {
        self.periods
            .iter()
            .map(|period| period.free_cash_flow)
            .collect::<Vec<_>>()
            .into()
    }
}
