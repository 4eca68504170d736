//! Workbook to valuation, one stage after another.
//!
//! Nothing is cached between calls: each call resolves, computes and values
//! from scratch, so identical inputs always produce identical reports.

use serde::Serialize;

use crate::valuation::value_schedule;
use crate::{
    FreeCashFlowSchedule, ResolvedInputs, StatementKind, StatementTable, ValidationError,
    ValuationAssumptions, ValuationResult, Workbook,
};

/// Result of running the pipeline over a workbook.
///
/// A workbook without both statements is reported rather than treated as an
/// error, so callers can surface it as a warning and skip the valuation.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome<T> {
    Complete(T),
    MissingSheets(Vec<StatementKind>),
}

/// The statements as loaded, the resolved line items and the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub income_statement: StatementTable,
    pub balance_sheet: StatementTable,
    pub fields: ResolvedInputs,
    pub schedule: FreeCashFlowSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationReport {
    pub assumptions: ValuationAssumptions,
    pub income_statement: StatementTable,
    pub balance_sheet: StatementTable,
    pub fields: ResolvedInputs,
    pub schedule: FreeCashFlowSchedule,
    pub valuation: ValuationResult,
}

/// Resolves the line items and computes the free cash flow schedule.
pub fn schedule_workbook(
    workbook: &Workbook,
) -> Result<PipelineOutcome<ScheduleReport>, ValidationError> {
    let (income_statement, balance_sheet) = match statements(workbook) {
        Ok(tables) => tables,
        Err(missing) => return Ok(PipelineOutcome::MissingSheets(missing)),
    };

    let fields = ResolvedInputs::resolve(income_statement, balance_sheet)?;
    let schedule = FreeCashFlowSchedule::from_inputs(&fields)?;

    Ok(PipelineOutcome::Complete(ScheduleReport {
        income_statement: income_statement.clone(),
        balance_sheet: balance_sheet.clone(),
        fields,
        schedule,
    }))
}

/// Runs the full valuation over a workbook.
pub fn value_workbook(
    workbook: &Workbook,
    assumptions: &ValuationAssumptions,
) -> Result<PipelineOutcome<ValuationReport>, ValidationError> {
    let ScheduleReport {
        income_statement,
        balance_sheet,
        fields,
        schedule,
    } = match schedule_workbook(workbook)? {
        PipelineOutcome::Complete(report) => report,
        PipelineOutcome::MissingSheets(missing) => {
            return Ok(PipelineOutcome::MissingSheets(missing))
        }
    };

    let valuation = value_schedule(&schedule, assumptions)?;
    tracing::info!(
        periods = schedule.len(),
        enterprise_value = valuation.enterprise_value,
        value_per_share = valuation.value_per_share,
        "valuation complete"
    );

    Ok(PipelineOutcome::Complete(ValuationReport {
        assumptions: *assumptions,
        income_statement,
        balance_sheet,
        fields,
        schedule,
        valuation,
    }))
}

fn statements(
    workbook: &Workbook,
) -> Result<(&StatementTable, &StatementTable), Vec<StatementKind>> {
    match (
        workbook.statement(StatementKind::IncomeStatement),
        workbook.statement(StatementKind::BalanceSheet),
    ) {
        (Some(income), Some(balance)) => Ok((income, balance)),
        (income, balance) => {
            let missing = [
                (StatementKind::IncomeStatement, income.is_none()),
                (StatementKind::BalanceSheet, balance.is_none()),
            ]
            .into_iter()
            .filter_map(|(kind, absent)| absent.then_some(kind))
            .collect::<Vec<_>>();

            tracing::warn!(?missing, "workbook is missing required statements");
            Err(missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(name: &str) -> StatementTable {
        StatementTable::new(name, Vec::new()).expect("table")
    }

    #[test]
    fn reports_missing_balance_sheet() {
        let workbook = Workbook::new().with_table(empty("ER"));
        let assumptions = ValuationAssumptions::new(0.10, 0.03, 1_000_000).expect("valid");

        let outcome = value_workbook(&workbook, &assumptions).expect("no error");

        assert_eq!(
            outcome,
            PipelineOutcome::MissingSheets(vec![StatementKind::BalanceSheet])
        );
    }

    #[test]
    fn reports_both_sheets_missing() {
        let workbook = Workbook::new().with_table(empty("Hoja1"));

        let outcome = schedule_workbook(&workbook).expect("no error");

        assert_eq!(
            outcome,
            PipelineOutcome::MissingSheets(vec![
                StatementKind::IncomeStatement,
                StatementKind::BalanceSheet
            ])
        );
    }

    #[test]
    fn report_carries_loaded_statements() {
        let income = StatementTable::new(
            "ER",
            vec![
                ("Revenue".to_owned(), vec![5_000.0, 5_500.0]),
                ("Net Income".to_owned(), vec![900.0, 950.0]),
                ("Depreciation".to_owned(), vec![100.0, 110.0]),
            ],
        )
        .expect("table");
        let balance = StatementTable::new(
            "BG",
            vec![
                ("Cash".to_owned(), vec![40.0, 45.0]),
                ("CAPEX".to_owned(), vec![200.0, 210.0]),
                ("ΔCapitalTrabajo".to_owned(), vec![10.0, 12.0]),
            ],
        )
        .expect("table");
        let workbook = Workbook::new()
            .with_table(income.clone())
            .with_table(balance.clone());
        let assumptions = ValuationAssumptions::new(0.10, 0.03, 1_000_000).expect("valid");

        let PipelineOutcome::Complete(report) =
            value_workbook(&workbook, &assumptions).expect("value")
        else {
            panic!("both sheets are present");
        };

        assert_eq!(report.income_statement, income);
        assert_eq!(report.balance_sheet, balance);
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(
            json.pointer("/income_statement/columns/Revenue"),
            Some(&serde_json::json!([5_000.0, 5_500.0]))
        );
        assert!(json.pointer("/balance_sheet/columns/Cash").is_some());
    }

    #[test]
    fn values_fully_defaulted_workbook() {
        let workbook = Workbook::new().with_table(empty("ER")).with_table(empty("BG"));
        let assumptions = ValuationAssumptions::new(0.10, 0.03, 1_000_000).expect("valid");

        let PipelineOutcome::Complete(report) =
            value_workbook(&workbook, &assumptions).expect("value")
        else {
            panic!("both sheets are present");
        };

        assert_eq!(report.schedule.len(), 5);
        assert_eq!(report.valuation.equity_value, report.valuation.enterprise_value);
    }
}
