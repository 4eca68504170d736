//! Shared fixtures for the behavior tests.

use std::io::Write;

use tempfile::NamedTempFile;
use valx_core::{StatementTable, Workbook};

pub use valx_core::{
    schedule_workbook, value_schedule, value_workbook, FieldOrigin, FinancialSeries,
    FreeCashFlowSchedule, LineItem, PipelineOutcome, StatementKind, ValidationError,
    ValuationAssumptions, ValuationConfig, ValuationReport,
};

/// Builds a table from `(header, values)` pairs.
pub fn table(name: &str, columns: &[(&str, &[f64])]) -> StatementTable {
    StatementTable::new(
        name,
        columns
            .iter()
            .map(|(header, values)| ((*header).to_owned(), values.to_vec()))
            .collect(),
    )
    .expect("fixture table is valid")
}

/// Workbook with both statements present but none of the line item columns.
pub fn defaulted_workbook() -> Workbook {
    Workbook::new()
        .with_table(table("ER", &[("Revenue", &[5000.0; 5])]))
        .with_table(table("BG", &[("Cash", &[100.0; 5])]))
}

pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

/// Closed-form DCF value used as the oracle in property tests.
pub fn closed_form_enterprise_value(flows: &[f64], r: f64, g: f64) -> f64 {
    let n = flows.len() as i32;
    let discounted = flows
        .iter()
        .enumerate()
        .map(|(index, flow)| flow / (1.0 + r).powi(index as i32 + 1))
        .sum::<f64>();
    let terminal = flows[flows.len() - 1] * (1.0 + g) / (r - g);
    discounted + terminal / (1.0 + r).powi(n)
}

pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() / scale < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn complete<T>(outcome: PipelineOutcome<T>) -> T {
    match outcome {
        PipelineOutcome::Complete(report) => report,
        PipelineOutcome::MissingSheets(missing) => {
            panic!("expected a complete run, missing sheets: {missing:?}")
        }
    }
}
