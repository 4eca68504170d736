//! Behavior-driven tests for the valuation pipeline.
//!
//! These tests pin the closed-form DCF arithmetic and the end-to-end
//! behavior of a fully defaulted workbook.

use valx_tests::*;

// =============================================================================
// Fully defaulted scenario
// =============================================================================

#[test]
fn defaulted_workbook_produces_expected_free_cash_flows() {
    // Given: Both statements exist but carry none of the line item columns
    let workbook = defaulted_workbook();

    // When: The schedule is computed
    let report = complete(schedule_workbook(&workbook).expect("schedule"));

    // Then: Every line item falls back to its default series
    assert!(report
        .fields
        .fields()
        .iter()
        .all(|field| field.origin == FieldOrigin::Default));

    // And: FCL = NI + D - CAPEX - dWC for each of the five periods
    assert_eq!(
        report.schedule.free_cash_flows().values(),
        &[850.0, 1040.0, 1230.0, 1420.0, 1610.0]
    );
}

#[test]
fn defaulted_workbook_valuation_matches_closed_form() {
    // Given: The default scenario at 10% WACC, 3% growth, one million shares
    let workbook = defaulted_workbook();
    let assumptions = ValuationAssumptions::new(0.10, 0.03, 1_000_000).expect("valid");
    let flows = [850.0, 1040.0, 1230.0, 1420.0, 1610.0];

    // When: The workbook is valued
    let report = complete(value_workbook(&workbook, &assumptions).expect("value"));
    let valuation = &report.valuation;

    // Then: Terminal value is Gordon growth on the last flow
    let expected_terminal = 1610.0 * 1.03 / 0.07;
    assert_close(valuation.terminal_value, expected_terminal);
    assert_close(
        valuation.discounted_terminal_value,
        expected_terminal / 1.1_f64.powi(5),
    );

    // And: EV matches the closed-form formula
    let expected_ev = closed_form_enterprise_value(&flows, 0.10, 0.03);
    assert_close(valuation.enterprise_value, expected_ev);

    // And: Equity equals EV and per-share value is an exact division
    assert_eq!(valuation.equity_value, valuation.enterprise_value);
    assert_eq!(valuation.value_per_share, valuation.equity_value / 1_000_000.0);
}

#[test]
fn present_values_are_discounted_by_period_index() {
    // Given: A flat schedule of 100 per period
    let zeros = FinancialSeries::new(vec![0.0; 3]);
    let schedule = FreeCashFlowSchedule::compute(
        &FinancialSeries::new(vec![100.0; 3]),
        &zeros,
        &zeros,
        &zeros,
    )
    .expect("aligned");
    let assumptions = ValuationAssumptions::new(0.08, 0.02, 1_000).expect("valid");

    // When: It is valued
    let valuation = value_schedule(&schedule, &assumptions).expect("value");

    // Then: Period t is discounted by (1 + r)^t, starting at t = 1
    assert_eq!(valuation.present_values.len(), 3);
    for (index, pv) in valuation.present_values.iter().enumerate() {
        assert_close(*pv, 100.0 / 1.08_f64.powi(index as i32 + 1));
    }
    assert_close(
        valuation.sum_of_present_values,
        valuation.present_values.iter().sum(),
    );
}

#[test]
fn closed_form_holds_across_rate_pairs() {
    // Given: A single observed schedule
    let flows = [-200.0, 150.0, 480.0, 510.0];
    let zeros = FinancialSeries::new(vec![0.0; flows.len()]);
    let schedule = FreeCashFlowSchedule::compute(
        &FinancialSeries::new(flows.to_vec()),
        &zeros,
        &zeros,
        &zeros,
    )
    .expect("aligned");

    // When/Then: Every valid (r, g) pair reproduces the formula
    for (r, g) in [(0.01, 0.0), (0.10, 0.03), (0.15, 0.10), (0.30, 0.0), (0.30, 0.10)] {
        let assumptions = ValuationAssumptions::new(r, g, 1_000).expect("valid pair");
        let valuation = value_schedule(&schedule, &assumptions).expect("value");
        assert_close(
            valuation.enterprise_value,
            closed_form_enterprise_value(&flows, r, g),
        );
    }
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn rerunning_the_pipeline_is_bit_identical() {
    // Given: The same workbook and assumptions
    let workbook = defaulted_workbook();
    let assumptions = ValuationAssumptions::new(0.12, 0.025, 2_500_000).expect("valid");

    // When: The pipeline runs twice
    let first = complete(value_workbook(&workbook, &assumptions).expect("first"));
    let second = complete(value_workbook(&workbook, &assumptions).expect("second"));

    // Then: Results are identical down to the bit
    assert_eq!(first, second);
    assert_eq!(
        first.valuation.enterprise_value.to_bits(),
        second.valuation.enterprise_value.to_bits()
    );
}

// =============================================================================
// Observed data
// =============================================================================

#[test]
fn observed_columns_drive_the_schedule() {
    // Given: A three-year workbook with every line item present
    let workbook = valx_core::Workbook::new()
        .with_table(table(
            "ER",
            &[
                ("Net Income", &[500.0, 650.0, 700.0]),
                ("Depreciation", &[80.0, 90.0, 95.0]),
            ],
        ))
        .with_table(table(
            "BG",
            &[
                ("CAPEX", &[120.0, 130.0, 150.0]),
                ("Change in Working Capital", &[10.0, -5.0, 20.0]),
            ],
        ));

    // When: The schedule is computed
    let report = complete(schedule_workbook(&workbook).expect("schedule"));

    // Then: Observed values are used verbatim and N follows the table
    assert_eq!(report.schedule.len(), 3);
    assert_eq!(
        report.schedule.free_cash_flows().values(),
        &[450.0, 615.0, 625.0]
    );
    assert_eq!(
        report.fields.capital_expenditure.origin,
        FieldOrigin::Observed {
            column: String::from("CAPEX")
        }
    );
}
