use std::io::{self, Write};

use valx_core::{
    Envelope, FieldOrigin, FreeCashFlowSchedule, ResolvedInputs, StatementKind, StatementTable,
    ValuationAssumptions, ValuationResult,
};

use super::chart;
use super::number::{grouped, percent};
use crate::commands::{CommandData, FieldInfo};

pub fn write_envelope<W: Write>(
    out: &mut W,
    envelope: &Envelope<CommandData>,
    chart: bool,
) -> io::Result<()> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;
    writeln!(out, "latency_ms  : {}", envelope.meta.latency_ms)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }
    writeln!(out)?;

    match &envelope.data {
        CommandData::Valuation(report) => {
            write_assumptions(out, &report.assumptions)?;
            write_statement(out, StatementKind::IncomeStatement, &report.income_statement)?;
            write_statement(out, StatementKind::BalanceSheet, &report.balance_sheet)?;
            write_fields(out, &report.fields)?;
            write_schedule(out, &report.schedule)?;
            write_valuation(out, &report.valuation)?;
            if chart {
                writeln!(out)?;
                chart::write_free_cash_flow(out, report.schedule.periods())?;
            }
        }
        CommandData::Schedule(report) => {
            write_statement(out, StatementKind::IncomeStatement, &report.income_statement)?;
            write_statement(out, StatementKind::BalanceSheet, &report.balance_sheet)?;
            write_fields(out, &report.fields)?;
            write_schedule(out, &report.schedule)?;
            if chart {
                writeln!(out)?;
                chart::write_free_cash_flow(out, report.schedule.periods())?;
            }
        }
        CommandData::Fields { fields } => write_field_catalog(out, fields)?,
        CommandData::Skipped { missing_sheets } => {
            let names = missing_sheets
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "valuation skipped, missing statements: {names}")?;
        }
    }

    Ok(())
}

fn write_assumptions<W: Write>(out: &mut W, assumptions: &ValuationAssumptions) -> io::Result<()> {
    writeln!(out, "Assumptions")?;
    writeln!(
        out,
        "  discount rate (WACC)   : {}",
        percent(assumptions.discount_rate())
    )?;
    writeln!(
        out,
        "  perpetual growth (g)   : {}",
        percent(assumptions.growth_rate())
    )?;
    writeln!(
        out,
        "  shares outstanding     : {}",
        grouped(assumptions.share_count() as f64, 0)
    )?;
    writeln!(out)
}

/// Prints a loaded sheet as is, one row per period, columns in file order.
fn write_statement<W: Write>(
    out: &mut W,
    kind: StatementKind,
    table: &StatementTable,
) -> io::Result<()> {
    let heading = match kind {
        StatementKind::IncomeStatement => "Income statement",
        StatementKind::BalanceSheet => "Balance sheet",
    };
    writeln!(out, "{heading} (sheet '{}')", table.name())?;

    let columns = table.columns().collect::<Vec<_>>();
    if columns.is_empty() {
        writeln!(out, "  no columns")?;
        return writeln!(out);
    }

    let widths = columns
        .iter()
        .map(|(name, _)| name.chars().count().max(14))
        .collect::<Vec<_>>();

    write!(out, "  {:>4}", "Row")?;
    for ((name, _), width) in columns.iter().zip(widths.iter().copied()) {
        write!(out, " {name:>width$}")?;
    }
    writeln!(out)?;

    for row in 0..table.row_count() {
        write!(out, "  {:>4}", row + 1)?;
        for ((_, series), width) in columns.iter().zip(widths.iter().copied()) {
            let cell = series
                .values()
                .get(row)
                .map(|value| grouped(*value, 0))
                .unwrap_or_default();
            write!(out, " {cell:>width$}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

fn write_fields<W: Write>(out: &mut W, fields: &ResolvedInputs) -> io::Result<()> {
    writeln!(out, "Line items")?;
    for field in fields.fields() {
        let origin = match &field.origin {
            FieldOrigin::Observed { column } => format!("column '{column}'"),
            FieldOrigin::Default => String::from("default series"),
        };
        writeln!(out, "  {:<26} {origin}", field.item.label())?;
    }
    writeln!(out)
}

fn write_schedule<W: Write>(out: &mut W, schedule: &FreeCashFlowSchedule) -> io::Result<()> {
    writeln!(out, "Free cash flow schedule")?;
    writeln!(
        out,
        "  {:>4} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Net Income", "Depreciation", "CAPEX", "ΔWC", "FCL"
    )?;
    for period in schedule.periods() {
        writeln!(
            out,
            "  {:>4} {:>14} {:>14} {:>14} {:>14} {:>14}",
            period.period,
            grouped(period.net_income, 0),
            grouped(period.depreciation, 0),
            grouped(period.capital_expenditure, 0),
            grouped(period.change_in_working_capital, 0),
            grouped(period.free_cash_flow, 0),
        )?;
    }
    writeln!(out)
}

fn write_valuation<W: Write>(out: &mut W, valuation: &ValuationResult) -> io::Result<()> {
    writeln!(out, "Valuation")?;
    writeln!(
        out,
        "  enterprise value (EV)  : {}",
        grouped(valuation.enterprise_value, 2)
    )?;
    writeln!(
        out,
        "  terminal value         : {}",
        grouped(valuation.terminal_value, 2)
    )?;
    writeln!(
        out,
        "  equity value           : {}",
        grouped(valuation.equity_value, 2)
    )?;
    writeln!(
        out,
        "  value per share        : {}",
        grouped(valuation.value_per_share, 2)
    )
}

fn write_field_catalog<W: Write>(out: &mut W, fields: &[FieldInfo]) -> io::Result<()> {
    for field in fields {
        let defaults = field
            .default_series
            .iter()
            .map(|value| grouped(value, 0))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{} ({})", field.label, field.statement)?;
        writeln!(out, "  columns : {}", field.columns.join(" | "))?;
        writeln!(out, "  default : [{defaults}]")?;
    }
    Ok(())
}
