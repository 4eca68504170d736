use std::io::{self, Write};

use valx_core::CashFlowPeriod;

use super::number::grouped;

const BAR_WIDTH: usize = 40;

/// Horizontal bar per period, scaled to the largest absolute flow.
/// Negative flows are drawn with a lighter shade.
pub fn write_free_cash_flow<W: Write>(out: &mut W, periods: &[CashFlowPeriod]) -> io::Result<()> {
    let max_abs = periods
        .iter()
        .map(|period| period.free_cash_flow.abs())
        .fold(0.0_f64, f64::max);

    writeln!(out, "Free cash flow by year")?;
    for period in periods {
        let flow = period.free_cash_flow;
        let filled = if max_abs > 0.0 {
            ((flow.abs() / max_abs) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let glyph = if flow < 0.0 { "░" } else { "█" };

        writeln!(
            out,
            "  {:>4} | {:<width$} {:>14}",
            period.period,
            glyph.repeat(filled),
            grouped(flow, 0),
            width = BAR_WIDTH
        )?;
    }

    Ok(())
}
