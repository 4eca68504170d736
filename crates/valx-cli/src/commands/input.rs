use valx_core::{read_csv_table, read_workbook, CoreError, StatementKind, Workbook};

use crate::cli::StatementArgs;

/// Loads whichever statements were supplied. Absent statements are left
/// out of the workbook and reported later by the pipeline.
pub fn load_workbook(args: &StatementArgs) -> Result<Workbook, CoreError> {
    if let Some(path) = &args.workbook {
        return read_workbook(path);
    }

    let mut workbook = Workbook::new();
    if let Some(path) = &args.income_statement {
        workbook.insert(read_csv_table(path, StatementKind::IncomeStatement.as_str())?);
    }
    if let Some(path) = &args.balance_sheet {
        workbook.insert(read_csv_table(path, StatementKind::BalanceSheet.as_str())?);
    }

    Ok(workbook)
}

pub fn missing_sheets_warning(missing: &[StatementKind]) -> String {
    let names = missing
        .iter()
        .map(|kind| format!("{} ({})", kind.as_str(), kind.short_sheet_name()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("missing required statements: {names}; valuation skipped")
}
