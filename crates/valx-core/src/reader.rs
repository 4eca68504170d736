//! Loads statement tables from disk.
//!
//! Three layouts are supported: a spreadsheet workbook (`.xlsx`, `.xls`,
//! `.ods`...) whose sheets carry a header row, a JSON workbook mapping sheet
//! name to `{ column: [values...] }`, and one CSV file per statement with a
//! header row and one row per fiscal period. Columns keep their file order.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{CoreError, StatementKind, StatementTable, ValidationError, Workbook};

type RawWorkbook = IndexMap<String, IndexMap<String, Vec<Value>>>;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads a workbook, picking the format from the file extension. Anything
/// that is not a spreadsheet is parsed as JSON.
pub fn read_workbook(path: &Path) -> Result<Workbook, CoreError> {
    let is_spreadsheet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        });

    if is_spreadsheet {
        read_spreadsheet_workbook(path)
    } else {
        read_json_workbook(path)
    }
}

/// Reads every sheet of a spreadsheet workbook. The first row of each sheet
/// holds the column names; columns with a blank header are skipped.
pub fn read_spreadsheet_workbook(path: &Path) -> Result<Workbook, CoreError> {
    let spreadsheet_error = |source| CoreError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };
    let mut spreadsheet = open_workbook_auto(path).map_err(spreadsheet_error)?;

    let mut workbook = Workbook::new();
    for sheet in spreadsheet.sheet_names() {
        let range = spreadsheet
            .worksheet_range(&sheet)
            .map_err(spreadsheet_error)?;

        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(index, cell)| (index, cell.to_string().trim().to_owned()))
                    .filter(|(_, header)| !header.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
        for (index, row) in rows.enumerate() {
            for ((position, header), values) in headers.iter().zip(columns.iter_mut()) {
                values.push(spreadsheet_cell(
                    &sheet,
                    header,
                    index + 1,
                    row.get(*position).unwrap_or(&Data::Empty),
                )?);
            }
        }

        let names = headers.into_iter().map(|(_, header)| header);
        let table = StatementTable::new(sheet, names.zip(columns).collect())?;
        tracing::debug!(
            sheet = table.name(),
            rows = table.row_count(),
            path = %path.display(),
            "loaded spreadsheet sheet"
        );
        workbook.insert(table);
    }

    Ok(workbook)
}

/// Reads every sheet of a JSON workbook.
pub fn read_json_workbook(path: &Path) -> Result<Workbook, CoreError> {
    let file = File::open(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawWorkbook =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CoreError::MalformedInput {
                path: path.to_path_buf(),
                source,
            }
        })?;

    let mut workbook = Workbook::new();
    for (sheet, raw_columns) in raw {
        let mut columns = Vec::with_capacity(raw_columns.len());
        for (column, cells) in raw_columns {
            let values = cells
                .iter()
                .enumerate()
                .map(|(row, cell)| json_cell(&sheet, &column, row + 1, cell))
                .collect::<Result<Vec<_>, _>>()?;
            columns.push((column, values));
        }

        let table = StatementTable::new(sheet, columns)?;
        tracing::debug!(
            sheet = table.name(),
            rows = table.row_count(),
            "loaded workbook sheet"
        );
        workbook.insert(table);
    }

    Ok(workbook)
}

/// Reads a single CSV statement into a table named `sheet`.
pub fn read_csv_table(path: &Path, sheet: &str) -> Result<StatementTable, CoreError> {
    let file = File::open(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        for (column, cell) in record.iter().enumerate() {
            let value = text_cell(sheet, &headers[column], index + 1, cell)?;
            columns[column].push(value);
        }
    }

    let table = StatementTable::new(sheet, headers.into_iter().zip(columns).collect())?;
    tracing::debug!(
        sheet = table.name(),
        rows = table.row_count(),
        path = %path.display(),
        "loaded csv statement"
    );
    Ok(table)
}

/// Reads the two statements from separate CSV files into one workbook.
pub fn read_statement_csvs(
    income_statement: &Path,
    balance_sheet: &Path,
) -> Result<Workbook, CoreError> {
    Ok(Workbook::new()
        .with_table(read_csv_table(
            income_statement,
            StatementKind::IncomeStatement.as_str(),
        )?)
        .with_table(read_csv_table(
            balance_sheet,
            StatementKind::BalanceSheet.as_str(),
        )?))
}

fn json_cell(sheet: &str, column: &str, row: usize, cell: &Value) -> Result<f64, ValidationError> {
    match cell {
        Value::Number(number) => number
            .as_f64()
            .filter(|value| value.is_finite())
            .ok_or_else(|| non_numeric(sheet, column, row, &number.to_string())),
        Value::String(text) => text_cell(sheet, column, row, text),
        other => Err(non_numeric(sheet, column, row, &other.to_string())),
    }
}

fn spreadsheet_cell(
    sheet: &str,
    column: &str,
    row: usize,
    cell: &Data,
) -> Result<f64, ValidationError> {
    match cell {
        Data::Float(value) if value.is_finite() => Ok(*value),
        Data::Int(value) => Ok(*value as f64),
        Data::String(text) => text_cell(sheet, column, row, text),
        other => Err(non_numeric(sheet, column, row, &other.to_string())),
    }
}

fn text_cell(sheet: &str, column: &str, row: usize, text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| non_numeric(sheet, column, row, text))
}

fn non_numeric(sheet: &str, column: &str, row: usize, value: &str) -> ValidationError {
    ValidationError::NonNumericCell {
        sheet: sheet.to_owned(),
        column: column.to_owned(),
        row,
        value: value.to_owned(),
    }
}
