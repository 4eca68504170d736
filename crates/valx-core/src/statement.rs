//! Named statement tables and the workbook that groups them.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::{FinancialSeries, StatementKind, ValidationError};

/// A single sheet: ordered numeric columns sharing one row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementTable {
    name: String,
    row_count: usize,
    #[serde(serialize_with = "serialize_columns")]
    columns: Vec<(String, FinancialSeries)>,
}

impl StatementTable {
    /// Builds a table, rejecting duplicate headers and ragged columns.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptySheetName);
        }

        let row_count = columns.first().map_or(0, |(_, values)| values.len());
        let mut validated: Vec<(String, FinancialSeries)> = Vec::with_capacity(columns.len());

        for (column, values) in columns {
            let column = column.trim().to_owned();
            if validated.iter().any(|(existing, _)| *existing == column) {
                return Err(ValidationError::DuplicateColumn {
                    sheet: name,
                    column,
                });
            }

            if values.len() != row_count {
                return Err(ValidationError::RaggedColumn {
                    sheet: name,
                    column,
                    len: values.len(),
                    expected: row_count,
                });
            }

            validated.push((column, FinancialSeries::new(values)));
        }

        Ok(Self {
            name,
            row_count,
            columns: validated,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Columns in file order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &FinancialSeries)> {
        self.columns
            .iter()
            .map(|(name, series)| (name.as_str(), series))
    }

    pub fn column(&self, name: &str) -> Option<&FinancialSeries> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, series)| series)
    }
}

fn serialize_columns<S: Serializer>(
    columns: &[(String, FinancialSeries)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(columns.iter().map(|(name, series)| (name, series)))
}

/// Every sheet loaded from one upload, keyed by sheet name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workbook {
    sheets: BTreeMap<String, StatementTable>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: StatementTable) {
        self.sheets.insert(table.name().to_owned(), table);
    }

    pub fn with_table(mut self, table: StatementTable) -> Self {
        self.insert(table);
        self
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn sheet(&self, name: &str) -> Option<&StatementTable> {
        self.sheets.get(name)
    }

    /// Finds the sheet holding `kind`, by short or long name.
    pub fn statement(&self, kind: StatementKind) -> Option<&StatementTable> {
        self.sheets
            .values()
            .find(|table| kind.matches_sheet(table.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, values: &[f64]) -> (String, Vec<f64>) {
        (name.to_owned(), values.to_vec())
    }

    #[test]
    fn looks_up_columns_by_exact_header() {
        let table = StatementTable::new(
            "ER",
            vec![column("Net Income", &[1.0, 2.0]), column("Revenue", &[5.0, 6.0])],
        )
        .expect("valid table");

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("Net Income").map(FinancialSeries::values),
            Some(&[1.0, 2.0][..])
        );
        assert!(table.column("net income").is_none());
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = StatementTable::new(
            "BG",
            vec![column("CAPEX", &[1.0, 2.0, 3.0]), column("Cash", &[1.0])],
        )
        .expect_err("must fail");

        assert!(matches!(
            err,
            ValidationError::RaggedColumn { len: 1, expected: 3, .. }
        ));
    }

    #[test]
    fn rejects_duplicate_headers() {
        let err = StatementTable::new(
            "BG",
            vec![column("CAPEX", &[1.0]), column("CAPEX", &[2.0])],
        )
        .expect_err("must fail");

        assert!(matches!(err, ValidationError::DuplicateColumn { .. }));
    }

    #[test]
    fn serializes_columns_as_map_in_file_order() {
        let table = StatementTable::new(
            "ER",
            vec![column("Year", &[2024.0]), column("Revenue", &[10.0])],
        )
        .expect("valid table");

        let json = serde_json::to_string(&table).expect("json");

        assert_eq!(
            json,
            r#"{"name":"ER","row_count":1,"columns":{"Year":[2024.0],"Revenue":[10.0]}}"#
        );
    }

    #[test]
    fn finds_statements_by_either_sheet_name() {
        let workbook = Workbook::new()
            .with_table(StatementTable::new("ER", Vec::new()).expect("table"))
            .with_table(StatementTable::new("Balance_Sheet", Vec::new()).expect("table"));

        assert_eq!(
            workbook
                .statement(StatementKind::IncomeStatement)
                .map(StatementTable::name),
            Some("ER")
        );
        assert_eq!(
            workbook
                .statement(StatementKind::BalanceSheet)
                .map(StatementTable::name),
            Some("Balance_Sheet")
        );
    }
}
