//! Line item resolution.
//!
//! Each line item is read from its statement when a matching column exists.
//! A missing column is not an error: the item's fixed five-period default
//! series is substituted instead.

use serde::Serialize;

use crate::{FinancialSeries, LineItem, StatementKind, StatementTable, ValidationError};

/// Where a resolved series came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldOrigin {
    Observed { column: String },
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField {
    pub item: LineItem,
    pub origin: FieldOrigin,
    pub series: FinancialSeries,
}

impl ResolvedField {
    /// Resolves `item` against `table`, falling back to the default series.
    pub fn resolve(table: &StatementTable, item: LineItem) -> Self {
        let observed = item
            .column_aliases()
            .iter()
            .find_map(|alias| table.column(alias).map(|series| (*alias, series)));

        match observed {
            Some((column, series)) => Self {
                item,
                origin: FieldOrigin::Observed {
                    column: column.to_owned(),
                },
                series: series.clone(),
            },
            None => {
                tracing::debug!(
                    item = item.as_str(),
                    sheet = table.name(),
                    "column not found, using default series"
                );
                Self {
                    item,
                    origin: FieldOrigin::Default,
                    series: item.default_series(),
                }
            }
        }
    }

    pub fn is_default(&self) -> bool {
        self.origin == FieldOrigin::Default
    }
}

/// The four aligned series that feed the free cash flow calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedInputs {
    pub net_income: ResolvedField,
    pub depreciation: ResolvedField,
    pub capital_expenditure: ResolvedField,
    pub change_in_working_capital: ResolvedField,
}

impl ResolvedInputs {
    /// Resolves every line item from its statement and checks alignment.
    pub fn resolve(
        income_statement: &StatementTable,
        balance_sheet: &StatementTable,
    ) -> Result<Self, ValidationError> {
        let table_for = |item: LineItem| match item.statement() {
            StatementKind::IncomeStatement => income_statement,
            StatementKind::BalanceSheet => balance_sheet,
        };

        Self::from_fields(
            ResolvedField::resolve(table_for(LineItem::NetIncome), LineItem::NetIncome),
            ResolvedField::resolve(table_for(LineItem::Depreciation), LineItem::Depreciation),
            ResolvedField::resolve(
                table_for(LineItem::CapitalExpenditure),
                LineItem::CapitalExpenditure,
            ),
            ResolvedField::resolve(
                table_for(LineItem::ChangeInWorkingCapital),
                LineItem::ChangeInWorkingCapital,
            ),
        )
    }

    /// Groups already-resolved fields, rejecting empty or unequal series.
    pub fn from_fields(
        net_income: ResolvedField,
        depreciation: ResolvedField,
        capital_expenditure: ResolvedField,
        change_in_working_capital: ResolvedField,
    ) -> Result<Self, ValidationError> {
        let inputs = Self {
            net_income,
            depreciation,
            capital_expenditure,
            change_in_working_capital,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn fields(&self) -> [&ResolvedField; 4] {
        [
            &self.net_income,
            &self.depreciation,
            &self.capital_expenditure,
            &self.change_in_working_capital,
        ]
    }

    pub fn period_count(&self) -> usize {
        self.net_income.series.len()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let fields = self.fields();

        if let Some(empty) = fields.iter().find(|field| field.series.is_empty()) {
            return Err(ValidationError::EmptySeries {
                field: empty.item.as_str(),
            });
        }

        let expected = self.period_count();
        if fields.iter().any(|field| field.series.len() != expected) {
            let lengths = fields
                .iter()
                .map(|field| format!("{}={}", field.item, field.series.len()))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ValidationError::MismatchedLengths { lengths });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, columns: &[(&str, &[f64])]) -> StatementTable {
        StatementTable::new(
            name,
            columns
                .iter()
                .map(|(column, values)| ((*column).to_owned(), values.to_vec()))
                .collect(),
        )
        .expect("valid table")
    }

    #[test]
    fn substitutes_default_net_income_when_column_missing() {
        let income = table("ER", &[("Revenue", &[1.0, 2.0])]);

        let field = ResolvedField::resolve(&income, LineItem::NetIncome);

        assert!(field.is_default());
        assert_eq!(
            field.series.values(),
            &[1000.0, 1200.0, 1400.0, 1600.0, 1800.0]
        );
    }

    #[test]
    fn returns_observed_column_verbatim() {
        let income = table("ER", &[("Utilidad Neta", &[7.5, -2.0, 11.0])]);

        let field = ResolvedField::resolve(&income, LineItem::NetIncome);

        assert_eq!(
            field.origin,
            FieldOrigin::Observed {
                column: String::from("Utilidad Neta")
            }
        );
        assert_eq!(field.series.values(), &[7.5, -2.0, 11.0]);
    }

    #[test]
    fn prefers_first_alias_when_both_present() {
        let balance = table(
            "BG",
            &[("CAPEX", &[1.0]), ("Capital Expenditure", &[2.0])],
        );

        let field = ResolvedField::resolve(&balance, LineItem::CapitalExpenditure);

        assert_eq!(field.series.values(), &[2.0]);
    }

    #[test]
    fn resolves_each_item_from_its_own_statement() {
        // CAPEX on the income statement is ignored.
        let income = table("ER", &[("CAPEX", &[9.0, 9.0, 9.0, 9.0, 9.0])]);
        let balance = table("BG", &[]);

        let inputs = ResolvedInputs::resolve(&income, &balance).expect("aligned");

        assert!(inputs.fields().iter().all(|field| field.is_default()));
        assert_eq!(inputs.period_count(), 5);
    }

    #[test]
    fn rejects_observed_column_shorter_than_defaults() {
        let income = table("ER", &[("Net Income", &[1.0, 2.0, 3.0])]);
        let balance = table("BG", &[]);

        let err = ResolvedInputs::resolve(&income, &balance).expect_err("must fail");

        match err {
            ValidationError::MismatchedLengths { lengths } => {
                assert!(lengths.contains("net_income=3"));
                assert!(lengths.contains("depreciation=5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_row_columns() {
        let income = table("ER", &[("Net Income", &[])]);
        let balance = table("BG", &[]);

        let err = ResolvedInputs::resolve(&income, &balance).expect_err("must fail");

        assert_eq!(err, ValidationError::EmptySeries { field: "net_income" });
    }
}
