use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::FinancialSeries;

/// The two statements a valuation workbook must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    IncomeStatement,
    BalanceSheet,
}

impl StatementKind {
    pub const ALL: [Self; 2] = [Self::IncomeStatement, Self::BalanceSheet];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
        }
    }

    /// Short sheet name used by the workbooks this tool was built around.
    pub const fn short_sheet_name(self) -> &'static str {
        match self {
            Self::IncomeStatement => "ER",
            Self::BalanceSheet => "BG",
        }
    }

    /// Whether `sheet` names this statement. Short names match exactly,
    /// long names ignore ASCII case.
    pub fn matches_sheet(self, sheet: &str) -> bool {
        let sheet = sheet.trim();
        sheet == self.short_sheet_name() || sheet.eq_ignore_ascii_case(self.as_str())
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line items feeding the free cash flow calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    NetIncome,
    Depreciation,
    CapitalExpenditure,
    ChangeInWorkingCapital,
}

impl LineItem {
    pub const ALL: [Self; 4] = [
        Self::NetIncome,
        Self::Depreciation,
        Self::CapitalExpenditure,
        Self::ChangeInWorkingCapital,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetIncome => "net_income",
            Self::Depreciation => "depreciation",
            Self::CapitalExpenditure => "capital_expenditure",
            Self::ChangeInWorkingCapital => "change_in_working_capital",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NetIncome => "Net Income",
            Self::Depreciation => "Depreciation",
            Self::CapitalExpenditure => "Capital Expenditure",
            Self::ChangeInWorkingCapital => "Change in Working Capital",
        }
    }

    pub const fn statement(self) -> StatementKind {
        match self {
            Self::NetIncome | Self::Depreciation => StatementKind::IncomeStatement,
            Self::CapitalExpenditure | Self::ChangeInWorkingCapital => StatementKind::BalanceSheet,
        }
    }

    /// Column headers accepted for this item, in lookup order.
    pub const fn column_aliases(self) -> &'static [&'static str] {
        match self {
            Self::NetIncome => &["Net Income", "Utilidad Neta"],
            Self::Depreciation => &["Depreciation", "Depreciación"],
            Self::CapitalExpenditure => &["Capital Expenditure", "CAPEX"],
            Self::ChangeInWorkingCapital => &["Change in Working Capital", "ΔCapitalTrabajo"],
        }
    }

    pub const fn default_values(self) -> [f64; 5] {
        match self {
            Self::NetIncome => [1000.0, 1200.0, 1400.0, 1600.0, 1800.0],
            Self::Depreciation => [200.0, 220.0, 240.0, 260.0, 280.0],
            Self::CapitalExpenditure => [300.0, 320.0, 340.0, 360.0, 380.0],
            Self::ChangeInWorkingCapital => [50.0, 60.0, 70.0, 80.0, 90.0],
        }
    }

    pub fn default_series(self) -> FinancialSeries {
        FinancialSeries::from(self.default_values())
    }
}

impl Display for LineItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
