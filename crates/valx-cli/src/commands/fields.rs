use serde::Serialize;

use valx_core::{FinancialSeries, LineItem, StatementKind};

use super::{CommandData, CommandResult};

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub item: LineItem,
    pub label: &'static str,
    pub statement: StatementKind,
    pub columns: &'static [&'static str],
    pub default_series: FinancialSeries,
}

impl From<LineItem> for FieldInfo {
    fn from(item: LineItem) -> Self {
        Self {
            item,
            label: item.label(),
            statement: item.statement(),
            columns: item.column_aliases(),
            default_series: item.default_series(),
        }
    }
}

pub fn run() -> CommandResult {
    let fields = LineItem::ALL.into_iter().map(FieldInfo::from).collect();
    CommandResult::ok(CommandData::Fields { fields })
}
