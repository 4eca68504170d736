//! Domain value types shared by the valuation stages.

mod line_item;
mod series;
mod timestamp;

pub use line_item::{LineItem, StatementKind};
pub use series::FinancialSeries;
pub use timestamp::UtcDateTime;
