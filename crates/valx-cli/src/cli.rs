//! CLI argument definitions for valx.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `value` | Run the full DCF valuation over a set of statements |
//! | `schedule` | Show the free cash flow schedule only |
//! | `fields` | List line items, accepted column names and defaults |
//!
//! # Examples
//!
//! ```bash
//! # Value a spreadsheet with sheets "ER" and "BG"
//! valx --format table value --workbook empresa.xlsx --chart
//!
//! # Two CSV statements, custom assumptions
//! valx value --income-statement er.csv --balance-sheet bg.csv \
//!     --discount-rate 0.12 --growth-rate 0.02 --shares 2500000
//!
//! # Fail the run when a statement is missing
//! valx value --workbook partial.json --strict
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// Discounted cash flow valuation from income statement and balance sheet data.
#[derive(Debug, Parser)]
#[command(
    name = "valx",
    author,
    version,
    about = "Discounted cash flow valuation from financial statements"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// JSON file with default assumptions and input limits.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity on stderr. `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Whether the command asked for the free cash flow chart.
    pub fn chart(&self) -> bool {
        match &self.command {
            Command::Value(args) => args.chart,
            Command::Schedule(args) => args.chart,
            Command::Fields => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Ndjson,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Value the company: schedule, terminal value, equity and per-share value.
    Value(ValueArgs),
    /// Resolve line items and print the free cash flow schedule.
    Schedule(ScheduleArgs),
    /// List line items with accepted column names and default series.
    Fields,
}

/// Where the statements are read from.
#[derive(Debug, Clone, Args)]
#[command(group(
    ArgGroup::new("statements")
        .required(true)
        .multiple(true)
        .args(["workbook", "income_statement", "balance_sheet"])
))]
pub struct StatementArgs {
    /// Workbook with both statements: a spreadsheet (`.xlsx`, `.xls`, `.ods`)
    /// or JSON shaped `{ "<sheet>": { "<column>": [values...] } }`.
    #[arg(long, conflicts_with_all = ["income_statement", "balance_sheet"])]
    pub workbook: Option<PathBuf>,

    /// Income statement CSV, one row per fiscal period.
    #[arg(long)]
    pub income_statement: Option<PathBuf>,

    /// Balance sheet CSV, one row per fiscal period.
    #[arg(long)]
    pub balance_sheet: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ValueArgs {
    #[command(flatten)]
    pub statements: StatementArgs,

    /// Discount rate (WACC) as a fraction, e.g. 0.10.
    #[arg(long)]
    pub discount_rate: Option<f64>,

    /// Perpetual growth rate as a fraction, e.g. 0.03.
    #[arg(long)]
    pub growth_rate: Option<f64>,

    /// Shares outstanding.
    #[arg(long)]
    pub shares: Option<u64>,

    /// Draw a free cash flow bar chart (table format only).
    #[arg(long, default_value_t = false)]
    pub chart: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub statements: StatementArgs,

    /// Draw a free cash flow bar chart (table format only).
    #[arg(long, default_value_t = false)]
    pub chart: bool,
}
