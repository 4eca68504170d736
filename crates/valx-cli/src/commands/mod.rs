mod fields;
mod input;
mod schedule;
mod value;

use std::time::Instant;

use serde::Serialize;
use uuid::Uuid;
use valx_core::{Envelope, EnvelopeMeta, ScheduleReport, StatementKind, ValuationConfig, ValuationReport};

pub use self::fields::FieldInfo;

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;

/// Payload of a command, serialized as the envelope's `data`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandData {
    Valuation(Box<ValuationReport>),
    Schedule(ScheduleReport),
    Fields { fields: Vec<FieldInfo> },
    Skipped { missing_sheets: Vec<StatementKind> },
}

pub struct CommandResult {
    pub data: CommandData,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: CommandData) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<CommandData>, CliError> {
    let started = Instant::now();
    let config = match &cli.config {
        Some(path) => ValuationConfig::from_json_file(path)?,
        None => ValuationConfig::default(),
    };

    let CommandResult { data, mut warnings } = match &cli.command {
        Command::Value(args) => value::run(args, &config)?,
        Command::Schedule(args) => schedule::run(args)?,
        Command::Fields => fields::run(),
    };
    if cli.chart() && cli.format != OutputFormat::Table {
        warnings.push(String::from(
            "--chart is only drawn with --format table; chart omitted",
        ));
    }

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), latency_ms)?;
    for warning in warnings {
        tracing::warn!(%warning, "command completed with warning");
        meta.push_warning(warning);
    }

    Envelope::new(meta, data).map_err(CliError::from)
}

/// Fails a run that produced warnings when `--strict` is set.
pub fn check_strict(envelope: &Envelope<CommandData>, strict: bool) -> Result<(), CliError> {
    if strict && !envelope.meta.warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
        });
    }

    Ok(())
}
