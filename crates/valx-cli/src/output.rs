mod chart;
mod number;
mod table;

use std::io::{self, Write};

use valx_core::Envelope;

use crate::cli::OutputFormat;
use crate::commands::CommandData;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<CommandData>,
    format: OutputFormat,
    pretty: bool,
    chart: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut out, envelope)?;
            } else {
                serde_json::to_writer(&mut out, envelope)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Ndjson => {
            serde_json::to_writer(&mut out, envelope)?;
            writeln!(out)?;
        }
        OutputFormat::Table => table::write_envelope(&mut out, envelope, chart)?,
    }

    out.flush()?;
    Ok(())
}
