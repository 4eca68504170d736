use valx_core::{schedule_workbook, PipelineOutcome};

use crate::cli::ScheduleArgs;
use crate::error::CliError;

use super::{input, CommandData, CommandResult};

pub fn run(args: &ScheduleArgs) -> Result<CommandResult, CliError> {
    let workbook = input::load_workbook(&args.statements)?;

    match schedule_workbook(&workbook)? {
        PipelineOutcome::Complete(report) => Ok(CommandResult::ok(CommandData::Schedule(report))),
        PipelineOutcome::MissingSheets(missing) => {
            let warning = input::missing_sheets_warning(&missing);
            Ok(CommandResult::ok(CommandData::Skipped {
                missing_sheets: missing,
            })
            .with_warning(warning))
        }
    }
}
