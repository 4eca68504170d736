use valx_core::{value_workbook, PipelineOutcome, ValuationConfig};

use crate::cli::ValueArgs;
use crate::error::CliError;

use super::{input, CommandData, CommandResult};

pub fn run(args: &ValueArgs, config: &ValuationConfig) -> Result<CommandResult, CliError> {
    let workbook = input::load_workbook(&args.statements)?;
    let assumptions = config.assumptions(args.discount_rate, args.growth_rate, args.shares)?;

    match value_workbook(&workbook, &assumptions)? {
        PipelineOutcome::Complete(report) => {
            Ok(CommandResult::ok(CommandData::Valuation(Box::new(report))))
        }
        PipelineOutcome::MissingSheets(missing) => {
            let warning = input::missing_sheets_warning(&missing);
            Ok(CommandResult::ok(CommandData::Skipped {
                missing_sheets: missing,
            })
            .with_warning(warning))
        }
    }
}
