use cardmark_core::{EnvelopeError, Registry, INVALID_ARGS_CODE};
use serde::Serialize;

use crate::cli::InsertArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct InsertResponseData<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    line: String,
}

pub fn run(args: &InsertArgs, registry: &Registry) -> Result<CommandResult, CliError> {
    let descriptor = registry.lookup(&args.card_type).ok_or_else(|| {
        CliError::Command(format!("unknown card type '{}'", args.card_type))
    })?;

    // Positions the caller left out take the parameter default.
    let mut values = descriptor.default_args();
    for (slot, value) in values.iter_mut().zip(&args.args) {
        slot.clone_from(value);
    }
    values.extend(args.args.iter().skip(descriptor.parameters.len()).cloned());

    let line = descriptor.directive_line(&values);
    let errors = descriptor
        .validate(&values)
        .map(|message| EnvelopeError::new(INVALID_ARGS_CODE, message))
        .transpose()?
        .into_iter()
        .collect();

    let data = serde_json::to_value(InsertResponseData {
        type_name: descriptor.type_name,
        line: line.clone(),
    })?;
    Ok(CommandResult::ok(data, format!("{line}\n")).with_errors(errors))
}
