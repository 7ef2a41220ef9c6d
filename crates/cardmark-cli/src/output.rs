use cardmark_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&output.envelope)?
            } else {
                serde_json::to_string(&output.envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Text => render_text(&output.envelope, &output.text),
    }

    Ok(())
}

/// Command text on stdout; warnings and errors on stderr so piping stays clean.
fn render_text(envelope: &Envelope<Value>, text: &str) {
    print!("{text}");
    if !text.is_empty() && !text.ends_with('\n') {
        println!();
    }

    for warning in &envelope.meta.warnings {
        eprintln!("warning: {warning}");
    }
    for error in &envelope.errors {
        match error.line {
            Some(line) => eprintln!("{} (line {line}): {}", error.code, error.message),
            None => eprintln!("{}: {}", error.code, error.message),
        }
    }
}
