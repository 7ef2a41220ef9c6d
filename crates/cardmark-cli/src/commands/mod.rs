mod cards;
mod generate;
mod insert;
mod render;
mod sample;

use std::time::Instant;

use cardmark_core::{Envelope, EnvelopeError, EnvelopeMeta, Registry};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command produced, before it is wrapped in an envelope.
pub struct CommandResult {
    pub data: Value,
    /// Plain-text rendition used by `--format text`.
    pub text: String,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

/// Envelope plus its text rendition.
pub struct CommandOutput {
    pub envelope: Envelope<Value>,
    pub text: String,
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let started = Instant::now();
    let registry = Registry::standard();

    let CommandResult {
        data,
        text,
        warnings,
        errors,
    } = match &cli.command {
        Command::Render(args) => render::run(args, &registry)?,
        Command::Cards => cards::run(&registry)?,
        Command::Insert(args) => insert::run(args, &registry)?,
        Command::Sample(args) => sample::run(args, &registry)?,
        Command::Generate(args) => generate::run(args, &registry, cli.timeout_ms).await?,
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut meta = EnvelopeMeta::generate(latency_ms)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    let envelope = Envelope::with_errors(meta, data, errors)?;
    Ok(CommandOutput { envelope, text })
}
