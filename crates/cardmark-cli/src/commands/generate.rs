use cardmark_core::{
    DirectiveParser, GeminiGenerator, GenerationConfig, Registry, TextGenerator,
};

use crate::cli::GenerateArgs;
use crate::error::CliError;

use super::render::render_markdown;
use super::CommandResult;

pub async fn run(
    args: &GenerateArgs,
    registry: &Registry,
    timeout_ms: u64,
) -> Result<CommandResult, CliError> {
    let config = GenerationConfig::from_env().with_timeout_ms(timeout_ms);
    let generator = GeminiGenerator::new(config, registry);

    let markdown = generator.generate(&args.prompt).await?;
    tracing::debug!(chars = markdown.chars().count(), "received generated markdown");

    if args.render {
        return render_markdown(&markdown, &DirectiveParser::default(), registry);
    }

    let result = if markdown.trim().is_empty() {
        CommandResult::ok(serde_json::json!({ "markdown": "" }), "")
            .with_warning("the model returned no text")
    } else {
        CommandResult::ok(serde_json::json!({ "markdown": markdown }), markdown)
    };
    Ok(result)
}
