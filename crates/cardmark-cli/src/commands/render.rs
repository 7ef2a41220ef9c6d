use std::io::Read;
use std::path::Path;

use cardmark_core::{
    render_document, text, DirectiveParser, EnvelopeError, ParserConfig, Registry,
};

use crate::cli::RenderArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &RenderArgs, registry: &Registry) -> Result<CommandResult, CliError> {
    let document = load_document(args.path.as_deref())?;
    let parser = DirectiveParser::new(ParserConfig::with_marker(args.marker.as_str())?);
    render_markdown(&document, &parser, registry)
}

/// Reads `path`, or stdin when it is absent or `-`.
pub fn load_document(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading document");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut document = String::new();
            std::io::stdin().read_to_string(&mut document)?;
            Ok(document)
        }
    }
}

/// Renders `document` and turns every notice into an envelope error.
pub(super) fn render_markdown(
    document: &str,
    parser: &DirectiveParser,
    registry: &Registry,
) -> Result<CommandResult, CliError> {
    let rendered = render_document(document, parser, registry);

    let errors = rendered
        .notices()
        .into_iter()
        .map(|notice| {
            EnvelopeError::new(notice.code, notice.message).map(|error| error.with_line(notice.line))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let widget_count = rendered.widgets().filter(|w| !w.is_notice()).count();
    let blocks = rendered.to_json()?;
    let data = serde_json::json!({
        "widget_count": widget_count,
        "blocks": blocks,
    });

    Ok(CommandResult::ok(data, text::render_document(&rendered)).with_errors(errors))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "# Notes\n#card news AAPL\n").expect("write document");

        let document = load_document(Some(file.path())).expect("readable");
        assert_eq!(document, "# Notes\n#card news AAPL\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_document(Some(&dir.path().join("absent.md"))).expect_err("must fail");
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn notices_become_envelope_errors_with_lines() {
        let result = render_markdown(
            "intro\n#card heatmap AAPL\n#card kline AAPL 5Y\n#card peers AAPL\n",
            &DirectiveParser::default(),
            &Registry::standard(),
        )
        .expect("render succeeds");

        let codes = result
            .errors
            .iter()
            .map(|error| (error.code.as_str(), error.line))
            .collect::<Vec<_>>();
        assert_eq!(
            codes,
            vec![
                ("directive.unknown_type", Some(2)),
                ("directive.invalid_args", Some(3)),
            ]
        );
        assert_eq!(result.data["widget_count"], 1);
        assert_eq!(result.data["blocks"][0]["kind"], "text");
        assert!(result.text.starts_with("intro\n[unknown card type: heatmap]\n"));
    }
}
