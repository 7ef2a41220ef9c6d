//! CLI argument definitions for cardmark.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `render` | Render a markdown document, expanding `#card` directives |
//! | `cards` | List the registered card types |
//! | `insert` | Build a directive line for a card type |
//! | `sample` | Print the sample market report |
//! | `generate` | Draft a report with the hosted text model |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, text) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat directive notices as failures |
//! | `--verbose` | `false` | Debug logging on stderr |
//! | `--timeout-ms` | `30000` | Generation request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Render a note as plain text
//! cardmark render notes.md --format text
//!
//! # Render from stdin and fail on any bad directive
//! cat notes.md | cardmark render --strict
//!
//! # Build a kline directive with the default range
//! cardmark insert kline MSFT
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Markdown notes with live market cards.
///
/// Lines of the form `#card <type> <args…>` expand into market widgets;
/// everything else passes through unchanged.
#[derive(Debug, Parser)]
#[command(
    name = "cardmark",
    author,
    version,
    about = "Render #card directives in markdown into market widgets",
    long_about = "cardmark expands single-line #card directives in markdown notes into \
structured market widgets backed by deterministic sample data.\n\
\n\
Use 'cardmark <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Envelope with metadata, data and errors (default)
    /// - text: Plain-text rendition for terminals
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat directive notices as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log debug events to stderr. `RUST_LOG` takes precedence.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Generation request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 30_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON envelope.
    Json,
    /// Plain text for terminal display.
    Text,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a markdown document.
    ///
    /// Reads PATH, or stdin when PATH is omitted or `-`.
    ///
    ///   cardmark render report.md
    ///   cardmark render - --format text < report.md
    Render(RenderArgs),

    /// List the registered card types with usage and parameters.
    Cards,

    /// Build a directive line for a card type.
    ///
    /// Missing arguments fall back to the parameter defaults.
    ///
    ///   cardmark insert kline MSFT 1W
    ///   cardmark insert stockinfo
    Insert(InsertArgs),

    /// Print the sample market report.
    Sample(SampleArgs),

    /// Draft a market report with the hosted text model.
    ///
    /// Requires the API_KEY environment variable.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Markdown file to render (`-` for stdin).
    pub path: Option<PathBuf>,

    /// Directive marker token.
    #[arg(long, default_value = cardmark_core::DIRECTIVE_MARKER)]
    pub marker: String,
}

#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Card type, e.g. `kline`.
    pub card_type: String,

    /// Positional card arguments.
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Render the report instead of printing its markdown.
    #[arg(long, default_value_t = false)]
    pub render: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What the report should cover.
    pub prompt: String,

    /// Render the generated markdown instead of printing it.
    #[arg(long, default_value_t = false)]
    pub render: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cardmark", "render", "notes.md", "--format", "text", "--strict",
        ])
        .expect("valid arguments");

        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.strict);
        assert_eq!(cli.timeout_ms, 30_000);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.path, Some(PathBuf::from("notes.md")));
        assert_eq!(args.marker, "#card");
    }

    #[test]
    fn insert_collects_trailing_arguments() {
        let cli = Cli::try_parse_from(["cardmark", "insert", "kline", "MSFT", "1W"])
            .expect("valid arguments");
        let Command::Insert(args) = cli.command else {
            panic!("expected insert");
        };
        assert_eq!(args.card_type, "kline");
        assert_eq!(args.args, vec!["MSFT", "1W"]);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cardmark", "cards", "--format", "table"]).is_err());
    }
}
