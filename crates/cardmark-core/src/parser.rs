//! Directive parser.
//!
//! Classifies each line of a document independently. A directive line starts
//! at column 0 with the marker token, then at least one whitespace character,
//! then the card type (`[A-Za-z0-9_]+`); the rest of the line, split on
//! whitespace, is the argument list. Every other line is text and is kept
//! byte-for-byte. The parser does no lookup or validation.

use std::ops::Range;

use serde::Serialize;

use crate::registry::DIRECTIVE_MARKER;
use crate::ValidationError;

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    marker: String,
}

impl ParserConfig {
    pub fn with_marker(marker: impl Into<String>) -> Result<Self, ValidationError> {
        let marker = marker.into();
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidMarker);
        }
        Ok(Self { marker })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            marker: DIRECTIVE_MARKER.to_owned(),
        }
    }
}

/// One directive occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDirective {
    pub type_name: String,
    pub args: Vec<String>,
    /// Byte range of the whole line, terminator included.
    pub span: Range<usize>,
    /// 1-based line number.
    pub line: usize,
    /// The line exactly as written.
    pub raw: String,
}

/// Run of consecutive non-directive lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text(TextSpan),
    Directive(ParsedDirective),
}

impl Segment {
    /// The original bytes this segment covers.
    pub fn source_text(&self) -> &str {
        match self {
            Self::Text(span) => &span.text,
            Self::Directive(directive) => &directive.raw,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DirectiveParser {
    config: ParserConfig,
}

impl DirectiveParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Splits `document` into text and directive segments in document order.
    pub fn parse(&self, document: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut pending_text: Option<Range<usize>> = None;
        let mut offset = 0;

        for (index, line) in document.split_inclusive('\n').enumerate() {
            let span = offset..offset + line.len();
            offset = span.end;

            let Some((type_name, args)) = self.classify(line) else {
                pending_text = Some(match pending_text.take() {
                    Some(open) => open.start..span.end,
                    None => span,
                });
                continue;
            };

            if let Some(text) = pending_text.take() {
                segments.push(text_segment(document, text));
            }
            segments.push(Segment::Directive(ParsedDirective {
                type_name,
                args,
                raw: line.to_owned(),
                span,
                line: index + 1,
            }));
        }

        if let Some(text) = pending_text {
            segments.push(text_segment(document, text));
        }

        segments
    }

    /// Only the directives of `document`.
    pub fn directives(&self, document: &str) -> Vec<ParsedDirective> {
        self.parse(document)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Directive(directive) => Some(directive),
                Segment::Text(_) => None,
            })
            .collect()
    }

    fn classify(&self, line: &str) -> Option<(String, Vec<String>)> {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        let rest = content.strip_prefix(self.config.marker.as_str())?;
        let body = rest.trim_start_matches(char::is_whitespace);
        if body.len() == rest.len() {
            return None;
        }

        let type_len = body
            .find(|ch: char| !is_type_char(ch))
            .unwrap_or(body.len());
        if type_len == 0 {
            return None;
        }

        let (type_name, remainder) = body.split_at(type_len);
        let args = remainder.split_whitespace().map(str::to_owned).collect();
        Some((type_name.to_owned(), args))
    }
}

fn is_type_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn text_segment(document: &str, span: Range<usize>) -> Segment {
    Segment::Text(TextSpan {
        text: document[span.clone()].to_owned(),
        span,
    })
}
