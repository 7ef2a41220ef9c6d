//! Rendering dispatcher.
//!
//! Resolves parsed directives against a [`Registry`] and stitches the
//! resulting widgets back between the document's text runs. Directive-level
//! failures never abort a render; they become inline notice widgets.

use serde::Serialize;

use crate::parser::{DirectiveParser, ParsedDirective, Segment};
use crate::registry::Registry;
use crate::widget::Widget;
use crate::CoreError;

/// Notice code for a type missing from the registry.
pub const UNKNOWN_TYPE_CODE: &str = "directive.unknown_type";
/// Notice code for arguments rejected by a validator.
pub const INVALID_ARGS_CODE: &str = "directive.invalid_args";

/// One piece of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Text { text: String },
    Widget { line: usize, widget: Widget },
}

/// A directive that rendered as a notice instead of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub code: &'static str,
    pub line: usize,
    pub message: String,
}

/// Text runs and widgets in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderedDocument {
    pub blocks: Vec<Block>,
}

impl RenderedDocument {
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Widget { widget, .. } => Some(widget),
            Block::Text { .. } => None,
        })
    }

    /// Unknown-type and validation notices, in document order.
    pub fn notices(&self) -> Vec<Notice> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Widget {
                    line,
                    widget: Widget::UnknownDirective { type_name },
                } => Some(Notice {
                    code: UNKNOWN_TYPE_CODE,
                    line: *line,
                    message: format!("line {line}: unknown card type '{type_name}'"),
                }),
                Block::Widget {
                    line,
                    widget: Widget::DirectiveError { message, usage },
                } => Some(Notice {
                    code: INVALID_ARGS_CODE,
                    line: *line,
                    message: format!("line {line}: {message} (expected: {usage})"),
                }),
                _ => None,
            })
            .collect()
    }

    /// Blocks as a JSON array, for hosts that draw widgets themselves.
    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(&self.blocks)?)
    }
}

/// Turns directives into widgets using a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r Registry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Resolves a single directive.
    pub fn dispatch(&self, directive: &ParsedDirective) -> Widget {
        let Some(descriptor) = self.registry.lookup(&directive.type_name) else {
            tracing::warn!(
                type_name = %directive.type_name,
                line = directive.line,
                "unknown card type"
            );
            return Widget::UnknownDirective {
                type_name: directive.type_name.clone(),
            };
        };

        if let Some(message) = descriptor.validate(&directive.args) {
            tracing::warn!(
                type_name = descriptor.type_name,
                line = directive.line,
                %message,
                "card arguments rejected"
            );
            return Widget::DirectiveError {
                message,
                usage: descriptor.usage.to_owned(),
            };
        }

        tracing::debug!(
            type_name = descriptor.type_name,
            line = directive.line,
            args = ?directive.args,
            "rendering card"
        );
        descriptor.render(&directive.args)
    }

    /// Renders parsed segments, keeping text runs verbatim.
    pub fn render_segments(&self, segments: Vec<Segment>) -> RenderedDocument {
        let blocks = segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(span) => Block::Text { text: span.text },
                Segment::Directive(directive) => Block::Widget {
                    line: directive.line,
                    widget: self.dispatch(&directive),
                },
            })
            .collect();

        RenderedDocument { blocks }
    }
}

/// Parses and renders `document` in one pass.
pub fn render_document(
    document: &str,
    parser: &DirectiveParser,
    registry: &Registry,
) -> RenderedDocument {
    let segments = parser.parse(document);
    tracing::debug!(
        segments = segments.len(),
        bytes = document.len(),
        "parsed document"
    );
    Dispatcher::new(registry).render_segments(segments)
}
