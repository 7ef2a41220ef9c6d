//! Core contracts for cardmark.
//!
//! This crate contains:
//! - The `#card` directive parser and the card registry
//! - Deterministic, seeded market data synthesis
//! - The rendering dispatcher and a plain-text widget rendition
//! - Response envelope and structured errors
//! - The text generation collaborator and its HTTP transport

pub mod dispatch;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod generation;
pub mod http_client;
pub mod parser;
pub mod registry;
pub mod seed;
pub mod synth;
pub mod text;
pub mod widget;

pub use dispatch::{
    render_document, Block, Dispatcher, Notice, RenderedDocument, INVALID_ARGS_CODE,
    UNKNOWN_TYPE_CODE,
};
pub use domain::{
    AnalystRating, Candle, CandleSeries, ChartRange, CompanyProfile, EarningsHistory,
    EarningsQuarter, Fundamentals, NewsFeed, NewsItem, OrderBook, OrderBookLevel,
    PeerComparison, PeerStock, Sentiment, StockInfo, Symbol,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, ValidationError};
pub use generation::{
    system_instruction, GeminiGenerator, GenerationConfig, GenerationError, TextGenerator,
};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use parser::{DirectiveParser, ParsedDirective, ParserConfig, Segment, TextSpan};
pub use registry::{
    CardKind, Descriptor, Parameter, ParameterKind, Registry, DIRECTIVE_MARKER,
};
pub use seed::{next_value, symbol_seed, Seed};
pub use widget::{KlineChart, Widget};
