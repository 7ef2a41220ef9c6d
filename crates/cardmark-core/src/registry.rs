//! # Directive Registry
//!
//! The catalog of card types a document may reference. Each [`Descriptor`]
//! carries the metadata shown to authors (label, usage, template), the
//! parameter schema, and the validate/render pair.
//!
//! The registry is an ordinary immutable value. Build it once with
//! [`Registry::standard`] (or [`Registry::from_descriptors`] for a reduced
//! catalog) and share it by reference; it has no interior mutability, so any
//! number of renders may read it concurrently.
//!
//! ```rust
//! use cardmark_core::Registry;
//!
//! let registry = Registry::standard();
//! let kline = registry.lookup("kline").expect("built-in type");
//! assert_eq!(kline.usage, "#card kline <SYMBOL> [RANGE]");
//! assert!(registry.lookup("not_a_real_type").is_none());
//! ```

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::{ChartRange, Symbol};
use crate::widget::{KlineChart, Widget};
use crate::{synth, ValidationError};

/// Marker token that opens a directive line.
pub const DIRECTIVE_MARKER: &str = "#card";

const SYMBOL_PARAMETER: Parameter = Parameter {
    name: "symbol",
    label: "Stock Symbol",
    kind: ParameterKind::Text,
    required: true,
    choices: &[],
    default: "AAPL",
    description: Some("Ticker symbol (e.g. MSFT, TSLA)"),
};

const RANGE_PARAMETER: Parameter = Parameter {
    name: "range",
    label: "Time Range",
    kind: ParameterKind::Choice,
    required: false,
    choices: &["1D", "1W", "1M", "1Y"],
    default: "1D",
    description: Some("Candlestick interval"),
};

/// Built-in card types. The tag selects the validator and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    StockInfo,
    Kline,
    Company,
    Fundamentals,
    OrderBook,
    News,
    Ratings,
    Earnings,
    Peers,
}

impl CardKind {
    pub const ALL: [Self; 9] = [
        Self::StockInfo,
        Self::Kline,
        Self::Company,
        Self::Fundamentals,
        Self::OrderBook,
        Self::News,
        Self::Ratings,
        Self::Earnings,
        Self::Peers,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StockInfo => "stockinfo",
            Self::Kline => "kline",
            Self::Company => "company",
            Self::Fundamentals => "fundamentals",
            Self::OrderBook => "orderbook",
            Self::News => "news",
            Self::Ratings => "ratings",
            Self::Earnings => "earnings",
            Self::Peers => "peers",
        }
    }

    /// Standard descriptor for this kind.
    pub fn descriptor(self) -> Descriptor {
        let (label, description, usage, template) = match self {
            Self::StockInfo => (
                "Stock Info",
                "Insert stock price summary",
                "#card stockinfo <SYMBOL>",
                "#card stockinfo AAPL",
            ),
            Self::Kline => (
                "Kline Chart",
                "Insert candlestick chart",
                "#card kline <SYMBOL> [RANGE]",
                "#card kline AAPL 1D",
            ),
            Self::Company => (
                "Company Profile",
                "Insert company details",
                "#card company <SYMBOL>",
                "#card company AAPL",
            ),
            Self::Fundamentals => (
                "Fundamentals",
                "Insert financial metrics",
                "#card fundamentals <SYMBOL>",
                "#card fundamentals AAPL",
            ),
            Self::OrderBook => (
                "Order Book",
                "Insert market depth",
                "#card orderbook <SYMBOL>",
                "#card orderbook AAPL",
            ),
            Self::News => (
                "Latest News",
                "Insert recent news headlines",
                "#card news <SYMBOL>",
                "#card news AAPL",
            ),
            Self::Ratings => (
                "Analyst Ratings",
                "Insert analyst consensus",
                "#card ratings <SYMBOL>",
                "#card ratings AAPL",
            ),
            Self::Earnings => (
                "Earnings",
                "Insert EPS history",
                "#card earnings <SYMBOL>",
                "#card earnings AAPL",
            ),
            Self::Peers => (
                "Peer Comp",
                "Insert sector comparison",
                "#card peers <SYMBOL>",
                "#card peers AAPL",
            ),
        };

        let parameters = match self {
            Self::Kline => vec![SYMBOL_PARAMETER, RANGE_PARAMETER],
            _ => vec![SYMBOL_PARAMETER],
        };

        Descriptor {
            kind: self,
            type_name: self.as_str(),
            label,
            description,
            usage,
            template,
            parameters,
        }
    }

    /// Builds the card body. Calls exactly one synthesizer, keyed by `symbol`.
    fn render(self, symbol: &Symbol, range: ChartRange) -> Widget {
        let key = symbol.as_str();
        match self {
            Self::StockInfo => Widget::StockInfo(synth::stock_info(key)),
            Self::Kline => {
                let series = synth::candles(key);
                Widget::KlineChart(KlineChart {
                    title: format!("{} • {} Kline", series.symbol, range.cadence()),
                    caption: range.span_caption(series.candles.len()),
                    symbol: series.symbol,
                    range,
                    candles: series.candles,
                })
            }
            Self::Company => Widget::CompanyProfile(synth::company_profile(key)),
            Self::Fundamentals => Widget::Fundamentals(synth::fundamentals(key)),
            Self::OrderBook => Widget::OrderBook(synth::order_book(key)),
            Self::News => Widget::News(synth::news(key)),
            Self::Ratings => Widget::AnalystRatings(synth::analyst_ratings(key)),
            Self::Earnings => Widget::Earnings(synth::earnings(key)),
            Self::Peers => Widget::Peers(synth::peers(key)),
        }
    }
}

impl Display for CardKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Free text, e.g. a ticker.
    Text,
    /// One of a fixed list of choices.
    Choice,
}

/// One positional directive argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ParameterKind,
    pub required: bool,
    #[serde(skip_serializing_if = "no_choices")]
    pub choices: &'static [&'static str],
    pub default: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

fn no_choices(choices: &&'static [&'static str]) -> bool {
    choices.is_empty()
}

impl Parameter {
    /// Checks presence and choice membership of a single argument.
    pub fn check(&self, value: Option<&str>) -> Result<(), String> {
        match value {
            None if self.required => Err(format!("Missing {} parameter", self.label)),
            Some(value)
                if self.kind == ParameterKind::Choice
                    && !self
                        .choices
                        .iter()
                        .any(|choice| choice.eq_ignore_ascii_case(value)) =>
            {
                Err(format!(
                    "Invalid {} parameter '{value}', expected one of {}",
                    self.label,
                    self.choices.join(", ")
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Static record describing one directive type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    #[serde(skip)]
    pub kind: CardKind,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub template: &'static str,
    pub parameters: Vec<Parameter>,
}

/// Arguments after conversion from their wire strings.
struct CardArgs {
    symbol: Symbol,
    range: ChartRange,
}

impl Descriptor {
    /// Returns a human-readable message when `args` cannot be rendered.
    ///
    /// Looks only at argument count and shape; never builds card data.
    pub fn validate(&self, args: &[String]) -> Option<String> {
        self.card_args(args).err()
    }

    /// Renders the card for `args`.
    ///
    /// Arguments that fail validation yield [`Widget::DirectiveError`], so
    /// this is safe to call without a prior [`validate`](Self::validate).
    pub fn render(&self, args: &[String]) -> Widget {
        match self.card_args(args) {
            Ok(CardArgs { symbol, range }) => self.kind.render(&symbol, range),
            Err(message) => Widget::DirectiveError {
                message,
                usage: self.usage.to_owned(),
            },
        }
    }

    /// Parameter defaults, in positional order.
    pub fn default_args(&self) -> Vec<String> {
        self.parameters
            .iter()
            .map(|parameter| parameter.default.to_owned())
            .collect()
    }

    /// Builds `#card <type> <values…>`, skipping blank values.
    pub fn directive_line<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut line = format!("{DIRECTIVE_MARKER} {}", self.type_name);
        for value in values {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            line.push(' ');
            line.push_str(value);
        }
        line
    }

    fn card_args(&self, args: &[String]) -> Result<CardArgs, String> {
        for (index, parameter) in self.parameters.iter().enumerate() {
            parameter.check(args.get(index).map(String::as_str))?;
        }

        let raw_symbol = args
            .first()
            .ok_or_else(|| format!("Missing {} parameter", SYMBOL_PARAMETER.label))?;
        let symbol = Symbol::from_arg(raw_symbol).map_err(|error| match error {
            ValidationError::InvalidSymbol { value, reason } => {
                format!("Invalid {} parameter '{value}': {reason}", SYMBOL_PARAMETER.label)
            }
            other => other.to_string(),
        })?;

        let range = match (self.kind, args.get(1)) {
            (CardKind::Kline, Some(raw)) => raw
                .parse::<ChartRange>()
                .map_err(|error| error.to_string())?,
            _ => ChartRange::default(),
        };

        Ok(CardArgs { symbol, range })
    }
}

/// Ordered, read-only catalog of descriptors keyed by type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    descriptors: Vec<Descriptor>,
}

impl Registry {
    /// The nine built-in card types, in menu order.
    pub fn standard() -> Self {
        Self {
            descriptors: CardKind::ALL.iter().map(|kind| kind.descriptor()).collect(),
        }
    }

    /// Builds a catalog from explicit descriptors, rejecting duplicate types.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = Descriptor>,
    ) -> Result<Self, ValidationError> {
        let descriptors = descriptors.into_iter().collect::<Vec<_>>();
        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            if !seen.insert(descriptor.type_name) {
                return Err(ValidationError::DuplicateDirectiveType {
                    type_name: descriptor.type_name.to_owned(),
                });
            }
        }

        Ok(Self { descriptors })
    }

    /// Exact, case-sensitive lookup by type name.
    pub fn lookup(&self, type_name: &str) -> Option<&Descriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.type_name == type_name)
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
