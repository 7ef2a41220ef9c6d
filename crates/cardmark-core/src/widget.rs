use serde::{Deserialize, Serialize};

use crate::domain::{
    AnalystRating, Candle, ChartRange, CompanyProfile, EarningsHistory, Fundamentals, NewsFeed,
    OrderBook, PeerComparison, StockInfo,
};

/// Candlestick chart payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KlineChart {
    pub symbol: String,
    pub range: ChartRange,
    /// `TSLA • Weekly Kline`
    pub title: String,
    /// `Last 30 Periods`
    pub caption: String,
    pub candles: Vec<Candle>,
}

/// Structured output substituted for a directive line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    StockInfo(StockInfo),
    KlineChart(KlineChart),
    CompanyProfile(CompanyProfile),
    Fundamentals(Fundamentals),
    OrderBook(OrderBook),
    News(NewsFeed),
    AnalystRatings(AnalystRating),
    Earnings(EarningsHistory),
    Peers(PeerComparison),
    /// The directive named a type the registry does not know.
    UnknownDirective { type_name: String },
    /// The directive's arguments were rejected before any data was built.
    DirectiveError { message: String, usage: String },
}

impl Widget {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::StockInfo(_) => "stock_info",
            Self::KlineChart(_) => "kline_chart",
            Self::CompanyProfile(_) => "company_profile",
            Self::Fundamentals(_) => "fundamentals",
            Self::OrderBook(_) => "order_book",
            Self::News(_) => "news",
            Self::AnalystRatings(_) => "analyst_ratings",
            Self::Earnings(_) => "earnings",
            Self::Peers(_) => "peers",
            Self::UnknownDirective { .. } => "unknown_directive",
            Self::DirectiveError { .. } => "directive_error",
        }
    }

    /// Whether this widget is an inline notice rather than card content.
    pub const fn is_notice(&self) -> bool {
        matches!(
            self,
            Self::UnknownDirective { .. } | Self::DirectiveError { .. }
        )
    }
}
