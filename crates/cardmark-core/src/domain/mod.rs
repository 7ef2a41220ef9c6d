//! # Domain Models
//!
//! Typed values shared by the synthesizers, the registry and the widgets.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker taken from a directive argument |
//! | [`ChartRange`] | Presentation range of a candlestick card |
//! | [`StockInfo`] | Quote summary |
//! | [`CandleSeries`] | 30 OHLCV points |
//! | [`CompanyProfile`] | Company details |
//! | [`Fundamentals`] | Valuation snapshot |
//! | [`OrderBook`] | Market depth |
//! | [`NewsFeed`] | Recent headlines |
//! | [`AnalystRating`] | Analyst consensus and price targets |
//! | [`EarningsHistory`] | EPS estimate vs actual |
//! | [`PeerComparison`] | Sector peers |
//!
//! Records are plain values: they carry no identity beyond their fields and
//! are recomputed on every render.

mod models;
mod range;
mod symbol;

pub use models::{
    AnalystRating, Candle, CandleSeries, CompanyProfile, EarningsHistory, EarningsQuarter,
    Fundamentals, NewsFeed, NewsItem, OrderBook, OrderBookLevel, PeerComparison, PeerStock,
    Sentiment, StockInfo,
};
pub use range::ChartRange;
pub use symbol::Symbol;
