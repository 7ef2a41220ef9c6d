use serde::{Deserialize, Serialize};

/// Price summary shown by the `stockinfo` card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: String,
    pub volume: String,
    pub pe_ratio: f64,
    pub high_52w: f64,
    pub low_52w: f64,
}

/// One OHLCV point of a synthesized series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// ISO calendar date (`2024-01-05`).
    pub date: String,
    /// Axis label (`Jan 5`).
    pub label: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Ordered candle series for a symbol, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    pub symbol: String,
    pub candles: Vec<Candle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub description: String,
    pub ceo: String,
    pub employees: String,
    pub headquarters: String,
    pub website: String,
}

/// Valuation and profitability snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub symbol: String,
    pub pe_ratio: f64,
    pub eps: f64,
    pub dividend_yield: f64,
    pub beta: f64,
    pub market_cap: String,
    pub revenue: String,
    pub profit_margin: f64,
    pub price_to_book: f64,
}

/// A single depth level.
///
/// `total` is the cumulative size from the touch down to this level and
/// `percent` is `total` relative to the whole side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub price: f64,
    pub size: u64,
    pub total: u64,
    pub percent: f64,
}

/// Market depth around a reference price.
///
/// Both sides start at the touch: `asks[0]` is the lowest ask and `bids[0]`
/// the highest bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub symbol: String,
    pub price: f64,
    pub asks: Vec<OrderBookLevel>,
    pub bids: Vec<OrderBookLevel>,
}

impl OrderBook {
    /// Distance between the best ask and the best bid.
    pub fn spread(&self) -> Option<f64> {
        let ask = self.asks.first()?;
        let bid = self.bids.first()?;
        Some(ask.price - bid.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub time: String,
    pub sentiment: Sentiment,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub symbol: String,
    pub items: Vec<NewsItem>,
}

/// Analyst consensus. The four buckets always add up to `total_analysts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystRating {
    pub symbol: String,
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub total_analysts: u32,
    pub target_high: f64,
    pub target_low: f64,
    pub target_avg: f64,
}

impl AnalystRating {
    /// Share of `count` in the whole panel, in percent.
    pub fn share(&self, count: u32) -> f64 {
        if self.total_analysts == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(self.total_analysts) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsQuarter {
    pub quarter: String,
    pub estimate: f64,
    pub actual: f64,
    pub surprise_percent: f64,
}

impl EarningsQuarter {
    pub fn is_beat(&self) -> bool {
        self.actual >= self.estimate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsHistory {
    pub symbol: String,
    pub quarters: Vec<EarningsQuarter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerStock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub market_cap: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparison {
    pub symbol: String,
    pub peers: Vec<PeerStock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_uses_touch_levels() {
        let level = |price: f64| OrderBookLevel {
            price,
            size: 100,
            total: 100,
            percent: 100.0,
        };
        let book = OrderBook {
            symbol: String::from("AAPL"),
            price: 100.0,
            asks: vec![level(100.05), level(100.15)],
            bids: vec![level(99.95), level(99.85)],
        };

        let spread = book.spread().expect("both sides present");
        assert!((spread - 0.10).abs() < 1e-9);
    }

    #[test]
    fn share_of_empty_panel_is_zero() {
        let rating = AnalystRating {
            symbol: String::from("X"),
            strong_buy: 0,
            buy: 0,
            hold: 0,
            sell: 0,
            total_analysts: 0,
            target_high: 0.0,
            target_low: 0.0,
            target_avg: 0.0,
        };
        assert_eq!(rating.share(0), 0.0);
    }

    #[test]
    fn sentiment_serializes_snake_case() {
        let json = serde_json::to_string(&Sentiment::Positive).expect("serialize");
        assert_eq!(json, "\"positive\"");
    }
}
