//! Deterministic sample data.
//!
//! Nine generators, one per record kind. Each is a pure function of the
//! symbol: it upper-cases the symbol for display, derives the seed once with
//! [`symbol_seed`](crate::seed::symbol_seed) and fans out per-field offsets.
//! Cross-field invariants are built in rather than checked afterwards. None
//! of them can fail; the empty symbol is seed 0.

mod company;
mod market;

pub use company::{analyst_ratings, company_profile, earnings, fundamentals, news};
pub use market::{candles, order_book, peers, stock_info, CANDLE_COUNT, DEPTH_LEVELS, PEER_UNIVERSE};

/// Display name for a ticker.
pub(crate) fn company_name(symbol: &str) -> String {
    match symbol {
        "AAPL" => String::from("Apple Inc."),
        "GOOGL" => String::from("Alphabet Inc."),
        "TSLA" => String::from("Tesla, Inc."),
        "MSFT" => String::from("Microsoft Corp"),
        other => format!("{other} Corporation"),
    }
}

/// Formats a number of trillions the way market cap columns show it.
pub(crate) fn trillions(value: f64) -> String {
    format!("{value:.1}T")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tickers_have_real_names() {
        assert_eq!(company_name("AAPL"), "Apple Inc.");
        assert_eq!(company_name("ZZZ"), "ZZZ Corporation");
    }
}
