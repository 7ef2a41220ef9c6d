use time::macros::date;
use time::{Date, Duration};

use crate::domain::{Candle, CandleSeries, OrderBook, OrderBookLevel, PeerComparison, PeerStock, StockInfo};
use crate::seed::{draw, next_value, symbol_seed, Seed};

use super::{company_name, trillions};

/// Points in every candle series.
pub const CANDLE_COUNT: usize = 30;

/// Levels on each side of a synthesized order book.
pub const DEPTH_LEVELS: usize = 8;

/// Tickers peers are drawn from, in preference order.
pub const PEER_UNIVERSE: [&str; 6] = ["MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA"];

const PEER_COUNT: usize = 3;
const TICK: f64 = 0.1;
const HALF_SPREAD: f64 = 0.05;
const ASK_SIZE_OFFSET: Seed = 100;
const SERIES_START: Date = date!(2024 - 01 - 01);

pub fn stock_info(symbol: &str) -> StockInfo {
    let display = symbol.to_uppercase();
    let seed = symbol_seed(symbol);
    let direction = if seed % 2 == 0 { 1.0 } else { -1.0 };
    let level = (seed % 500) as f64;

    StockInfo {
        name: company_name(&display),
        symbol: display,
        // Stays inside [low_52w, high_52w]: 50 + level + [0, 10).
        price: 50.0 + level + next_value(seed) * 10.0,
        change: draw(seed, 1) * 10.0 * direction,
        change_percent: draw(seed, 2) * 5.0 * direction,
        market_cap: trillions(1.0 + (seed % 100) as f64 / 10.0),
        volume: format!("{:.1}M", (10 + seed % 50) as f64),
        pe_ratio: (10 + seed % 50) as f64,
        high_52w: 150.0 + level,
        low_52w: 50.0 + level,
    }
}

pub fn candles(symbol: &str) -> CandleSeries {
    let base = symbol_seed(symbol);
    let candles = (0..CANDLE_COUNT)
        .map(|index| candle_at(base, index))
        .collect();

    CandleSeries {
        symbol: symbol.to_uppercase(),
        candles,
    }
}

fn candle_at(base: Seed, index: usize) -> Candle {
    let seed = base.wrapping_add(index as Seed);
    let anchor = 100.0 + (base % 100) as f64 + (index as f64 * 0.2).sin() * 20.0;

    let open = anchor + (draw(seed, 1) - 0.5) * 5.0;
    let close = open + (draw(seed, 2) - 0.5) * 8.0;
    let high = open.max(close) + draw(seed, 3) * 2.0;
    let low = open.min(close) - draw(seed, 4) * 2.0;
    let volume = (draw(seed, 5) * 1_000_000.0).floor() as u64 + 500_000;

    let day = SERIES_START + Duration::days(index as i64);
    let month = day.month().to_string();

    Candle {
        date: day.to_string(),
        label: format!("{} {}", &month[..3], day.day()),
        open,
        high,
        low,
        close,
        volume,
    }
}

pub fn order_book(symbol: &str) -> OrderBook {
    let seed = symbol_seed(symbol);
    let price = (150 + seed % 100) as f64;

    OrderBook {
        symbol: symbol.to_uppercase(),
        price,
        asks: depth_side(seed, price, true),
        bids: depth_side(seed, price, false),
    }
}

/// Levels ordered from the touch outwards.
fn depth_side(seed: Seed, reference: f64, is_ask: bool) -> Vec<OrderBookLevel> {
    let size_offset = if is_ask { ASK_SIZE_OFFSET } else { 0 };
    let quotes = (0..DEPTH_LEVELS)
        .map(|index| {
            let distance = index as f64 * TICK + HALF_SPREAD;
            let price = if is_ask {
                reference + distance
            } else {
                reference - distance
            };
            let size = (100.0 + draw(seed, index as Seed + size_offset) * 500.0).floor() as u64;
            (price, size)
        })
        .collect::<Vec<_>>();

    let side_total: u64 = quotes.iter().map(|(_, size)| size).sum();
    let mut running = 0_u64;

    quotes
        .into_iter()
        .map(|(price, size)| {
            running += size;
            OrderBookLevel {
                price,
                size,
                total: running,
                percent: running as f64 / side_total as f64 * 100.0,
            }
        })
        .collect()
}

pub fn peers(symbol: &str) -> PeerComparison {
    let display = symbol.to_uppercase();
    let base = symbol_seed(symbol);

    let peers = PEER_UNIVERSE
        .iter()
        .filter(|ticker| **ticker != display)
        .take(PEER_COUNT)
        .map(|ticker| {
            let lead = ticker.chars().next().map_or(0, |ch| ch as Seed);
            let seed = base.wrapping_add(lead);
            PeerStock {
                symbol: (*ticker).to_owned(),
                name: company_name(ticker),
                price: (100 + seed % 400) as f64,
                change_percent: (seed as f64).sin() * 3.0,
                market_cap: trillions(1.0 + (seed % 20) as f64 / 10.0),
            }
        })
        .collect();

    PeerComparison {
        symbol: display,
        peers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_price_sits_inside_52_week_band() {
        for symbol in ["AAPL", "TSLA", "x", "", "BRK.B", "ZZZZZZZZZZZZZZZ"] {
            let info = stock_info(symbol);
            assert!(info.low_52w <= info.price && info.price <= info.high_52w, "{symbol}");
            assert!(info.change * info.change_percent >= 0.0, "{symbol}");
        }
    }

    #[test]
    fn quote_uppercases_display_symbol() {
        let info = stock_info("aapl");
        assert_eq!(info.symbol, "AAPL");
        assert_eq!(info.name, "Apple Inc.");
        assert_eq!(info, stock_info("AAPL"));
    }

    #[test]
    fn series_has_thirty_ascending_dates() {
        let series = candles("TSLA");
        assert_eq!(series.candles.len(), CANDLE_COUNT);
        assert_eq!(series.candles[0].date, "2024-01-01");
        assert_eq!(series.candles[0].label, "Jan 1");
        assert_eq!(series.candles[29].date, "2024-01-30");
        assert!(series
            .candles
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn candles_respect_ohlc_bounds() {
        let series = candles("NVDA");
        for candle in &series.candles {
            assert!(candle.low <= candle.open.min(candle.close));
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.volume >= 500_000);
        }
    }

    #[test]
    fn order_book_sides_start_at_touch() {
        let book = order_book("AAPL");
        assert_eq!(book.asks.len(), DEPTH_LEVELS);
        assert_eq!(book.bids.len(), DEPTH_LEVELS);
        assert!(book.asks.windows(2).all(|w| w[0].price < w[1].price));
        assert!(book.bids.windows(2).all(|w| w[0].price > w[1].price));
        assert!(book.asks[0].price > book.price && book.bids[0].price < book.price);
        assert_eq!(book.asks[DEPTH_LEVELS - 1].percent, 100.0);
        assert_eq!(book.bids[DEPTH_LEVELS - 1].percent, 100.0);
    }

    #[test]
    fn peers_skip_queried_symbol() {
        let comparison = peers("msft");
        let symbols = comparison
            .peers
            .iter()
            .map(|peer| peer.symbol.as_str())
            .collect::<Vec<_>>();
        assert_eq!(symbols, vec!["GOOGL", "AMZN", "NVDA"]);
    }

    #[test]
    fn peers_for_outsider_take_first_three() {
        let comparison = peers("IBM");
        assert_eq!(comparison.peers.len(), 3);
        assert_eq!(comparison.peers[0].symbol, "MSFT");
        assert_eq!(comparison.peers[0].name, "Microsoft Corp");
    }
}
