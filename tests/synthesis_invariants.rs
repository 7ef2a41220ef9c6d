//! Invariants every synthesized record must hold
//!
//! Each check runs across a spread of tickers, including awkward ones, since
//! the generators accept any string.

use cardmark_core::{next_value, symbol_seed, synth};

const SYMBOLS: [&str; 10] = [
    "AAPL", "MSFT", "TSLA", "GOOGL", "brk.b", "X", "", "ZZZZZZZZZZZZZZZ", "NVDA", "meta",
];

#[test]
fn every_generator_is_deterministic() {
    for symbol in SYMBOLS {
        assert_eq!(synth::stock_info(symbol), synth::stock_info(symbol));
        assert_eq!(synth::candles(symbol), synth::candles(symbol));
        assert_eq!(synth::company_profile(symbol), synth::company_profile(symbol));
        assert_eq!(synth::fundamentals(symbol), synth::fundamentals(symbol));
        assert_eq!(synth::order_book(symbol), synth::order_book(symbol));
        assert_eq!(synth::news(symbol), synth::news(symbol));
        assert_eq!(synth::analyst_ratings(symbol), synth::analyst_ratings(symbol));
        assert_eq!(synth::earnings(symbol), synth::earnings(symbol));
        assert_eq!(synth::peers(symbol), synth::peers(symbol));
    }
}

#[test]
fn symbol_case_does_not_change_the_data() {
    assert_eq!(synth::fundamentals("tsla"), synth::fundamentals("TSLA"));
    assert_eq!(synth::candles("aapl"), synth::candles("AAPL"));
}

#[test]
fn seeded_values_stay_in_unit_interval() {
    for symbol in SYMBOLS {
        let seed = symbol_seed(symbol);
        for offset in 0..64 {
            let value = next_value(seed + offset);
            assert!((0.0..1.0).contains(&value));
        }
    }
}

#[test]
fn every_candle_brackets_its_body() {
    for symbol in SYMBOLS {
        let series = synth::candles(symbol);
        assert_eq!(series.candles.len(), synth::CANDLE_COUNT);
        for candle in &series.candles {
            assert!(candle.low <= candle.open.min(candle.close), "{symbol} {candle:?}");
            assert!(candle.high >= candle.open.max(candle.close), "{symbol} {candle:?}");
            assert!(candle.volume > 0);
        }
    }
}

#[test]
fn order_book_accumulates_from_the_touch() {
    for symbol in SYMBOLS {
        let book = synth::order_book(symbol);
        for side in [&book.asks, &book.bids] {
            let mut running = 0;
            for level in side.iter() {
                running += level.size;
                assert_eq!(level.total, running);
                assert!((0.0..=100.0).contains(&level.percent));
            }
            assert!(side.windows(2).all(|pair| pair[0].percent <= pair[1].percent));
            let deepest = side.last().expect("depth levels");
            assert!((deepest.percent - 100.0).abs() < 1e-9);
        }
        assert!(book.asks.windows(2).all(|pair| pair[0].price < pair[1].price));
        assert!(book.bids.windows(2).all(|pair| pair[0].price > pair[1].price));
        assert!(book.spread().is_some_and(|spread| spread > 0.0));
    }
}

#[test]
fn analyst_panel_adds_up() {
    for symbol in SYMBOLS {
        let rating = synth::analyst_ratings(symbol);
        assert_eq!(
            rating.strong_buy + rating.buy + rating.hold + rating.sell,
            rating.total_analysts
        );
        assert!(rating.target_low <= rating.target_avg && rating.target_avg <= rating.target_high);
    }
}

#[test]
fn quote_stays_within_its_yearly_range() {
    for symbol in SYMBOLS {
        let info = synth::stock_info(symbol);
        assert!(info.low_52w <= info.price && info.price <= info.high_52w);
        assert!(info.change.signum() == info.change_percent.signum() || info.change == 0.0);
    }
}

#[test]
fn earnings_surprise_follows_actual_and_estimate() {
    for symbol in SYMBOLS {
        for quarter in synth::earnings(symbol).quarters {
            let expected = (quarter.actual - quarter.estimate) / quarter.estimate * 100.0;
            assert!((quarter.surprise_percent - expected).abs() < 1e-12);
        }
    }
}

#[test]
fn peers_never_include_the_queried_symbol() {
    for symbol in ["AAPL", "MSFT", "tsla", "NVDA", "GOOGL"] {
        let comparison = synth::peers(symbol);
        assert_eq!(comparison.peers.len(), 3);
        assert!(comparison
            .peers
            .iter()
            .all(|peer| !peer.symbol.eq_ignore_ascii_case(symbol)));
    }
}

#[test]
fn empty_symbol_uses_seed_zero() {
    assert_eq!(symbol_seed(""), 0);
    let info = synth::stock_info("");
    assert_eq!(info.price, 50.0);
    assert_eq!(info.symbol, "");
}
