use crate::domain::{
    AnalystRating, CompanyProfile, EarningsHistory, EarningsQuarter, Fundamentals, NewsFeed,
    NewsItem, Sentiment,
};
use crate::seed::{draw, symbol_seed};

use super::{company_name, trillions};

/// (quarter, estimate offset, actual offset) over the base EPS.
const EARNINGS_PATTERN: [(&str, f64, f64); 4] = [
    ("Q1", 0.0, 0.2),
    ("Q2", 0.1, 0.4),
    ("Q3", 0.3, 0.2),
    ("Q4", 0.5, 0.8),
];

pub fn company_profile(symbol: &str) -> CompanyProfile {
    let display = symbol.to_uppercase();
    let name = company_name(&display);

    let ceo = match display.as_str() {
        "AAPL" => "Tim Cook",
        "TSLA" => "Elon Musk",
        _ => "John Doe",
    };
    let headquarters = match display.as_str() {
        "AAPL" => "Cupertino, CA",
        _ => "USA",
    };

    CompanyProfile {
        description: format!(
            "{name} designs, manufactures, and markets smartphones, personal computers, \
             tablets, wearables, and accessories worldwide."
        ),
        website: format!("www.{}.com", display.to_lowercase()),
        symbol: display,
        name,
        sector: String::from("Technology"),
        industry: String::from("Consumer Electronics"),
        ceo: ceo.to_owned(),
        employees: String::from("164,000"),
        headquarters: headquarters.to_owned(),
    }
}

pub fn fundamentals(symbol: &str) -> Fundamentals {
    let seed = symbol_seed(symbol);

    Fundamentals {
        symbol: symbol.to_uppercase(),
        pe_ratio: (20 + seed % 30) as f64,
        eps: (3 + seed % 10) as f64,
        dividend_yield: (seed % 5) as f64 / 2.0,
        beta: 0.8 + (seed % 10) as f64 / 10.0,
        market_cap: trillions(1.0 + (seed % 100) as f64 / 10.0),
        revenue: format!("{:.1}B", (50 + seed % 200) as f64),
        profit_margin: (15 + seed % 20) as f64,
        price_to_book: (5 + seed % 20) as f64,
    }
}

pub fn news(symbol: &str) -> NewsFeed {
    let display = symbol.to_uppercase();
    let items = vec![
        NewsItem {
            id: String::from("1"),
            title: format!("{display} Reports Strong Quarterly Earnings Beat"),
            source: String::from("Finance Daily"),
            time: String::from("2 hours ago"),
            sentiment: Sentiment::Positive,
            summary: format!(
                "Analysts are optimistic after {display} posted revenue figures that exceeded \
                 Wall Street expectations by 5%."
            ),
        },
        NewsItem {
            id: String::from("2"),
            title: format!("Market Volatility Affects Tech Sector: {display} Dips Slightly"),
            source: String::from("MarketWatch"),
            time: String::from("5 hours ago"),
            sentiment: Sentiment::Neutral,
            summary: String::from(
                "The broader technology sector faced headwinds today as bond yields rose, \
                 impacting growth stocks.",
            ),
        },
        NewsItem {
            id: String::from("3"),
            title: format!("New Product Rumors Swirl Around {display}"),
            source: String::from("TechInsider"),
            time: String::from("1 day ago"),
            sentiment: Sentiment::Positive,
            summary: format!(
                "Supply chain leaks suggest {display} is ramping up production for a \
                 revolutionary new device."
            ),
        },
    ];

    NewsFeed {
        symbol: display,
        items,
    }
}

pub fn analyst_ratings(symbol: &str) -> AnalystRating {
    let seed = symbol_seed(symbol);
    let reference = (150 + seed % 100) as f64;

    let strong_buy = 10 + (draw(seed, 11) * 10.0) as u32;
    let buy = 6 + (draw(seed, 12) * 8.0) as u32;
    let hold = 4 + (draw(seed, 13) * 8.0) as u32;
    let sell = (draw(seed, 14) * 4.0) as u32;

    AnalystRating {
        symbol: symbol.to_uppercase(),
        strong_buy,
        buy,
        hold,
        sell,
        total_analysts: strong_buy + buy + hold + sell,
        target_high: reference * 1.3,
        target_low: reference * 0.85,
        target_avg: reference * 1.15,
    }
}

pub fn earnings(symbol: &str) -> EarningsHistory {
    let seed = symbol_seed(symbol);
    let base_eps = (2 + seed % 5) as f64;

    let quarters = EARNINGS_PATTERN
        .iter()
        .map(|(quarter, estimate_offset, actual_offset)| {
            let estimate = base_eps + estimate_offset;
            let actual = base_eps + actual_offset;
            EarningsQuarter {
                quarter: (*quarter).to_owned(),
                estimate,
                actual,
                surprise_percent: (actual - estimate) / estimate * 100.0,
            }
        })
        .collect();

    EarningsHistory {
        symbol: symbol.to_uppercase(),
        quarters,
    }
}
