//! Plain-text rendition of a rendered document for terminals.
//!
//! Text runs are copied verbatim; each widget becomes a framed block.

use std::fmt::{self, Display, Formatter};

use crate::dispatch::{Block, RenderedDocument};
use crate::domain::{
    AnalystRating, CompanyProfile, EarningsHistory, Fundamentals, NewsFeed, OrderBook,
    PeerComparison, StockInfo,
};
use crate::widget::{KlineChart, Widget};

pub fn render_document(document: &RenderedDocument) -> String {
    let mut out = String::new();
    for block in &document.blocks {
        match block {
            Block::Text { text } => out.push_str(text),
            Block::Widget { widget, .. } => out.push_str(&render_widget(widget)),
        }
    }
    out
}

/// Framed block for one widget; always ends with a newline.
pub fn render_widget(widget: &Widget) -> String {
    Framed(widget).to_string()
}

struct Framed<'a>(&'a Widget);

impl Display for Framed<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Widget::StockInfo(info) => stock_info(f, info),
            Widget::KlineChart(chart) => kline(f, chart),
            Widget::CompanyProfile(profile) => company(f, profile),
            Widget::Fundamentals(snapshot) => fundamentals(f, snapshot),
            Widget::OrderBook(book) => order_book(f, book),
            Widget::News(feed) => news(f, feed),
            Widget::AnalystRatings(rating) => ratings(f, rating),
            Widget::Earnings(history) => earnings(f, history),
            Widget::Peers(comparison) => peers(f, comparison),
            Widget::UnknownDirective { type_name } => {
                writeln!(f, "[unknown card type: {type_name}]")
            }
            Widget::DirectiveError { message, usage } => {
                writeln!(f, "[card error: {message}]")?;
                writeln!(f, "  expected: {usage}")
            }
        }
    }
}

fn header(f: &mut Formatter<'_>, title: &str, right: &str) -> fmt::Result {
    writeln!(f, "┌─ {title} ─ {right}")
}

fn footer(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "└─")
}

fn stock_info(f: &mut Formatter<'_>, info: &StockInfo) -> fmt::Result {
    header(f, &info.name, &info.symbol)?;
    writeln!(
        f,
        "│ ${:.2}  {:+.2} ({:+.2}%)",
        info.price, info.change, info.change_percent
    )?;
    writeln!(
        f,
        "│ Mkt Cap {}  Vol {}  P/E {:.0}  52W {:.2} - {:.2}",
        info.market_cap, info.volume, info.pe_ratio, info.low_52w, info.high_52w
    )?;
    footer(f)
}

fn kline(f: &mut Formatter<'_>, chart: &KlineChart) -> fmt::Result {
    header(f, &chart.title, &chart.caption)?;
    writeln!(
        f,
        "│ {:<7} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "date", "open", "high", "low", "close", "volume"
    )?;
    for candle in &chart.candles {
        let marker = if candle.is_bullish() { '▲' } else { '▼' };
        writeln!(
            f,
            "│ {:<7} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>9} {marker}",
            candle.label, candle.open, candle.high, candle.low, candle.close, candle.volume
        )?;
    }
    footer(f)
}

fn company(f: &mut Formatter<'_>, profile: &CompanyProfile) -> fmt::Result {
    header(f, &profile.name, &profile.symbol)?;
    writeln!(f, "│ {} · {}", profile.sector, profile.industry)?;
    writeln!(f, "│ {}", profile.description)?;
    writeln!(
        f,
        "│ CEO {}  Employees {}  HQ {}  {}",
        profile.ceo, profile.employees, profile.headquarters, profile.website
    )?;
    footer(f)
}

fn fundamentals(f: &mut Formatter<'_>, snapshot: &Fundamentals) -> fmt::Result {
    header(f, "Fundamentals", &snapshot.symbol)?;
    writeln!(
        f,
        "│ P/E {:.2}  EPS {:.2}  Div {:.2}%  Beta {:.2}",
        snapshot.pe_ratio, snapshot.eps, snapshot.dividend_yield, snapshot.beta
    )?;
    writeln!(
        f,
        "│ Mkt Cap {}  Revenue {}  Margin {:.0}%  P/B {:.2}",
        snapshot.market_cap, snapshot.revenue, snapshot.profit_margin, snapshot.price_to_book
    )?;
    footer(f)
}

fn order_book(f: &mut Formatter<'_>, book: &OrderBook) -> fmt::Result {
    header(f, "Order Book", &book.symbol)?;
    // Deepest ask on top so the touch sits next to the reference price.
    for level in book.asks.iter().rev() {
        writeln!(
            f,
            "│ ask {:>9.2} {:>6} {}",
            level.price,
            level.size,
            depth_bar(level.percent)
        )?;
    }
    writeln!(f, "│ ──── {:.2} ────", book.price)?;
    for level in &book.bids {
        writeln!(
            f,
            "│ bid {:>9.2} {:>6} {}",
            level.price,
            level.size,
            depth_bar(level.percent)
        )?;
    }
    footer(f)
}

fn depth_bar(percent: f64) -> String {
    let width = (percent / 5.0).round().clamp(0.0, 20.0) as usize;
    "█".repeat(width)
}

fn news(f: &mut Formatter<'_>, feed: &NewsFeed) -> fmt::Result {
    header(f, "Latest News", &feed.symbol)?;
    for item in &feed.items {
        writeln!(
            f,
            "│ [{}] {} ({}, {})",
            item.sentiment.as_str(),
            item.title,
            item.source,
            item.time
        )?;
        writeln!(f, "│     {}", item.summary)?;
    }
    footer(f)
}

fn ratings(f: &mut Formatter<'_>, rating: &AnalystRating) -> fmt::Result {
    header(
        f,
        "Analyst Consensus",
        &format!("{} · {} Analysts", rating.symbol, rating.total_analysts),
    )?;
    for (label, count) in [
        ("Strong Buy", rating.strong_buy),
        ("Buy", rating.buy),
        ("Hold", rating.hold),
        ("Sell", rating.sell),
    ] {
        writeln!(
            f,
            "│ {label:>10} {count:>3} {}",
            depth_bar(rating.share(count))
        )?;
    }
    writeln!(
        f,
        "│ Avg Target ${:.2} (${:.0} - ${:.0})",
        rating.target_avg, rating.target_low, rating.target_high
    )?;
    footer(f)
}

fn earnings(f: &mut Formatter<'_>, history: &EarningsHistory) -> fmt::Result {
    header(f, "Earnings", &history.symbol)?;
    for quarter in &history.quarters {
        writeln!(
            f,
            "│ {} est {:.2} act {:.2} surprise {:+.1}% {}",
            quarter.quarter,
            quarter.estimate,
            quarter.actual,
            quarter.surprise_percent,
            if quarter.is_beat() { "beat" } else { "miss" }
        )?;
    }
    footer(f)
}

fn peers(f: &mut Formatter<'_>, comparison: &PeerComparison) -> fmt::Result {
    header(f, "Peer Comparison", &comparison.symbol)?;
    for peer in &comparison.peers {
        writeln!(
            f,
            "│ {:<6} {:<16} ${:>8.2} {:+.2}% {}",
            peer.symbol, peer.name, peer.price, peer.change_percent, peer.market_cap
        )?;
    }
    footer(f)
}
