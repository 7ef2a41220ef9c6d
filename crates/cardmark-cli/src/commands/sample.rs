use cardmark_core::{DirectiveParser, Registry};
use time::{Date, OffsetDateTime};

use crate::cli::SampleArgs;
use crate::error::CliError;

use super::render::render_markdown;
use super::CommandResult;

pub fn run(args: &SampleArgs, registry: &Registry) -> Result<CommandResult, CliError> {
    let markdown = sample_report(OffsetDateTime::now_utc().date());
    if args.render {
        return render_markdown(&markdown, &DirectiveParser::default(), registry);
    }

    let data = serde_json::json!({ "markdown": markdown });
    Ok(CommandResult::ok(data, markdown))
}

/// The starter market report, dated `today`.
pub fn sample_report(today: Date) -> String {
    format!(
        "# Market Analysis Report

Welcome to the **cardmark** editor.

## Market Update
{today}

### Spotlight: Apple (AAPL)
#card stockinfo AAPL

### Order Book Depth
#card orderbook AAPL

### Analyst Consensus
Wall Street remains bullish on the stock.
#card ratings AAPL

### Earnings Performance
A look at the last 4 quarters vs expectations.
#card earnings AAPL

### Peer Comparison
How it stacks up against big tech.
#card peers AAPL

### Recent Headlines
#card news AAPL

### Technicals
#card kline AAPL 1D

"
    )
}
