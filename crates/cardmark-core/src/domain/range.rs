use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Display framing for candlestick widgets.
///
/// The range never changes the synthesized candles, only the chart labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartRange {
    #[default]
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "1Y")]
    OneYear,
}

impl ChartRange {
    pub const ALL: [Self; 4] = [Self::OneDay, Self::OneWeek, Self::OneMonth, Self::OneYear];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::OneYear => "1Y",
        }
    }

    /// Candle cadence shown in the chart title.
    pub const fn cadence(self) -> &'static str {
        match self {
            Self::OneDay => "Daily",
            Self::OneWeek => "Weekly",
            Self::OneMonth => "Monthly",
            Self::OneYear => "Yearly",
        }
    }

    /// Caption describing the span of a series with `points` candles.
    pub fn span_caption(self, points: usize) -> String {
        match self {
            Self::OneDay => format!("Last {points} Days"),
            _ => format!("Last {points} Periods"),
        }
    }
}

impl Display for ChartRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "1Y" => Ok(Self::OneYear),
            _ => Err(ValidationError::InvalidRange {
                value: value.trim().to_owned(),
            }),
        }
    }
}
