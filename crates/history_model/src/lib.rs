use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Half-open range of calendar days, `end` is not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDescriptor {
    pub error: String,
}

impl ErrorDescriptor {
    pub fn new(message: impl Into<String>) -> Self {
        return ErrorDescriptor {
            error: message.into(),
        };
    }
}

/// What a fetch prints: either the bars as a JSON array or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchOutput {
    Bars(Vec<Bar>),
    Error(ErrorDescriptor),
}

/// A source of daily bars for a provider-specific symbol.
pub trait HistoryProvider {
    fn daily_bars(&self, symbol: &str, range: &DateRange) -> Result<Vec<Bar>, Box<dyn Error>>;
}
