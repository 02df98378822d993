use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use history_model::{Bar, DateRange, HistoryProvider};
use itertools::izip;
use log::{debug, warn};
use reqwest::StatusCode;
use std::error::Error;

use crate::errors::ApiError;
use crate::response::{ChartEnvelopeJSON, ChartResultJSON};

pub const YAHOO_BASE_API_URL: &str = "https://query2.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// An exchange as Yahoo addresses it: symbol suffix plus local UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Market {
    pub suffix: &'static str,
    pub utc_offset_secs: i32,
}

impl Market {
    pub fn symbol(&self, ticker: &str) -> String {
        format!("{}{}", ticker, self.suffix)
    }
}

/// Indonesia Stock Exchange, Asia/Jakarta (UTC+7, no DST).
pub const IDX: Market = Market {
    suffix: ".JK",
    utc_offset_secs: 7 * 3600,
};

pub struct YahooAPI {
    base_url: String,
    client: reqwest::blocking::Client,
    headers: reqwest::header::HeaderMap,
    market: Market,
    auto_adjust: bool,
}

impl YahooAPI {
    pub fn new(base_url: &str, auto_adjust: bool) -> Self {
        let mut reqwest_headers = reqwest::header::HeaderMap::new();
        reqwest_headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );

        return YahooAPI {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            headers: reqwest_headers,
            market: IDX,
            auto_adjust,
        };
    }

    pub fn get_ticker(&self, symbol: &str, range: &DateRange) -> Result<Vec<Bar>, ApiError> {
        let url = self.chart_url(symbol, range);

        debug!("get_ticker | url: {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()?;
        let status = response.status();
        let body = response.text()?;

        debug!("get_ticker | status: {} | body bytes: {}", status, body.len());

        self.parse_chart_body(symbol, status, &body, range)
    }

    fn chart_url(&self, symbol: &str, range: &DateRange) -> String {
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&includePrePost=false&events=div%7Csplit&includeAdjustedClose=true",
            self.base_url,
            symbol,
            local_midnight_timestamp(range.start, self.market.utc_offset_secs),
            local_midnight_timestamp(range.end, self.market.utc_offset_secs),
        )
    }

    fn parse_chart_body(
        &self,
        symbol: &str,
        status: StatusCode,
        body: &str,
        range: &DateRange,
    ) -> Result<Vec<Bar>, ApiError> {
        let envelope = match serde_json::from_str::<ChartEnvelopeJSON>(body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Api(format!("HTTP {}: {}", status.as_u16(), body)));
            }
            Err(e) => return Err(ApiError::InvalidResponse(e)),
        };

        if let Some(err) = envelope.chart.error {
            warn!(
                "get_ticker | {}: {} {}, possibly delisted; no price data found",
                symbol,
                err.code,
                err.description.unwrap_or_default()
            );
            return Ok(vec![]);
        }

        if !status.is_success() {
            return Err(ApiError::Api(format!("HTTP {}: {}", status.as_u16(), body)));
        }

        let result = match envelope.chart.result.and_then(|r| r.into_iter().next()) {
            Some(result) => result,
            None => return Ok(vec![]),
        };

        let bars = bars_from_chart(
            result,
            range,
            self.market.utc_offset_secs,
            self.auto_adjust,
        )?;

        debug!("get_ticker | {} | {} bars", symbol, bars.len());

        Ok(bars)
    }
}

impl HistoryProvider for YahooAPI {
    fn daily_bars(&self, symbol: &str, range: &DateRange) -> Result<Vec<Bar>, Box<dyn Error>> {
        Ok(self.get_ticker(symbol, range)?)
    }
}

fn local_midnight_timestamp(date: NaiveDate, utc_offset_secs: i32) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() - i64::from(utc_offset_secs)
}

fn bars_from_chart(
    result: ChartResultJSON,
    range: &DateRange,
    fallback_offset_secs: i32,
    auto_adjust: bool,
) -> Result<Vec<Bar>, ApiError> {
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    if timestamps.is_empty() || quote.is_empty() {
        return Ok(vec![]);
    }

    let n = timestamps.len();
    let lengths = [
        quote.open.len(),
        quote.high.len(),
        quote.low.len(),
        quote.close.len(),
        quote.volume.len(),
    ];
    if lengths.iter().any(|len| *len != n) {
        return Err(ApiError::Conversion(format!(
            "series lengths {:?} do not match {} timestamps",
            lengths, n
        )));
    }

    let adjclose = if auto_adjust {
        result.indicators.adjclose.into_iter().next().map(|a| a.adjclose)
    } else {
        None
    };

    let offset_secs = result.meta.gmtoffset.unwrap_or(fallback_offset_secs);
    debug!(
        "bars_from_chart | {} | {} | offset: {}s",
        result.meta.symbol.as_deref().unwrap_or("?"),
        result.meta.exchange_timezone_name.as_deref().unwrap_or("?"),
        offset_secs
    );
    let offset = FixedOffset::east_opt(offset_secs)
        .ok_or_else(|| ApiError::Conversion(format!("invalid UTC offset {}", offset_secs)))?;

    let mut bars: Vec<Bar> = Vec::with_capacity(n);
    for (i, (t, o, h, l, c, v)) in izip!(
        &timestamps,
        &quote.open,
        &quote.high,
        &quote.low,
        &quote.close,
        &quote.volume
    )
    .enumerate()
    {
        if o.is_none() && h.is_none() && l.is_none() && c.is_none() && v.is_none() {
            continue;
        }

        let date = DateTime::from_timestamp(*t, 0)
            .ok_or_else(|| ApiError::Conversion(format!("invalid timestamp {}", t)))?
            .with_timezone(&offset)
            .date_naive();

        if !range.contains(date) {
            debug!("bars_from_chart | dropping {} outside requested range", date);
            continue;
        }

        let volume = (*v).ok_or_else(|| {
            ApiError::Conversion(format!("cannot convert NaN volume to integer on {}", date))
        })?;

        let mut bar = Bar {
            date,
            open: (*o).unwrap_or(f64::NAN),
            high: (*h).unwrap_or(f64::NAN),
            low: (*l).unwrap_or(f64::NAN),
            close: (*c).unwrap_or(f64::NAN),
            volume: volume as i64,
        };

        if let Some(adj) = adjclose.as_ref().and_then(|a| a.get(i).copied().flatten()) {
            let ratio = adj / bar.close;
            bar.open *= ratio;
            bar.high *= ratio;
            bar.low *= ratio;
            bar.close = adj;
        }

        bars.push(bar);
    }

    // stable sort, so dedup keeps the first row Yahoo sent for a date
    bars.sort_by_key(|bar| bar.date);
    bars.dedup_by_key(|bar| bar.date);

    Ok(bars)
}
