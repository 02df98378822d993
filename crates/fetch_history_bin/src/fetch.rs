use history_model::{ErrorDescriptor, FetchOutput, HistoryProvider};
use log::{debug, warn};

use crate::utils;

/// Fetches daily bars for `ticker` over the inclusive `[start_date, end_date]`.
///
/// Never fails: every error is folded into `FetchOutput::Error`.
pub fn fetch_data<P: HistoryProvider>(
    provider: &P,
    ticker: &str,
    start_date: &str,
    end_date: &str,
) -> FetchOutput {
    let symbol = utils::normalize_ticker(ticker);

    let range = match utils::query_range(start_date, end_date) {
        Ok(range) => range,
        Err(e) => return error_output(e),
    };

    debug!(
        "fetch_data | symbol: {} | range: [{}, {})",
        symbol, range.start, range.end
    );

    match provider.daily_bars(&symbol, &range) {
        Ok(bars) => {
            debug!("fetch_data | {} bars", bars.len());
            FetchOutput::Bars(bars)
        }
        Err(e) => {
            warn!("fetch_data | {}: {}", symbol, e);
            error_output(e.to_string())
        }
    }
}

fn error_output(message: String) -> FetchOutput {
    if message.trim().is_empty() {
        return FetchOutput::Error(ErrorDescriptor::new("unknown error"));
    }
    FetchOutput::Error(ErrorDescriptor::new(message))
}
