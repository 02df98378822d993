use chrono::NaiveDate;
use history_model::DateRange;
use yahoo_api::IDX;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn normalize_ticker(ticker: &str) -> String {
    return IDX.symbol(ticker);
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        format!(
            "time data '{}' does not match format '{}': {}",
            value, DATE_FORMAT, e
        )
    })
}

/// Turns the inclusive `[start_date, end_date]` the caller asks for into the
/// half-open range the provider expects.
pub fn query_range(start_date: &str, end_date: &str) -> Result<DateRange, String> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    let end = end
        .succ_opt()
        .ok_or_else(|| format!("end date '{}' is out of range", end_date))?;
    Ok(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn normalize_ticker_pass_suffix() {
        assert_eq!(normalize_ticker("BBCA"), "BBCA.JK".to_string());
    }

    #[test]
    fn normalize_ticker_pass_keeps_case() {
        assert_eq!(normalize_ticker("bbca"), "bbca.JK".to_string());
    }

    #[test]
    fn query_range_pass_same_day() {
        let range = query_range("2024-01-02", "2024-01-02").unwrap();
        assert_eq!(range.start, date("2024-01-02"));
        assert_eq!(range.end, date("2024-01-03"));
    }

    #[test]
    fn query_range_pass_range() {
        let range = query_range("2024-01-02", "2024-01-05").unwrap();
        assert_eq!(range.start, date("2024-01-02"));
        assert_eq!(range.end, date("2024-01-06"));
    }

    #[test]
    fn query_range_pass_month_and_leap_boundaries() {
        assert_eq!(
            query_range("2024-01-01", "2024-01-31").unwrap().end,
            date("2024-02-01")
        );
        assert_eq!(
            query_range("2024-02-01", "2024-02-28").unwrap().end,
            date("2024-02-29")
        );
        assert_eq!(
            query_range("2024-12-01", "2024-12-31").unwrap().end,
            date("2025-01-01")
        );
    }

    #[test]
    fn query_range_pass_start_after_end_not_validated() {
        let range = query_range("2024-01-10", "2024-01-02").unwrap();
        assert_eq!(range.end, date("2024-01-03"));
    }

    #[test]
    fn query_range_fail_bad_end() {
        let err = query_range("2024-01-02", "yesterday").unwrap_err();
        assert!(err.contains("'yesterday'"));
    }

    #[test]
    fn query_range_fail_bad_start() {
        assert!(query_range("2024-13-01", "2024-01-02").is_err());
    }
}
