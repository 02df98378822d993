use log::error;
use serde::Serialize;
use std::{env, process::exit};

use history_model::{ErrorDescriptor, FetchOutput};
use yahoo_api::YahooAPI;

mod config;
mod fetch;
mod utils;

use config::Config;

const USAGE: &str = "Usage: fetch_history TICKER START_DATE END_DATE";

struct Args<'a> {
    ticker: &'a str,
    start_date: &'a str,
    end_date: &'a str,
}

/// Positional arguments after the program name; anything past the third is ignored.
fn parse_args(args: &[String]) -> Option<Args<'_>> {
    match args {
        [_, ticker, start_date, end_date, ..] => Some(Args {
            ticker,
            start_date,
            end_date,
        }),
        _ => None,
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            error!("Could not serialize output: {}", e);
            println!(r#"{{"error": "could not serialize output"}}"#);
        }
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(&argv) {
        Some(args) => args,
        None => {
            print_json(&ErrorDescriptor::new(USAGE));
            exit(1);
        }
    };

    // past the argument check, failures travel in the payload and the exit code stays 0
    print_json(&run(&args));
}

fn run(args: &Args<'_>) -> FetchOutput {
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not create config: {}", e);
            return FetchOutput::Error(ErrorDescriptor::new(format!(
                "Could not create config: {}",
                e
            )));
        }
    };

    let yahoo_api = YahooAPI::new(&config.base_url, config.auto_adjust);
    fetch::fetch_data(&yahoo_api, args.ticker, args.start_date, args.end_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_args_pass_three_positionals() {
        let argv = argv(&["fetch_history", "BBCA", "2024-01-02", "2024-01-05"]);
        let args = parse_args(&argv).unwrap();
        assert_eq!(args.ticker, "BBCA");
        assert_eq!(args.start_date, "2024-01-02");
        assert_eq!(args.end_date, "2024-01-05");
    }

    #[test]
    fn parse_args_pass_ignores_extra() {
        let argv = argv(&["fetch_history", "BBCA", "2024-01-02", "2024-01-05", "x"]);
        assert_eq!(parse_args(&argv).unwrap().end_date, "2024-01-05");
    }

    #[test]
    fn parse_args_fail_too_few() {
        let one = argv(&["fetch_history", "BBCA"]);
        let two = argv(&["fetch_history", "BBCA", "2024-01-02"]);
        assert!(parse_args(&one).is_none());
        assert!(parse_args(&two).is_none());
        assert!(parse_args(&[]).is_none());
    }

    #[test]
    fn usage_pass_json_shape() {
        let text = serde_json::to_string(&ErrorDescriptor::new(USAGE)).unwrap();
        assert!(text.starts_with(r#"{"error":"Usage: "#));
    }
}
