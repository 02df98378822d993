use dotenvy::dotenv;
use std::env;
use std::error::Error;
use yahoo_api::YAHOO_BASE_API_URL;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub auto_adjust: bool,
}

impl Config {
    pub fn new() -> Result<Config, Box<dyn Error>> {
        dotenv().ok();

        Config::from_vars(
            env::var("FETCH_HISTORY_BASE_URL").ok(),
            env::var("FETCH_HISTORY_AUTO_ADJUST").ok(),
        )
    }

    fn from_vars(
        base_url: Option<String>,
        auto_adjust: Option<String>,
    ) -> Result<Config, Box<dyn Error>> {
        let mut base_url = base_url.unwrap_or_default();
        if base_url.trim().is_empty() {
            base_url = YAHOO_BASE_API_URL.to_string();
        }

        let auto_adjust = match auto_adjust {
            Some(value) if !value.trim().is_empty() => value.trim().parse::<bool>()?,
            _ => true,
        };

        let config = Config {
            base_url,
            auto_adjust,
        };
        Ok(config)
    }
}
