pub mod api;
pub mod errors;
mod response;

pub use api::{IDX, Market, YAHOO_BASE_API_URL, YahooAPI};
pub use errors::ApiError;
