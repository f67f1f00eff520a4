mod http;
mod resolver;

pub use http::HttpGeocoder;
pub use resolver::{ReverseGeocoder, UNKNOWN_PLACE};
