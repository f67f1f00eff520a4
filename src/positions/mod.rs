mod client;
mod error;
mod types;

pub use client::{hourly_timestamps, PositionClient};
pub use error::PositionError;
pub use types::{RawPosition, Units, Visibility};
