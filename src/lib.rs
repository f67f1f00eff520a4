pub mod config;
pub mod geocode;
pub mod parallel;
pub mod pipeline;
pub mod positions;
pub mod web;
