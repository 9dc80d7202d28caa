//! Outbound adapters for the seeded service.

mod dto;
mod http;

pub use http::HttpSeedApi;
