//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod seed_api;

#[cfg(test)]
pub use seed_api::MockSeedApi;
pub use seed_api::{SeedApi, SeedApiError};
