//! reqwest implementations of the core's network ports.

pub mod origin;
pub mod time_api;

pub use origin::OriginFetcher;
pub use time_api::TimeApiClient;
