//! JSON-over-HTTP access to the quiz API.

mod client;
mod error;
mod query;

pub use client::ApiClient;
pub use error::ApiError;
pub use query::{build_url, coerce_to_string, params_from_map, QueryParams};
