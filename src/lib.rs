//! Client-side quiz data access: a JSON HTTP client and a shared store of
//! questions grouped by level.

pub mod api;
pub mod config;
pub mod logging;
pub mod service;
pub mod store;

pub use api::{ApiClient, ApiError};
pub use config::{ApiConfig, Config, ConfigError};
pub use service::QuizService;
pub use store::{Level, Question, QuizState, QuizStore};
