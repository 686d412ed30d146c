//! Recipe table engine: network fetches and effect execution.
mod controller;
mod engine;
mod fetch;
mod types;

pub use controller::FetchController;
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use types::{EngineEvent, FailureKind, FetchError};
