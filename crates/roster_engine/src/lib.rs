//! Roster engine: page fetching over HTTP and a background worker that runs fetch effects.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchId, FetchedPage, FetchedRecord};
pub use wire::decode_page;
