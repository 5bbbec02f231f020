//! docsearch: search session layer and tooling over the document search backend.
//!
//! The HTTP side lives in [`docsearch_client`]. This crate adds what a
//! running UI needs on top of it:
//!
//! - **Session**: [`SearchSession`] owns a [`ResultStore`] and is the only
//!   writer to it; overlapping searches are sequenced so a stale response
//!   never replaces a newer one
//! - **Config**: TOML file plus environment overrides ([`AppConfig`])
//! - **Logging**: `tracing` with an `EnvFilter`, written to stderr
//! - **Bench**: latency benchmark over query lengths, modes and rankings

pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;

pub use config::AppConfig;
pub use docsearch_client::{
    ClientConfig, ClientError, DocumentId, DocumentMeta, DocumentText, EndpointContract,
    NormalizedResult, SearchClient, SearchMode, SearchRequest, SearchService,
};
pub use error::{AppError, Result};
pub use session::{Applied, SearchOutcome, SearchSession};
pub use store::{ResultStore, StoreState};
