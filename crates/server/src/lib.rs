//! Stringprops server - HTTP REST API for the string analysis service.
//!
//! This crate is the boundary layer around the core crates: it validates
//! request parameters, maps core results and errors to HTTP status codes,
//! and owns process concerns (config, logging, shutdown). The analysis,
//! storage, and query semantics all live in the core crates; nothing here
//! re-implements them.
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with component status
//! - `POST /strings` - Analyze and store a string (409 on duplicates)
//! - `GET /strings` - List records with optional structured filters
//! - `GET /strings/nlp-query` - List records matching a free-text phrase
//! - `GET /strings/{id}` - Retrieve a record by content hash
//! - `DELETE /strings/{id}` - Delete a record by content hash
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
