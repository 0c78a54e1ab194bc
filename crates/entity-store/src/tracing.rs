//! # Observability & Tracing
//!
//! Structured logging for the whole system, built on the `tracing` crate.
//!
//! - **Structured logging** with per-request fields (entity type, id, map
//!   size)
//! - **Hierarchical spans** from the typed clients' `#[instrument]`
//!   attributes
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full request payloads
//! RUST_LOG=debug cargo run
//! ```

/// Initializes the global tracing subscriber. Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields replace module paths
        .compact()
        .init();
}
