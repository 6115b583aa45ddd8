//! Tracing setup: structured JSON logs, plus OTLP span export when configured.
//!
//! # Telemetry invariants
//!
//! - **No key material or payload bytes** may appear in any span attribute or
//!   log field. Lengths and error kinds only.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`) and can be
//!   overridden with `RUST_LOG`.

pub mod init;

pub use init::init_telemetry;
