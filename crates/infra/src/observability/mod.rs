//! Observability infrastructure
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber once at startup through [`init_logging`].

pub mod logging;

pub use logging::{build_filter, init_logging};
