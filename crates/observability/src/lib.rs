//! Tracing/logging setup shared by the orderdesk binaries.

pub mod subscriber;

pub use subscriber::{DEFAULT_FILTER, init, init_with_default};
