//! Core traits for platform-agnostic bridge functionality.
//!
//! Platform services are injected through traits so the mailbox and the
//! tracking mode can be exercised on host. Mock implementations are always
//! available.

pub mod time;

pub use time::{MockTime, TimeSource};
