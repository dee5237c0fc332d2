//! Arming types
//!
//! Refusal reasons and ARMING_CHECK categories shared by flight modes.
//! The generic pre-arm framework lives with the vehicle; modes only consult
//! the configured check bitmask.

pub mod error;

pub use error::{ArmingError, CheckCategory};
