//! Parameter management types
//!
//! Provides the parameter store and the parameter blocks read by the
//! tracking mode. Flash persistence belongs to the vehicle firmware.

pub mod error;
pub mod storage;
pub mod tracking;

pub use error::ParameterError;
pub use storage::{ParamFlags, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
pub use tracking::TrackingParams;
