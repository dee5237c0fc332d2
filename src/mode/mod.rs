//! Flight modes
//!
//! The tracking mode and the interfaces it is driven through and drives.

pub mod guided;
pub mod tracking;
pub mod traits;

pub use guided::{accel_to_lean_angles, GuidedController};
pub use tracking::{ModeState, TrackingMode};
pub use traits::FlightMode;
