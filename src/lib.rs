#![cfg_attr(not(test), no_std)]

//! tracker_bridge - Tag-tracking flight mode for multicopter autopilots
//!
//! This library connects an external precision tag tracker to a vehicle's
//! guided controller: it buffers what the tracker reports, turns tracker
//! commands into guided-control targets every tick, and stages requests back
//! to the tracker.

// Logging macros (log_info!, log_warn!, ...)
pub mod logging;

// Time abstraction
pub mod traits;

// Pre-arm check categories and errors
pub mod arming;

// Operator STATUSTEXT queue
pub mod notify;

// Parameter store and tracking parameters
pub mod parameters;

// Tracker messages, commands and the tracking mailbox
pub mod tracker;

// Flight mode trait, guided controller seam and the tracking mode
pub mod mode;

pub use mode::{FlightMode, GuidedController, ModeState, TrackingMode};
pub use tracker::TrackingMailbox;
