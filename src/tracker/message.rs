//! Inbound and outbound tracker message sets
//!
//! The wire codec lives outside this crate. The decoder turns inbound frames
//! into `TrackerMessage` values for `TrackingMailbox::handle_message`; the
//! encoder drains staged `TrackerRequest`s with `TrackingMailbox::take_request`.

use nalgebra::Vector3;

use super::command::Command;
use super::report::TrackerStatus;

/// Decoded message from the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerMessage {
    /// Motion command
    Command(Command),
    /// Health snapshot
    Status(TrackerStatus),
    /// Tether tension and payout
    Tether {
        high_tension: bool,
        cable_out_ft: f32,
    },
    /// Target pose estimate (cm, cm/s, centidegrees)
    TargetEstimate {
        pos_cm: Vector3<f32>,
        vel_cms: Vector3<f32>,
        att_cd: Vector3<f32>,
    },
}

/// Request sent to the tracker (metres, m/s)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerRequest {
    /// Take off to `alt_m` above home
    Takeoff { alt_m: f32 },
    /// Change commanded altitude
    AltChange { alt_m: f32 },
    /// Return to base
    Rtb {
        alt_m: f32,
        rate_up_ms: f32,
        rate_down_ms: f32,
        rate_xy_ms: f32,
    },
    /// Land at `descent_rate_ms`
    Land { descent_rate_ms: f32 },
    /// Move the tracked target offset (NED, metres or m/s)
    MoveTarget {
        offset_ned_m: Vector3<f32>,
        is_rate: bool,
    },
    /// Stop issuing motion commands
    StopCommanding,
}

impl TrackerRequest {
    /// Name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerRequest::Takeoff { .. } => "Takeoff",
            TrackerRequest::AltChange { .. } => "AltChange",
            TrackerRequest::Rtb { .. } => "Rtb",
            TrackerRequest::Land { .. } => "Land",
            TrackerRequest::MoveTarget { .. } => "MoveTarget",
            TrackerRequest::StopCommanding => "StopCommanding",
        }
    }
}
