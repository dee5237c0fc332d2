//! Tracker health and telemetry reports

use nalgebra::Vector3;

/// Feet to metres
const FT_TO_M: f32 = 0.3048;

/// Tracker health snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerStatus {
    /// Tracker is ready to command a takeoff
    pub takeoff_ready: bool,
    /// Tracker is ready to command a landing
    pub land_ready: bool,
    /// Link to the commbox (ground unit) is up
    pub commbox_ok: bool,
    /// Commbox has a GPS fix
    pub commbox_gps_ok: bool,
    /// Visual tag is being tracked
    pub tracking_tag: bool,
    /// Commbox GPS position is being tracked
    pub tracking_commbox_gps: bool,
    /// Tracker-commanded takeoff has finished
    pub takeoff_complete: bool,
    /// Vehicle has reached the last commanded location
    pub at_location: bool,
}

/// Tether tension and payout report
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TetherReport {
    /// Tether tension is above the high threshold
    pub high_tension: bool,
    /// Cable paid out (feet)
    pub cable_out_ft: f32,
}

impl TetherReport {
    /// Cable paid out in metres
    pub fn cable_out_m(&self) -> f32 {
        self.cable_out_ft * FT_TO_M
    }
}

/// Target pose estimate in the vehicle-local frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetEstimate {
    /// Position (cm)
    pub pos_cm: Vector3<f32>,
    /// Velocity (cm/s)
    pub vel_cms: Vector3<f32>,
    /// Attitude: roll, pitch, yaw (centidegrees)
    pub att_cd: Vector3<f32>,
    /// Arrival time (ms since boot)
    pub timestamp_ms: u64,
}
