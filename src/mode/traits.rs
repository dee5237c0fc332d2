//! Flight mode trait definition
//!
//! Platform-agnostic interface the vehicle's mode manager drives.

use crate::arming::ArmingError;

/// Flight mode trait
///
/// # Lifecycle
///
/// 1. `init()` - Called once when the mode manager switches into the mode
/// 2. `run()` - Called every control tick while the mode is active
/// 3. `exit()` - Called once when the mode manager switches away
///
/// `allows_arming()` and `do_user_takeoff_start()` are hooks the arming and
/// takeoff paths consult while the mode is selected.
pub trait FlightMode {
    /// Initialize mode (called once on mode entry)
    ///
    /// Returns `Err` if the mode cannot be entered.
    fn init(&mut self, ignore_checks: bool) -> Result<(), &'static str>;

    /// Run one control tick
    fn run(&mut self);

    /// Cleanup mode (called once on mode exit)
    fn exit(&mut self);

    /// Whether arming is permitted in this mode
    ///
    /// # Arguments
    ///
    /// * `from_gcs` - Arming was requested by the ground station
    fn allows_arming(&self, from_gcs: bool) -> Result<(), ArmingError>;

    /// Start a pilot-requested takeoff
    ///
    /// # Arguments
    ///
    /// * `final_alt_above_home_cm` - Takeoff target altitude (cm)
    ///
    /// Returns `false` if the takeoff was refused; nothing is changed then.
    fn do_user_takeoff_start(&mut self, final_alt_above_home_cm: f32) -> bool;

    /// Get mode name for logging and telemetry
    fn name(&self) -> &'static str;
}
