//! Tracking Mode
//!
//! Guided flight driven by the tag tracker. The mode drains the tracking
//! mailbox once per tick, translates the command into a guided-controller
//! primitive and then runs the guided controller.
//!
//! # Behavior
//!
//! - On entry in flight: ask the tracker to return to base
//! - On entry on the ground: wait for a takeoff request
//! - Each tick: forward the newest tracker command, if any
//! - Malformed Accel/Attitude/Velocity commands are replaced by a zero/hold
//!   command; a malformed PositionVelocity command becomes a zero velocity
//!   and its destination is dropped
//! - Arming only from the GCS, only when the tracker is ready for takeoff
//!
//! With no new command the guided controller keeps flying its previous target.

use nalgebra::{UnitQuaternion, Vector3};

use super::guided::GuidedController;
use super::traits::FlightMode;
use crate::arming::{ArmingError, CheckCategory};
use crate::notify;
use crate::parameters::TrackingParams;
use crate::tracker::{
    cd_to_rad, AccelCommand, AttitudeCommand, Command, CommandKind, TrackingMailbox,
};
use crate::traits::TimeSource;

/// Arming refusal: tracker has lost the tag
pub const MSG_NOT_TRACKING_TAG: &str = "Arm: Planck not tracking tag";
/// Arming refusal: tracker tracks the tag but is not ready
pub const MSG_NOT_READY_FOR_TAKEOFF: &str = "Arm: Planck not ready for takeoff";
/// Arming refusal: commbox link or GPS unhealthy
pub const MSG_NOT_TRACKING_COMMBOX_GPS: &str = "Arm: Planck not tracking Commbox GPS";

/// Tracking mode lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeState {
    /// Not selected; `run()` does nothing
    #[default]
    Inactive,
    /// Entered through a successful `init()`
    Active,
}

/// Tracking Mode
pub struct TrackingMode<'a, T: TimeSource, G: GuidedController> {
    /// Tracker mailbox shared with the decoder and encoder
    mailbox: &'a TrackingMailbox<T>,
    /// Guided controller receiving the forwarded targets
    guided: G,
    /// Return and arming-check parameters
    params: TrackingParams,
    /// Lifecycle state
    state: ModeState,
}

impl<'a, T: TimeSource, G: GuidedController> TrackingMode<'a, T, G> {
    /// Create a new tracking mode
    ///
    /// # Arguments
    ///
    /// * `mailbox` - The vehicle's tracker mailbox
    /// * `guided` - Underlying guided controller
    /// * `params` - Return and arming-check parameters
    pub fn new(mailbox: &'a TrackingMailbox<T>, guided: G, params: TrackingParams) -> Self {
        Self {
            mailbox,
            guided,
            params,
            state: ModeState::Inactive,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ModeState {
        self.state
    }

    /// Replace the parameters (after a parameter change)
    pub fn set_params(&mut self, params: TrackingParams) {
        self.params = params;
    }

    /// Current parameters
    pub fn params(&self) -> &TrackingParams {
        &self.params
    }

    /// Tracker mailbox this mode reads from
    pub fn mailbox(&self) -> &'a TrackingMailbox<T> {
        self.mailbox
    }

    /// Underlying guided controller
    pub fn guided(&self) -> &G {
        &self.guided
    }

    /// Underlying guided controller (mutable)
    pub fn guided_mut(&mut self) -> &mut G {
        &mut self.guided
    }

    fn request_return(&self) {
        let rate_xy_cms = self
            .params
            .return_speed_cms(self.guided.wp_speed_xy_cms());

        self.mailbox.request_rtb(
            self.params.return_alt_cm() / 100.0,
            self.guided.speed_up_cms() / 100.0,
            self.guided.speed_down_cms() / 100.0,
            rate_xy_cms / 100.0,
        );
    }

    fn apply_command(&mut self, command: Command) {
        let kind = command.kind();
        match kind {
            CommandKind::Accel => {
                let (cmd, roll_cd, pitch_cd) = match command.accel() {
                    Some(cmd) => {
                        let (roll_cd, pitch_cd) = self
                            .guided
                            .accel_to_lean_angles(cmd.accel_cmss.x, cmd.accel_cmss.y);
                        (cmd, roll_cd, pitch_cd)
                    }
                    None => {
                        reject(kind);
                        (AccelCommand::hold(), 0.0, 0.0)
                    }
                };
                self.forward_angle(
                    roll_cd,
                    pitch_cd,
                    cmd.yaw_cd,
                    cmd.climb_rate_cms,
                    cmd.yaw_is_rate,
                );
            }
            CommandKind::Attitude => {
                let cmd = command.attitude().unwrap_or_else(|| {
                    reject(kind);
                    AttitudeCommand::hold()
                });
                self.forward_angle(
                    cmd.roll_cd,
                    cmd.pitch_cd,
                    cmd.yaw_cd,
                    cmd.climb_rate_cms,
                    cmd.yaw_is_rate,
                );
            }
            CommandKind::Velocity => {
                let vel_cms = command.velocity().unwrap_or_else(|| {
                    reject(kind);
                    Vector3::zeros()
                });
                self.guided.set_velocity(vel_cms);
            }
            CommandKind::Position => match command.position() {
                Some(location) => {
                    if !self.guided.set_destination(&location) {
                        crate::log_warn!("Tracker destination rejected by guided controller");
                    }
                }
                // Unreachable: kind() and position() agree on the variant
                None => crate::log_error!("Position command without destination"),
            },
            CommandKind::PositionVelocity => match command.position_velocity() {
                Some(cmd) => {
                    let destination_cm = self.guided.location_to_neu_cm(&cmd.location);
                    self.guided
                        .set_destination_posvel(destination_cm, cmd.vel_cms);
                }
                None => {
                    // Destination is dropped, not held
                    reject(kind);
                    self.guided.set_velocity(Vector3::zeros());
                }
            },
            CommandKind::None => {}
        }
    }

    fn forward_angle(
        &mut self,
        roll_cd: f32,
        pitch_cd: f32,
        yaw_cd: f32,
        climb_rate_cms: f32,
        yaw_is_rate: bool,
    ) {
        let attitude = UnitQuaternion::from_euler_angles(
            cd_to_rad(roll_cd),
            cd_to_rad(pitch_cd),
            cd_to_rad(yaw_cd),
        );
        let yaw_rate_rads = cd_to_rad(yaw_cd);

        self.guided
            .set_angle(attitude, climb_rate_cms, yaw_is_rate, yaw_rate_rads);
    }
}

fn reject(kind: CommandKind) {
    crate::log_warn!("Malformed tracker {} command, substituting hold", kind.as_str());
}

impl<'a, T: TimeSource, G: GuidedController> FlightMode for TrackingMode<'a, T, G> {
    fn init(&mut self, ignore_checks: bool) -> Result<(), &'static str> {
        // Airborne entry: send the vehicle back to base
        if !self.guided.is_landed() {
            self.request_return();
        }

        self.guided.init(ignore_checks)?;
        self.state = ModeState::Active;
        crate::log_info!("Tracking mode entered");
        Ok(())
    }

    fn run(&mut self) {
        if self.state != ModeState::Active {
            return;
        }

        if let Some(command) = self.mailbox.take_command() {
            self.apply_command(command);
        }

        self.guided.run();
    }

    fn exit(&mut self) {
        crate::log_info!("Exiting Tracking mode");
        self.state = ModeState::Inactive;
    }

    fn allows_arming(&self, from_gcs: bool) -> Result<(), ArmingError> {
        if !from_gcs {
            return Err(ArmingError::NotFromGcs);
        }

        if !self.mailbox.ready_for_takeoff() {
            let reason = if self.mailbox.tag_tracking_active() {
                MSG_NOT_READY_FOR_TAKEOFF
            } else {
                MSG_NOT_TRACKING_TAG
            };
            notify::send_critical(reason);
            return Err(ArmingError::CheckFailed {
                reason,
                category: CheckCategory::System,
            });
        }

        if self.params.tracker_gps_check_enabled() && !self.mailbox.commbox_link_healthy() {
            notify::send_critical(MSG_NOT_TRACKING_COMMBOX_GPS);
            return Err(ArmingError::CheckFailed {
                reason: MSG_NOT_TRACKING_COMMBOX_GPS,
                category: CheckCategory::TrackerGps,
            });
        }

        Ok(())
    }

    fn do_user_takeoff_start(&mut self, final_alt_above_home_cm: f32) -> bool {
        if !self.mailbox.ready_for_takeoff() {
            crate::log_warn!("Takeoff refused: tracker not ready");
            return false;
        }

        self.mailbox.request_takeoff(final_alt_above_home_cm / 100.0);
        self.guided.set_yaw_hold();
        self.guided.set_throttle_takeoff();
        true
    }

    fn name(&self) -> &'static str {
        "Tracking"
    }
}
