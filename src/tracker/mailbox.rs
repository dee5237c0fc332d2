//! Tracking Mailbox
//!
//! Single source of truth for everything the tracker has told the vehicle,
//! and for the one request the vehicle wants to tell it next.
//!
//! # Contracts
//!
//! - **Latest wins**: one command slot; a write replaces any unconsumed command.
//! - **Read once**: `take_command()` hands the command out exactly once.
//! - **Freshness**: status-derived predicates read `false` once the last status
//!   is `STATUS_TIMEOUT_MS` old. Unconsumed commands never time out.
//! - **Atomicity**: every operation runs inside one critical section, so the
//!   decoder and the control loop may live in different tasks or interrupts.

use core::cell::RefCell;

use critical_section::Mutex;
use nalgebra::Vector3;

use super::command::{
    AccelCommand, AttitudeCommand, Command, CommandKind, Location, PositionVelocityCommand,
};
use super::message::{TrackerMessage, TrackerRequest};
use super::report::{TargetEstimate, TetherReport, TrackerStatus};
use crate::traits::TimeSource;

/// Age at which a status snapshot is treated as unknown (ms)
pub const STATUS_TIMEOUT_MS: u64 = 500;

/// Age at which a tether report counts as timed out (ms)
pub const TETHER_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Copy)]
struct Stamped<T> {
    value: T,
    timestamp_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct CommandSlot {
    command: Command,
    timestamp_ms: u64,
    is_new: bool,
}

struct MailboxState {
    command: CommandSlot,
    status: Option<Stamped<TrackerStatus>>,
    tether: Option<Stamped<TetherReport>>,
    high_tension_latch: bool,
    target: Option<TargetEstimate>,
    // Debounce for at_location
    was_at_location: bool,
    pending_request: Option<TrackerRequest>,
}

impl MailboxState {
    const fn new() -> Self {
        Self {
            command: CommandSlot {
                command: Command::None,
                timestamp_ms: 0,
                is_new: false,
            },
            status: None,
            tether: None,
            high_tension_latch: false,
            target: None,
            was_at_location: false,
            pending_request: None,
        }
    }
}

/// Mailbox shared by the tracker decoder and the tracking flight mode
///
/// All methods take `&self`; the mailbox can live in a `static`:
///
/// ```ignore
/// static TRACKER: TrackingMailbox<BoardTime> = TrackingMailbox::new(BoardTime);
/// ```
pub struct TrackingMailbox<T: TimeSource> {
    time: T,
    state: Mutex<RefCell<MailboxState>>,
}

impl<T: TimeSource> TrackingMailbox<T> {
    /// Create an empty mailbox: no command, no status, no tether report
    pub const fn new(time: T) -> Self {
        Self {
            time,
            state: Mutex::new(RefCell::new(MailboxState::new())),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut MailboxState) -> R) -> R {
        critical_section::with(|cs| f(&mut self.state.borrow(cs).borrow_mut()))
    }

    // ------------------------------------------------------------------
    // Inbound (decoder side)
    // ------------------------------------------------------------------

    /// Dispatch a decoded tracker message to the matching writer
    pub fn handle_message(&self, msg: TrackerMessage) {
        match msg {
            TrackerMessage::Command(cmd) => self.write_command(cmd),
            TrackerMessage::Status(status) => self.write_status(status),
            TrackerMessage::Tether {
                high_tension,
                cable_out_ft,
            } => self.write_tether(high_tension, cable_out_ft),
            TrackerMessage::TargetEstimate {
                pos_cm,
                vel_cms,
                att_cd,
            } => self.write_target_estimate(pos_cm, vel_cms, att_cd),
        }
    }

    /// Store a command, replacing any unconsumed one
    ///
    /// Field values are not validated here; decomposition rejects malformed
    /// payloads.
    pub fn write_command(&self, command: Command) {
        let now = self.time.now_ms();
        let replaced = self.with(|s| {
            let replaced = s.command.is_new;
            s.command = CommandSlot {
                command,
                timestamp_ms: now,
                is_new: true,
            };
            replaced
        });

        if replaced {
            crate::log_trace!("Tracker command replaced before use");
        }
    }

    /// Store a status snapshot
    ///
    /// A false-to-true change of `at_location` latches the arrival flag read by
    /// `take_location_reached_flag()`. A stale previous snapshot counts as
    /// "not at location".
    pub fn write_status(&self, status: TrackerStatus) {
        let now = self.time.now_ms();
        let arrived = self.with(|s| {
            let was_at = s
                .status
                .filter(|p| now.saturating_sub(p.timestamp_ms) < STATUS_TIMEOUT_MS)
                .is_some_and(|p| p.value.at_location);
            let arrived = status.at_location && !was_at;
            if arrived {
                s.was_at_location = true;
            }
            s.status = Some(Stamped {
                value: status,
                timestamp_ms: now,
            });
            arrived
        });

        if arrived {
            crate::log_debug!("Tracker reports location reached");
        }
    }

    /// Store a tether report
    pub fn write_tether(&self, high_tension: bool, cable_out_ft: f32) {
        let now = self.time.now_ms();
        self.with(|s| {
            s.tether = Some(Stamped {
                value: TetherReport {
                    high_tension,
                    cable_out_ft,
                },
                timestamp_ms: now,
            });
        });
    }

    /// Store a target pose estimate
    pub fn write_target_estimate(
        &self,
        pos_cm: Vector3<f32>,
        vel_cms: Vector3<f32>,
        att_cd: Vector3<f32>,
    ) {
        let now = self.time.now_ms();
        self.with(|s| {
            s.target = Some(TargetEstimate {
                pos_cm,
                vel_cms,
                att_cd,
                timestamp_ms: now,
            });
        });
    }

    // ------------------------------------------------------------------
    // Command consumption
    // ------------------------------------------------------------------

    /// Take the stored command if it has not been taken yet
    ///
    /// Returns `None` until the next `write_command()`.
    pub fn take_command(&self) -> Option<Command> {
        self.with(|s| {
            if s.command.is_new {
                s.command.is_new = false;
                Some(s.command.command)
            } else {
                None
            }
        })
    }

    /// Variant of the stored command, consumed or not
    pub fn last_command_kind(&self) -> CommandKind {
        self.with(|s| s.command.command.kind())
    }

    /// Arrival time of the stored command (ms), 0 if none was ever written
    pub fn last_command_timestamp_ms(&self) -> u64 {
        self.with(|s| s.command.timestamp_ms)
    }

    /// Stored command as acceleration + yaw + climb rate
    pub fn accel_yaw_vrate(&self) -> Option<AccelCommand> {
        self.with(|s| s.command.command.accel())
    }

    /// Stored command as attitude + climb rate
    pub fn attitude_vrate(&self) -> Option<AttitudeCommand> {
        self.with(|s| s.command.command.attitude())
    }

    /// Stored command as velocity (cm/s)
    pub fn velocity(&self) -> Option<Vector3<f32>> {
        self.with(|s| s.command.command.velocity())
    }

    /// Stored command as destination
    pub fn position(&self) -> Option<Location> {
        self.with(|s| s.command.command.position())
    }

    /// Stored command as destination + velocity
    pub fn position_velocity(&self) -> Option<PositionVelocityCommand> {
        self.with(|s| s.command.command.position_velocity())
    }

    // ------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------

    fn fresh_status(&self) -> Option<TrackerStatus> {
        let now = self.time.now_ms();
        self.with(|s| s.status)
            .filter(|st| now.saturating_sub(st.timestamp_ms) < STATUS_TIMEOUT_MS)
            .map(|st| st.value)
    }

    /// A status has been received within the last `STATUS_TIMEOUT_MS`
    pub fn is_status_fresh(&self) -> bool {
        self.fresh_status().is_some()
    }

    /// Tracker is ready to take off (false when status is stale)
    pub fn ready_for_takeoff(&self) -> bool {
        self.fresh_status().is_some_and(|s| s.takeoff_ready)
    }

    /// Tracker is ready to land (false when status is stale)
    pub fn ready_for_land(&self) -> bool {
        self.fresh_status().is_some_and(|s| s.land_ready)
    }

    /// Commbox link, commbox GPS and GPS tracking are all healthy
    pub fn commbox_link_healthy(&self) -> bool {
        self.fresh_status()
            .is_some_and(|s| s.commbox_ok && s.commbox_gps_ok && s.tracking_commbox_gps)
    }

    /// Tracker is locked onto the tag (false when status is stale)
    pub fn tag_tracking_active(&self) -> bool {
        self.fresh_status().is_some_and(|s| s.tracking_tag)
    }

    /// Tracker-commanded takeoff has finished (false when status is stale)
    pub fn takeoff_complete(&self) -> bool {
        self.fresh_status().is_some_and(|s| s.takeoff_complete)
    }

    /// Report a location arrival exactly once
    pub fn take_location_reached_flag(&self) -> bool {
        self.with(|s| core::mem::take(&mut s.was_at_location))
    }

    // ------------------------------------------------------------------
    // Tether
    // ------------------------------------------------------------------

    /// Raw high-tension flag from the last tether report
    ///
    /// Not gated on report age: a tether report that stops arriving
    /// keeps its last value. Use `tether_timed_out()` to check age.
    pub fn tether_high_tension(&self) -> bool {
        self.with(|s| s.tether.is_some_and(|t| t.value.high_tension))
    }

    /// No tether report within `TETHER_TIMEOUT_MS` (true if none ever arrived)
    pub fn tether_timed_out(&self) -> bool {
        let now = self.time.now_ms();
        self.with(|s| match s.tether {
            Some(t) => now.saturating_sub(t.timestamp_ms) >= TETHER_TIMEOUT_MS,
            None => true,
        })
    }

    /// Arrival time of the last tether report (ms)
    pub fn tether_status_timestamp_ms(&self) -> Option<u64> {
        self.with(|s| s.tether.map(|t| t.timestamp_ms))
    }

    /// Cable paid out (m), 0 before the first report
    pub fn tether_cable_out_m(&self) -> f32 {
        self.with(|s| s.tether.map(|t| t.value.cable_out_m()).unwrap_or(0.0))
    }

    /// Set or clear the sticky high-tension latch
    pub fn set_high_tension_latch(&self, latched: bool) {
        self.with(|s| s.high_tension_latch = latched);
    }

    /// Sticky high-tension latch (never times out)
    pub fn high_tension_latch(&self) -> bool {
        self.with(|s| s.high_tension_latch)
    }

    // ------------------------------------------------------------------
    // Target estimate
    // ------------------------------------------------------------------

    /// Last target pose estimate, if any
    pub fn target_estimate(&self) -> Option<TargetEstimate> {
        self.with(|s| s.target)
    }

    // ------------------------------------------------------------------
    // Outbound requests (encoder side drains with take_request)
    // ------------------------------------------------------------------

    fn stage(&self, request: TrackerRequest) {
        crate::log_info!("Tracker request: {}", request.as_str());
        self.with(|s| s.pending_request = Some(request));
    }

    /// Ask the tracker to take off to `alt_m` above home
    pub fn request_takeoff(&self, alt_m: f32) {
        self.stage(TrackerRequest::Takeoff { alt_m });
    }

    /// Ask the tracker to change the commanded altitude
    pub fn request_alt_change(&self, alt_m: f32) {
        self.stage(TrackerRequest::AltChange { alt_m });
    }

    /// Ask the tracker to return to base
    pub fn request_rtb(&self, alt_m: f32, rate_up_ms: f32, rate_down_ms: f32, rate_xy_ms: f32) {
        self.stage(TrackerRequest::Rtb {
            alt_m,
            rate_up_ms,
            rate_down_ms,
            rate_xy_ms,
        });
    }

    /// Ask the tracker to land
    pub fn request_land(&self, descent_rate_ms: f32) {
        self.stage(TrackerRequest::Land { descent_rate_ms });
    }

    /// Ask the tracker to move its target offset (NED)
    pub fn request_move(&self, offset_ned_m: Vector3<f32>, is_rate: bool) {
        self.stage(TrackerRequest::MoveTarget {
            offset_ned_m,
            is_rate,
        });
    }

    /// Ask the tracker to stop issuing commands
    pub fn stop_commanding(&self) {
        self.stage(TrackerRequest::StopCommanding);
    }

    /// Take the staged request for encoding
    pub fn take_request(&self) -> Option<TrackerRequest> {
        self.with(|s| s.pending_request.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::command::AltFrame;
    use crate::traits::MockTime;
    use nalgebra::Vector2;

    fn ready_status() -> TrackerStatus {
        TrackerStatus {
            takeoff_ready: true,
            land_ready: true,
            commbox_ok: true,
            commbox_gps_ok: true,
            tracking_tag: true,
            tracking_commbox_gps: true,
            takeoff_complete: true,
            at_location: false,
        }
    }

    fn accel_cmd(x: f32) -> Command {
        Command::Accel(AccelCommand {
            accel_cmss: Vector2::new(x, 0.0),
            yaw_cd: 0.0,
            climb_rate_cms: 0.0,
            yaw_is_rate: false,
        })
    }

    // ========== Command slot ==========

    #[test]
    fn test_empty_mailbox_has_no_command() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);
        assert_eq!(mailbox.take_command(), None);
        assert_eq!(mailbox.last_command_kind(), CommandKind::None);
    }

    #[test]
    fn test_take_command_is_read_once() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        let cmd = Command::Velocity(Vector3::new(1.0, 2.0, 3.0));
        mailbox.write_command(cmd);

        assert_eq!(mailbox.take_command(), Some(cmd));
        assert_eq!(mailbox.take_command(), None);
        // Underlying fields are still readable
        assert_eq!(mailbox.velocity(), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(mailbox.last_command_kind(), CommandKind::Velocity);
    }

    #[test]
    fn test_latest_command_wins() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.write_command(accel_cmd(1.0));
        mailbox.write_command(accel_cmd(2.0));

        assert_eq!(mailbox.take_command(), Some(accel_cmd(2.0)));
        assert_eq!(mailbox.take_command(), None);
    }

    #[test]
    fn test_rewrite_after_take_is_new_again() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.write_command(accel_cmd(1.0));
        assert!(mailbox.take_command().is_some());
        mailbox.write_command(accel_cmd(1.0));
        assert_eq!(mailbox.take_command(), Some(accel_cmd(1.0)));
    }

    #[test]
    fn test_unconsumed_command_never_expires() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.write_command(accel_cmd(3.0));
        time.advance_ms(60_000);
        assert_eq!(mailbox.take_command(), Some(accel_cmd(3.0)));
    }

    #[test]
    fn test_command_timestamp() {
        let time = MockTime::with_initial_ms(1234);
        let mailbox = TrackingMailbox::new(&time);
        mailbox.write_command(Command::None);
        assert_eq!(mailbox.last_command_timestamp_ms(), 1234);
    }

    #[test]
    fn test_getters_reject_mismatched_variant() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.write_command(Command::Position(Location {
            lat: 1,
            lng: 2,
            alt_cm: 300,
            frame: AltFrame::AboveHome,
        }));

        assert!(mailbox.position().is_some());
        assert!(mailbox.accel_yaw_vrate().is_none());
        assert!(mailbox.attitude_vrate().is_none());
        assert!(mailbox.velocity().is_none());
        assert!(mailbox.position_velocity().is_none());
    }

    #[test]
    fn test_getters_do_not_consume() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.write_command(accel_cmd(5.0));
        assert!(mailbox.accel_yaw_vrate().is_some());
        assert!(mailbox.take_command().is_some());
    }

    // ========== Status freshness ==========

    #[test]
    fn test_no_status_is_not_fresh() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);
        assert!(!mailbox.is_status_fresh());
        assert!(!mailbox.ready_for_takeoff());
    }

    #[test]
    fn test_status_freshness_window() {
        let time = MockTime::with_initial_ms(1000);
        let mailbox = TrackingMailbox::new(&time);
        mailbox.write_status(ready_status());

        assert!(mailbox.is_status_fresh());
        time.set_ms(1499);
        assert!(mailbox.is_status_fresh());
        time.set_ms(1500);
        assert!(!mailbox.is_status_fresh());
    }

    #[test]
    fn test_stale_status_reads_all_false() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);
        mailbox.write_status(ready_status());

        assert!(mailbox.ready_for_takeoff());
        assert!(mailbox.ready_for_land());
        assert!(mailbox.commbox_link_healthy());
        assert!(mailbox.tag_tracking_active());
        assert!(mailbox.takeoff_complete());

        time.advance_ms(STATUS_TIMEOUT_MS);

        assert!(!mailbox.ready_for_takeoff());
        assert!(!mailbox.ready_for_land());
        assert!(!mailbox.commbox_link_healthy());
        assert!(!mailbox.tag_tracking_active());
        assert!(!mailbox.takeoff_complete());
    }

    #[test]
    fn test_commbox_link_requires_all_three_flags() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        for missing in 0..3 {
            let mut status = ready_status();
            match missing {
                0 => status.commbox_ok = false,
                1 => status.commbox_gps_ok = false,
                _ => status.tracking_commbox_gps = false,
            }
            mailbox.write_status(status);
            assert!(!mailbox.commbox_link_healthy());
        }

        mailbox.write_status(ready_status());
        assert!(mailbox.commbox_link_healthy());
    }

    // ========== Location debounce ==========

    #[test]
    fn test_location_reached_reported_once() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        let mut status = ready_status();
        status.at_location = true;
        mailbox.write_status(status);
        // Tracker keeps reporting at_location while hovering there
        mailbox.write_status(status);

        assert!(mailbox.take_location_reached_flag());
        assert!(!mailbox.take_location_reached_flag());

        mailbox.write_status(status);
        assert!(!mailbox.take_location_reached_flag());
    }

    #[test]
    fn test_location_reached_after_leaving() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        let mut status = ready_status();
        status.at_location = true;
        mailbox.write_status(status);
        assert!(mailbox.take_location_reached_flag());

        status.at_location = false;
        mailbox.write_status(status);
        status.at_location = true;
        mailbox.write_status(status);

        assert!(mailbox.take_location_reached_flag());
        assert!(!mailbox.take_location_reached_flag());
    }

    #[test]
    fn test_location_reached_after_stale_gap() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        let mut status = ready_status();
        status.at_location = true;
        mailbox.write_status(status);
        assert!(mailbox.take_location_reached_flag());

        // Status link drops while the vehicle moves to the next point
        time.advance_ms(30_000);
        mailbox.write_status(status);

        assert!(mailbox.take_location_reached_flag());
        assert!(!mailbox.take_location_reached_flag());
    }

    #[test]
    fn test_location_held_within_timeout_not_repeated() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        let mut status = ready_status();
        status.at_location = true;
        mailbox.write_status(status);
        assert!(mailbox.take_location_reached_flag());

        time.advance_ms(STATUS_TIMEOUT_MS - 1);
        mailbox.write_status(status);
        assert!(!mailbox.take_location_reached_flag());
    }

    // ========== Tether ==========

    #[test]
    fn test_tether_never_reported() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);
        assert!(mailbox.tether_timed_out());
        assert!(!mailbox.tether_high_tension());
        assert_eq!(mailbox.tether_status_timestamp_ms(), None);
        assert_eq!(mailbox.tether_cable_out_m(), 0.0);
    }

    #[test]
    fn test_tether_timeout_window() {
        let time = MockTime::with_initial_ms(100);
        let mailbox = TrackingMailbox::new(&time);
        mailbox.write_tether(false, 10.0);

        assert_eq!(mailbox.tether_status_timestamp_ms(), Some(100));
        time.set_ms(100 + TETHER_TIMEOUT_MS - 1);
        assert!(!mailbox.tether_timed_out());
        time.set_ms(100 + TETHER_TIMEOUT_MS);
        assert!(mailbox.tether_timed_out());
    }

    #[test]
    fn test_high_tension_ignores_timeout() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);
        mailbox.write_tether(true, 50.0);

        time.advance_ms(10 * TETHER_TIMEOUT_MS);
        assert!(mailbox.tether_timed_out());
        assert!(mailbox.tether_high_tension());
        assert!((mailbox.tether_cable_out_m() - 15.24).abs() < 1e-4);
    }

    #[test]
    fn test_high_tension_latch_is_sticky() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        assert!(!mailbox.high_tension_latch());
        mailbox.set_high_tension_latch(true);
        mailbox.write_tether(false, 0.0);
        time.advance_ms(60_000);
        assert!(mailbox.high_tension_latch());

        mailbox.set_high_tension_latch(false);
        assert!(!mailbox.high_tension_latch());
    }

    // ========== Target estimate ==========

    #[test]
    fn test_target_estimate_stamped() {
        let time = MockTime::with_initial_ms(777);
        let mailbox = TrackingMailbox::new(&time);
        assert!(mailbox.target_estimate().is_none());

        mailbox.write_target_estimate(
            Vector3::new(100.0, 200.0, -300.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 9000.0),
        );

        let est = mailbox.target_estimate().unwrap();
        assert_eq!(est.pos_cm, Vector3::new(100.0, 200.0, -300.0));
        assert_eq!(est.att_cd.z, 9000.0);
        assert_eq!(est.timestamp_ms, 777);
    }

    // ========== Message dispatch ==========

    #[test]
    fn test_handle_message_dispatch() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.handle_message(TrackerMessage::Status(ready_status()));
        mailbox.handle_message(TrackerMessage::Command(accel_cmd(4.0)));
        mailbox.handle_message(TrackerMessage::Tether {
            high_tension: true,
            cable_out_ft: 1.0,
        });
        mailbox.handle_message(TrackerMessage::TargetEstimate {
            pos_cm: Vector3::zeros(),
            vel_cms: Vector3::zeros(),
            att_cd: Vector3::zeros(),
        });

        assert!(mailbox.ready_for_takeoff());
        assert_eq!(mailbox.take_command(), Some(accel_cmd(4.0)));
        assert!(mailbox.tether_high_tension());
        assert!(mailbox.target_estimate().is_some());
    }

    // ========== Outbound requests ==========

    #[test]
    fn test_requests_last_write_wins() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);
        assert_eq!(mailbox.take_request(), None);

        mailbox.request_takeoff(10.0);
        mailbox.request_land(0.5);

        assert_eq!(
            mailbox.take_request(),
            Some(TrackerRequest::Land {
                descent_rate_ms: 0.5
            })
        );
        assert_eq!(mailbox.take_request(), None);
    }

    #[test]
    fn test_each_request_kind() {
        let time = MockTime::new();
        let mailbox = TrackingMailbox::new(&time);

        mailbox.request_alt_change(12.0);
        assert_eq!(
            mailbox.take_request(),
            Some(TrackerRequest::AltChange { alt_m: 12.0 })
        );

        mailbox.request_rtb(15.0, 2.5, 1.5, 5.0);
        assert_eq!(
            mailbox.take_request(),
            Some(TrackerRequest::Rtb {
                alt_m: 15.0,
                rate_up_ms: 2.5,
                rate_down_ms: 1.5,
                rate_xy_ms: 5.0,
            })
        );

        mailbox.request_move(Vector3::new(1.0, -1.0, 0.0), true);
        assert_eq!(
            mailbox.take_request(),
            Some(TrackerRequest::MoveTarget {
                offset_ned_m: Vector3::new(1.0, -1.0, 0.0),
                is_rate: true,
            })
        );

        mailbox.stop_commanding();
        assert_eq!(mailbox.take_request(), Some(TrackerRequest::StopCommanding));
    }
}
