//! Tracker interface
//!
//! Everything exchanged with the external tag tracker: the command and report
//! types, the decoded inbound message set, outbound requests, and the
//! `TrackingMailbox` that buffers them with freshness and read-once semantics.

pub mod command;
pub mod mailbox;
pub mod message;
pub mod report;

pub use command::{
    cd_to_rad, AccelCommand, AltFrame, AttitudeCommand, Command, CommandKind, Location,
    PositionVelocityCommand,
};
pub use mailbox::{TrackingMailbox, STATUS_TIMEOUT_MS, TETHER_TIMEOUT_MS};
pub use message::{TrackerMessage, TrackerRequest};
pub use report::{TargetEstimate, TetherReport, TrackerStatus};
