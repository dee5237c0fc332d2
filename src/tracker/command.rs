//! Tracker motion commands
//!
//! Units follow the flight controller: centimetres, cm/s, cm/s² and
//! centidegrees. A `Command` is an exhaustive variant type; consumers decompose
//! it with the per-variant accessors, which reject both a variant mismatch and
//! a non-finite payload.

use nalgebra::{Vector2, Vector3};

/// Convert centidegrees to radians
pub fn cd_to_rad(cd: f32) -> f32 {
    (cd / 100.0).to_radians()
}

/// Altitude reference of a `Location`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AltFrame {
    /// Above mean sea level
    AbsoluteMsl,
    /// Above the home position
    #[default]
    AboveHome,
    /// Above terrain
    AboveTerrain,
}

/// Geographic location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Latitude (degrees * 1e7)
    pub lat: i32,
    /// Longitude (degrees * 1e7)
    pub lng: i32,
    /// Altitude (cm) in `frame`
    pub alt_cm: i32,
    /// Altitude reference
    pub frame: AltFrame,
}

/// Horizontal acceleration with yaw and climb rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelCommand {
    /// North/east acceleration (cm/s²)
    pub accel_cmss: Vector2<f32>,
    /// Yaw angle or rate (centidegrees or centidegrees/s)
    pub yaw_cd: f32,
    /// Climb rate (cm/s, positive up)
    pub climb_rate_cms: f32,
    /// `yaw_cd` is a rate rather than an angle
    pub yaw_is_rate: bool,
}

impl AccelCommand {
    /// Zero acceleration, zero climb, zero yaw rate
    pub fn hold() -> Self {
        Self {
            accel_cmss: Vector2::zeros(),
            yaw_cd: 0.0,
            climb_rate_cms: 0.0,
            yaw_is_rate: true,
        }
    }

    fn is_finite(&self) -> bool {
        self.accel_cmss.iter().all(|v| v.is_finite())
            && self.yaw_cd.is_finite()
            && self.climb_rate_cms.is_finite()
    }
}

/// Attitude target with climb rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeCommand {
    /// Roll (centidegrees)
    pub roll_cd: f32,
    /// Pitch (centidegrees)
    pub pitch_cd: f32,
    /// Yaw angle or rate (centidegrees or centidegrees/s)
    pub yaw_cd: f32,
    /// Climb rate (cm/s, positive up)
    pub climb_rate_cms: f32,
    /// `yaw_cd` is a rate rather than an angle
    pub yaw_is_rate: bool,
}

impl AttitudeCommand {
    /// Level attitude, zero climb, zero yaw rate
    pub fn hold() -> Self {
        Self {
            roll_cd: 0.0,
            pitch_cd: 0.0,
            yaw_cd: 0.0,
            climb_rate_cms: 0.0,
            yaw_is_rate: true,
        }
    }

    fn is_finite(&self) -> bool {
        self.roll_cd.is_finite()
            && self.pitch_cd.is_finite()
            && self.yaw_cd.is_finite()
            && self.climb_rate_cms.is_finite()
    }
}

/// Destination with a feed-forward velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionVelocityCommand {
    /// Destination
    pub location: Location,
    /// Velocity (cm/s, NEU)
    pub vel_cms: Vector3<f32>,
}

/// Command variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandKind {
    /// No command stored
    #[default]
    None,
    /// `Command::Accel`
    Accel,
    /// `Command::Attitude`
    Attitude,
    /// `Command::Velocity`
    Velocity,
    /// `Command::Position`
    Position,
    /// `Command::PositionVelocity`
    PositionVelocity,
}

impl CommandKind {
    /// Name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::None => "None",
            CommandKind::Accel => "Accel",
            CommandKind::Attitude => "Attitude",
            CommandKind::Velocity => "Velocity",
            CommandKind::Position => "Position",
            CommandKind::PositionVelocity => "PositionVelocity",
        }
    }
}

/// Motion command issued by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Lean via horizontal acceleration
    Accel(AccelCommand),
    /// Explicit attitude
    Attitude(AttitudeCommand),
    /// Velocity (cm/s, NEU)
    Velocity(Vector3<f32>),
    /// Fly to a location
    Position(Location),
    /// Fly to a location with feed-forward velocity
    PositionVelocity(PositionVelocityCommand),
}

impl Command {
    /// Variant tag of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::None => CommandKind::None,
            Command::Accel(_) => CommandKind::Accel,
            Command::Attitude(_) => CommandKind::Attitude,
            Command::Velocity(_) => CommandKind::Velocity,
            Command::Position(_) => CommandKind::Position,
            Command::PositionVelocity(_) => CommandKind::PositionVelocity,
        }
    }

    /// Acceleration payload, if this is a well-formed `Accel` command
    pub fn accel(&self) -> Option<AccelCommand> {
        match self {
            Command::Accel(cmd) if cmd.is_finite() => Some(*cmd),
            _ => None,
        }
    }

    /// Attitude payload, if this is a well-formed `Attitude` command
    pub fn attitude(&self) -> Option<AttitudeCommand> {
        match self {
            Command::Attitude(cmd) if cmd.is_finite() => Some(*cmd),
            _ => None,
        }
    }

    /// Velocity payload, if this is a well-formed `Velocity` command
    pub fn velocity(&self) -> Option<Vector3<f32>> {
        match self {
            Command::Velocity(vel) if vel.iter().all(|v| v.is_finite()) => Some(*vel),
            _ => None,
        }
    }

    /// Destination, if this is a `Position` command
    pub fn position(&self) -> Option<Location> {
        match self {
            Command::Position(loc) => Some(*loc),
            _ => None,
        }
    }

    /// Destination and velocity, if this is a well-formed `PositionVelocity` command
    pub fn position_velocity(&self) -> Option<PositionVelocityCommand> {
        match self {
            Command::PositionVelocity(cmd) if cmd.vel_cms.iter().all(|v| v.is_finite()) => {
                Some(*cmd)
            }
            _ => None,
        }
    }
}
