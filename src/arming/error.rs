//! Arming Error Types
//!
//! Defines the refusal reasons a flight mode can report when asked whether it
//! allows arming, and the ARMING_CHECK categories used to select optional
//! checks.

use core::fmt;

/// Reasons a flight mode refuses to arm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArmingError {
    /// Arming was requested from a source other than the ground station
    /// (RC sticks, autonomous logic)
    NotFromGcs,
    /// A mode-specific pre-arm check failed
    CheckFailed {
        /// Human-readable reason for failure (also sent to the operator)
        reason: &'static str,
        /// Check category that failed
        category: CheckCategory,
    },
}

impl fmt::Display for ArmingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmingError::NotFromGcs => write!(f, "Arming only allowed from GCS in this mode"),
            ArmingError::CheckFailed { reason, category } => {
                write!(f, "Pre-arm check failed ({}): {}", category, reason)
            }
        }
    }
}

/// Pre-arm check categories (ArduPilot ARMING_CHECK bit layout)
///
/// `All` is bit 0: when it is set every category counts as enabled,
/// matching the autopilot's "all checks" convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CheckCategory {
    /// All checks (bit 0)
    All = 1 << 0,
    /// Barometer check
    Barometer = 1 << 1,
    /// Compass check
    Compass = 1 << 2,
    /// GPS lock check
    Gps = 1 << 3,
    /// IMU/INS check
    Ins = 1 << 4,
    /// Parameters check
    Parameters = 1 << 5,
    /// RC channels check
    RcChannels = 1 << 6,
    /// Board voltage check
    Board = 1 << 7,
    /// Battery check
    Battery = 1 << 8,
    /// System check
    System = 1 << 13,
    /// Tracker commbox link and GPS check
    TrackerGps = 1 << 20,
}

impl CheckCategory {
    /// Check if this category's own bit is set in the given bitmask
    pub fn is_set(self, bitmask: u32) -> bool {
        (bitmask & (self as u32)) != 0
    }

    /// Check if this category is enabled, either explicitly or through `All`
    pub fn is_enabled(self, bitmask: u32) -> bool {
        CheckCategory::All.is_set(bitmask) || self.is_set(bitmask)
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::All => write!(f, "All"),
            CheckCategory::Barometer => write!(f, "Barometer"),
            CheckCategory::Compass => write!(f, "Compass"),
            CheckCategory::Gps => write!(f, "GPS"),
            CheckCategory::Ins => write!(f, "IMU/INS"),
            CheckCategory::Parameters => write!(f, "Parameters"),
            CheckCategory::RcChannels => write!(f, "RC Channels"),
            CheckCategory::Board => write!(f, "Board"),
            CheckCategory::Battery => write!(f, "Battery"),
            CheckCategory::System => write!(f, "System"),
            CheckCategory::TrackerGps => write!(f, "Tracker GPS"),
        }
    }
}
