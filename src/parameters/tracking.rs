//! Tracking Mode Parameter Definitions
//!
//! # Parameters
//!
//! - `RTL_ALT` - Return altitude (cm)
//! - `RTL_SPEED` - Return horizontal speed (cm/s, 0 = use waypoint speed)
//! - `TRK_RTB_ALT` - Tracking-mode return altitude override (cm, 0 = use `RTL_ALT`)
//! - `ARMING_CHECK` - Enabled pre-arm check bitmask
//!
//! `RTL_ALT`, `RTL_SPEED` and `ARMING_CHECK` carry the autopilot's standard
//! names and defaults.

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::arming::CheckCategory;

const DEFAULT_RTL_ALT_CM: i32 = 1500;
const DEFAULT_RTL_SPEED_CMS: i32 = 0;
const DEFAULT_RTB_ALT_CM: i32 = 0;
const DEFAULT_ARMING_CHECK: i32 = CheckCategory::All as i32;

/// Tracking mode parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingParams {
    /// Return altitude (cm)
    pub rtl_alt_cm: f32,
    /// Return horizontal speed (cm/s), 0 selects the waypoint speed
    pub rtl_speed_cms: f32,
    /// Mode-specific return altitude (cm), 0 selects `rtl_alt_cm`
    pub rtb_alt_cm: f32,
    /// Enabled pre-arm check categories
    pub arming_checks: u32,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            rtl_alt_cm: DEFAULT_RTL_ALT_CM as f32,
            rtl_speed_cms: DEFAULT_RTL_SPEED_CMS as f32,
            rtb_alt_cm: DEFAULT_RTB_ALT_CM as f32,
            arming_checks: DEFAULT_ARMING_CHECK as u32,
        }
    }
}

impl TrackingParams {
    /// Register tracking parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "RTL_ALT",
            ParamValue::Int(DEFAULT_RTL_ALT_CM),
            ParamFlags::empty(),
        )?;
        store.register(
            "RTL_SPEED",
            ParamValue::Int(DEFAULT_RTL_SPEED_CMS),
            ParamFlags::empty(),
        )?;
        store.register(
            "TRK_RTB_ALT",
            ParamValue::Int(DEFAULT_RTB_ALT_CM),
            ParamFlags::empty(),
        )?;
        store.register(
            "ARMING_CHECK",
            ParamValue::Int(DEFAULT_ARMING_CHECK),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load tracking parameters from parameter store
    ///
    /// Missing parameters fall back to their defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let defaults = Self::default();

        let rtl_alt_cm = store
            .get("RTL_ALT")
            .map(ParamValue::as_f32)
            .unwrap_or(defaults.rtl_alt_cm);
        let rtl_speed_cms = store
            .get("RTL_SPEED")
            .map(ParamValue::as_f32)
            .unwrap_or(defaults.rtl_speed_cms);
        let rtb_alt_cm = store
            .get("TRK_RTB_ALT")
            .map(ParamValue::as_f32)
            .unwrap_or(defaults.rtb_alt_cm);
        let arming_checks = store
            .get("ARMING_CHECK")
            .map(|v| v.as_i32() as u32)
            .unwrap_or(defaults.arming_checks);

        Self {
            rtl_alt_cm,
            rtl_speed_cms,
            rtb_alt_cm,
            arming_checks,
        }
    }

    /// Altitude used when requesting a return-to-base (cm)
    pub fn return_alt_cm(&self) -> f32 {
        if self.rtb_alt_cm != 0.0 {
            self.rtb_alt_cm
        } else {
            self.rtl_alt_cm
        }
    }

    /// Horizontal speed used when requesting a return-to-base (cm/s)
    pub fn return_speed_cms(&self, wp_speed_cms: f32) -> f32 {
        if self.rtl_speed_cms != 0.0 {
            self.rtl_speed_cms
        } else {
            wp_speed_cms
        }
    }

    /// Whether the tracker GPS pre-arm check is enabled
    pub fn tracker_gps_check_enabled(&self) -> bool {
        CheckCategory::TrackerGps.is_enabled(self.arming_checks)
    }
}
