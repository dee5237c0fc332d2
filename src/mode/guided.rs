//! Guided controller interface
//!
//! The tracking mode does not fly the vehicle itself: it forwards primitive
//! targets to the vehicle's guided controller, which owns the attitude,
//! velocity and position loops. This trait is the seam.

use libm::{atanf, cosf, sinf};
use nalgebra::{UnitQuaternion, Vector3};

use crate::tracker::Location;

/// Standard gravity (m/s²)
const GRAVITY_MSS: f32 = 9.80665;

/// Entry points of the underlying guided controller
pub trait GuidedController {
    /// Prepare guided control (called from the owning mode's `init`)
    fn init(&mut self, ignore_checks: bool) -> Result<(), &'static str>;

    /// Per-tick guided control update
    fn run(&mut self);

    /// Attitude target
    ///
    /// # Arguments
    ///
    /// * `attitude` - Target orientation (NED)
    /// * `climb_rate_cms` - Climb rate (cm/s, positive up)
    /// * `use_yaw_rate` - Follow `yaw_rate_rads` instead of the orientation's yaw
    /// * `yaw_rate_rads` - Yaw rate (rad/s)
    fn set_angle(
        &mut self,
        attitude: UnitQuaternion<f32>,
        climb_rate_cms: f32,
        use_yaw_rate: bool,
        yaw_rate_rads: f32,
    );

    /// Velocity target (cm/s, NEU)
    fn set_velocity(&mut self, vel_cms: Vector3<f32>);

    /// Position target; returns `false` if the destination was rejected
    fn set_destination(&mut self, destination: &Location) -> bool;

    /// Position target (cm from EKF origin, NEU) with feed-forward velocity (cm/s)
    fn set_destination_posvel(&mut self, destination_cm: Vector3<f32>, vel_cms: Vector3<f32>);

    /// Convert a north/east acceleration (cm/s²) into roll and pitch (centidegrees)
    ///
    /// Implementations usually call [`accel_to_lean_angles`] with the current yaw.
    fn accel_to_lean_angles(&self, accel_x_cmss: f32, accel_y_cmss: f32) -> (f32, f32);

    /// Convert a location to the controller's position frame (cm from EKF origin, NEU)
    fn location_to_neu_cm(&self, location: &Location) -> Vector3<f32>;

    /// Maximum climb speed (cm/s)
    fn speed_up_cms(&self) -> f32;

    /// Maximum descent speed (cm/s)
    fn speed_down_cms(&self) -> f32;

    /// Default waypoint horizontal speed (cm/s)
    fn wp_speed_xy_cms(&self) -> f32;

    /// Vehicle is on the ground
    fn is_landed(&self) -> bool;

    /// Hold the current heading
    fn set_yaw_hold(&mut self);

    /// Reset the throttle integrator for takeoff
    fn set_throttle_takeoff(&mut self);
}

/// Lean angles (centidegrees) producing a north/east acceleration (cm/s²)
///
/// Rotates the acceleration into the body forward/right frame using `yaw_rad`,
/// then tilts against gravity.
///
/// # Returns
///
/// Tuple of (roll_cd, pitch_cd)
pub fn accel_to_lean_angles(accel_x_cmss: f32, accel_y_cmss: f32, yaw_rad: f32) -> (f32, f32) {
    const RAD_TO_CD: f32 = 18000.0 / core::f32::consts::PI;

    let (sin_yaw, cos_yaw) = (sinf(yaw_rad), cosf(yaw_rad));
    let accel_forward = accel_x_cmss * cos_yaw + accel_y_cmss * sin_yaw;
    let accel_right = -accel_x_cmss * sin_yaw + accel_y_cmss * cos_yaw;

    let pitch_rad = atanf(-accel_forward / (GRAVITY_MSS * 100.0));
    let roll_rad = atanf(accel_right * cosf(pitch_rad) / (GRAVITY_MSS * 100.0));

    (roll_rad * RAD_TO_CD, pitch_rad * RAD_TO_CD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_accel_is_level() {
        let (roll, pitch) = accel_to_lean_angles(0.0, 0.0, 1.2);
        assert_eq!(roll, 0.0);
        assert_eq!(pitch, 0.0);
    }

    #[test]
    fn test_forward_accel_pitches_down() {
        // Facing north, 1 g north: pitch -45 deg
        let (roll, pitch) = accel_to_lean_angles(GRAVITY_MSS * 100.0, 0.0, 0.0);
        assert!(roll.abs() < 1e-3);
        assert!((pitch + 4500.0).abs() < 0.1);
    }

    #[test]
    fn test_east_accel_rolls_right_when_facing_north() {
        let (roll, pitch) = accel_to_lean_angles(0.0, GRAVITY_MSS * 100.0, 0.0);
        assert!((roll - 4500.0).abs() < 0.1);
        assert!(pitch.abs() < 1e-3);
    }

    #[test]
    fn test_yaw_rotates_into_body_frame() {
        // Facing east, an east acceleration is straight ahead
        let (roll, pitch) =
            accel_to_lean_angles(0.0, GRAVITY_MSS * 100.0, core::f32::consts::FRAC_PI_2);
        assert!(roll.abs() < 0.1);
        assert!((pitch + 4500.0).abs() < 0.1);
    }
}
