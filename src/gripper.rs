//! Height correction for the gripper offset.
//!
//! The gripper sits `gripper_length` beyond the wrist pivot. Depending on the wrist angle
//! this shifts the point the arm actually reaches, so before the arm triangle is solved the
//! requested height is raised by the vertical part of that offset.

use crate::diagnostics::{Diagnostics, GripperTrace};
use crate::kinematics_error::{KinematicsError, Stage};
use crate::parameters::arm_kinematics::Parameters;
use crate::triangle::{half_angle, semi_perimeter};

/// Height correction for the target at `distance`, `height` with the wrist at `wrist` degrees.
///
/// The returned value is between 0 and `gripper_length`. Beyond a right angle (`tau > 90`)
/// the gripper adds nothing; at or below zero it adds its full length. Fails with
/// `Unreachable` if the target is not closer than `upper_arm + forearm`.
pub fn gripper_adjustment(
    parameters: &Parameters,
    distance: f64,
    height: f64,
    wrist: i32,
    diagnostics: &dyn Diagnostics,
) -> Result<f64, KinematicsError> {
    let p = parameters;
    let x = distance.hypot(height);
    let unreachable = KinematicsError::Unreachable {
        reach: x,
        limit: p.reach(),
        stage: Stage::GripperOffset,
    };
    if x >= p.reach() {
        return Err(unreachable);
    }

    let s = semi_perimeter(p.upper_arm, p.forearm, x);
    let gamma = half_angle(s, x, p.forearm);
    let epsilon = (distance / x).asin().to_degrees();
    let alpha = 360.0 - (wrist as f64 + 90.0);
    let tau = alpha - gamma - epsilon;
    if !tau.is_finite() {
        return Err(unreachable);
    }

    let mut adjustment = (tau.to_radians().cos() * p.gripper_length).abs();
    if tau > 90.0 {
        adjustment = 0.0;
    }
    if tau <= 0.0 {
        adjustment = p.gripper_length;
    }

    diagnostics.gripper(&GripperTrace { x, s, alpha, gamma, epsilon, tau, adjustment });
    Ok(adjustment)
}
