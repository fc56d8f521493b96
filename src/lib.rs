//! Rust implementation of inverse kinematics for a small six-servo robot arm
//!
//! The arm has a rotating base, a shoulder and an elbow that form a two-link planar arm
//! (upper arm and forearm), a wrist, a wrist rotation and a gripper. A target is given as
//! base rotation plus height and distance in the arm plane, together with the wanted
//! gripper opening, wrist rotation and (optionally) wrist angle.
//!
//! # Features
//!
//! - The planar arm is solved from the triangle between upper arm, forearm and the line from
//!   the shoulder pivot to the target, using the half-angle form of the law of cosines.
//! - The gripper offset from the wrist pivot is compensated by raising the target height
//!   before solving.
//! - Unreachable targets are reported as errors, never as zero or default poses.
//! - All returned coordinates are clamped into the mechanical limits of the joints.
//! - Coordinates have a compact text form (`elbow,shoulder,wrist,base,gripper,wrist_rotate`)
//!   for sending to the servo controller.
//! - Named preset poses (default, low, high, park, ninety, min, max).
//! - Arm geometry and calibration can be read from YAML.
//!
//! # Parameters
//!
//! The geometry is given by the upper arm length (M), forearm length (N) and gripper length.
//! Solved shoulder and elbow angles are corrected by calibration offsets, +20 and -5 degrees
//! on the stock arm. See [`parameters::arm_kinematics::Parameters`].
//!
//! ```
//! use rucicka_kinematics::kinematic_traits::{Kinematics, PoseRequest};
//! use rucicka_kinematics::kinematics_impl::ArmKinematics;
//! use rucicka_kinematics::parameters::arm_kinematics::Parameters;
//!
//! let arm = ArmKinematics::new(Parameters::new());
//! let coords = arm.position_to_coords(&PoseRequest::new(70, 5.0, 5.0, 40, 86)).unwrap();
//! assert_eq!(coords.to_string(), "38,135,90,70,40,86");
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod triangle;
pub mod gripper;
pub mod diagnostics;

pub mod constraints;
pub mod codec;
pub mod presets;

#[cfg(test)]
mod tests;
