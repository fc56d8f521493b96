//! Errors reported by the pose solver, the coordinate codec and the preset table

use std::fmt;

/// The solving stage at which a target was found to be out of reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reach check before the gripper offset is computed.
    GripperOffset,
    /// Reach check of the upper arm / forearm triangle, after the height adjustment.
    ArmTriangle,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::GripperOffset => write!(f, "gripper offset"),
            Stage::ArmTriangle => write!(f, "arm triangle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The target lies outside the envelope of the arm. `reach` is the distance from the
    /// shoulder pivot to the target, `limit` the sum of upper arm and forearm lengths.
    /// Also reported for targets so close to the pivot that the triangle cannot close.
    Unreachable { reach: f64, limit: f64, stage: Stage },
    /// Text that does not decompose into exactly six integer fields.
    MalformedCoordinates(String),
    /// Preset name outside of the fixed set.
    UnknownPreset(String),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicsError::Unreachable { reach, limit, stage } =>
                write!(f, "Unreachable: target at {:.3} is outside the arm envelope (limit {:.3}) at {} stage",
                       reach, limit, stage),
            KinematicsError::MalformedCoordinates(ref msg) =>
                write!(f, "Malformed coordinates: {}", msg),
            KinematicsError::UnknownPreset(ref name) =>
                write!(f, "Unknown preset: {}", name),
        }
    }
}

impl std::error::Error for KinematicsError {}
