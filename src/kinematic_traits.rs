//! Defines the coordinate record, the pose request and the `Kinematics` trait

extern crate nalgebra as na;

use na::Vector2;
use crate::kinematics_error::KinematicsError;

/// The six actuated joints, in the order they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Elbow,
    Shoulder,
    Wrist,
    Base,
    Gripper,
    WristRotate,
}

impl Joint {
    pub const ALL: [Joint; 6] = [
        Joint::Elbow,
        Joint::Shoulder,
        Joint::Wrist,
        Joint::Base,
        Joint::Gripper,
        Joint::WristRotate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Joint::Elbow => "elbow",
            Joint::Shoulder => "shoulder",
            Joint::Wrist => "wrist",
            Joint::Base => "base",
            Joint::Gripper => "gripper",
            Joint::WristRotate => "wrist_rotate",
        }
    }

    /// Position of this joint in the wire order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Joint space pose of the arm. Angles are integer degrees, gripper is the servo count
/// for its opening.
///
/// ```
/// use rucicka_kinematics::kinematic_traits::Coordinates;
///
/// let coords = Coordinates::from_array([50, 140, 90, 70, 40, 86]);
/// assert_eq!(coords.shoulder, 140);
/// assert_eq!(coords.to_string(), "50,140,90,70,40,86");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub elbow: i32,
    pub shoulder: i32,
    pub wrist: i32,
    pub base: i32,
    pub gripper: i32,
    pub wrist_rotate: i32,
}

impl Coordinates {
    /// Builds the record from values in wire order.
    pub fn from_array(values: [i32; 6]) -> Self {
        Coordinates {
            elbow: values[0],
            shoulder: values[1],
            wrist: values[2],
            base: values[3],
            gripper: values[4],
            wrist_rotate: values[5],
        }
    }

    /// Values in wire order: elbow, shoulder, wrist, base, gripper, wrist_rotate.
    pub fn as_array(&self) -> [i32; 6] {
        [self.elbow, self.shoulder, self.wrist, self.base, self.gripper, self.wrist_rotate]
    }

    pub fn get(&self, joint: Joint) -> i32 {
        self.as_array()[joint.index()]
    }
}

/// A request to place the gripper at the given point.
///
/// `height` and `distance` are measured from the shoulder pivot in the plane selected by
/// `rotation` (the base angle), in the same length unit as the arm parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseRequest {
    pub rotation: i32,
    pub height: f64,
    pub distance: f64,
    pub gripper: i32,
    pub wrist_rotate: i32,
    /// Wrist angle in degrees. If not given, the default wrist of the parameters is used.
    pub wrist: Option<i32>,
}

impl PoseRequest {
    pub fn new(rotation: i32, height: f64, distance: f64, gripper: i32, wrist_rotate: i32) -> Self {
        PoseRequest { rotation, height, distance, gripper, wrist_rotate, wrist: None }
    }

    pub fn with_wrist(self, wrist: i32) -> Self {
        PoseRequest { wrist: Some(wrist), ..self }
    }

    /// Target point in the arm plane as (distance, height).
    pub fn target(&self) -> Vector2<f64> {
        Vector2::new(self.distance, self.height)
    }
}

pub trait Kinematics {
    /// Solves joint coordinates for the requested position. The result is already
    /// constrained to the joint limits. Fails only if the target is out of reach.
    fn position_to_coords(&self, request: &PoseRequest) -> Result<Coordinates, KinematicsError>;

    /// Height correction caused by the gripper offset for the given wrist angle.
    fn gripper_adjustment(&self, distance: f64, height: f64, wrist: i32) -> Result<f64, KinematicsError>;
}
