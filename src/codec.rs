//! Text form of the coordinates as sent to the actuators:
//! `elbow,shoulder,wrist,base,gripper,wrist_rotate`, decimal integers separated by single commas.

use std::fmt;
use std::str::FromStr;

use crate::kinematic_traits::{Coordinates, Joint};
use crate::kinematics_error::KinematicsError;

pub const FIELD_SEPARATOR: char = ',';

pub fn format(coords: &Coordinates) -> String {
    coords.to_string()
}

/// Parses the six fields. Values are not clamped; use
/// [`Constraints::constrain`](crate::constraints::Constraints::constrain) if needed.
pub fn parse(text: &str) -> Result<Coordinates, KinematicsError> {
    let fields: Vec<&str> = text.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() != Joint::ALL.len() {
        return Err(KinematicsError::MalformedCoordinates(format!(
            "expected {} fields, found {} in '{}'", Joint::ALL.len(), fields.len(), text
        )));
    }

    let mut values = [0; 6];
    for (joint, field) in Joint::ALL.iter().zip(fields) {
        values[joint.index()] = field.trim().parse::<i32>().map_err(|e| {
            KinematicsError::MalformedCoordinates(format!(
                "{} value '{}' is not an integer: {}", joint.name(), field, e
            ))
        })?;
    }
    Ok(Coordinates::from_array(values))
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.elbow, self.shoulder, self.wrist, self.base, self.gripper, self.wrist_rotate
        )
    }
}

impl FromStr for Coordinates {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
