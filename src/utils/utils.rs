//! Helper functions

use crate::kinematic_traits::{Coordinates, Joint};

/// Two aligned lines: joint names and their values, one column per joint.
pub fn coordinates_table(coords: &Coordinates) -> String {
    let mut names = String::new();
    let mut values = String::new();
    for joint in Joint::ALL {
        names.push_str(&format!("{:>13}", joint.name()));
        values.push_str(&format!("{:>13}", coords.get(joint)));
    }
    format!("{}\n{}", names.trim_end(), values.trim_end())
}
