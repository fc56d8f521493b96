use crate::kinematic_traits::{Coordinates, Joint};

pub const MIN_ELBOW: i32 = 19;
pub const MIN_SHOULDER: i32 = 50;
pub const MIN_WRIST: i32 = 0;
pub const MIN_BASE: i32 = 40;
pub const MIN_GRIPPER: i32 = 30;
pub const MIN_WRIST_ROTATE: i32 = 0;

pub const MAX_ELBOW: i32 = 90;
pub const MAX_SHOULDER: i32 = 170;
pub const MAX_WRIST: i32 = 180;
pub const MAX_BASE: i32 = 120;
pub const MAX_GRIPPER: i32 = 110;
pub const MAX_WRIST_ROTATE: i32 = 86;

/// Mechanical limits of the arm joints, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Lowest allowed value per joint
    pub from: [i32; 6],

    /// Highest allowed value per joint
    pub to: [i32; 6],
}

impl Constraints {
    /// Limits of the stock arm.
    pub fn new() -> Self {
        Constraints {
            from: [MIN_ELBOW, MIN_SHOULDER, MIN_WRIST, MIN_BASE, MIN_GRIPPER, MIN_WRIST_ROTATE],
            to: [MAX_ELBOW, MAX_SHOULDER, MAX_WRIST, MAX_BASE, MAX_GRIPPER, MAX_WRIST_ROTATE],
        }
    }

    /// Custom limits. Bounds given in the wrong order are swapped.
    pub fn from_limits(from: [i32; 6], to: [i32; 6]) -> Self {
        let mut lower = from;
        let mut upper = to;
        for i in 0..6 {
            if lower[i] > upper[i] {
                std::mem::swap(&mut lower[i], &mut upper[i]);
            }
        }
        Constraints { from: lower, to: upper }
    }

    pub fn min(&self, joint: Joint) -> i32 {
        self.from[joint.index()]
    }

    pub fn max(&self, joint: Joint) -> i32 {
        self.to[joint.index()]
    }

    /// Record where every joint is clamped into its limits.
    pub fn constrain(&self, coords: &Coordinates) -> Coordinates {
        let values = coords.as_array();
        Coordinates::from_array(std::array::from_fn(|i| values[i].clamp(self.from[i], self.to[i])))
    }

    pub fn compliant(&self, coords: &Coordinates) -> bool {
        coords.as_array().iter().enumerate()
            .all(|(i, &value)| value >= self.from[i] && value <= self.to[i])
    }

    /// Joints of the record that are outside the limits.
    pub fn violations(&self, coords: &Coordinates) -> Vec<Joint> {
        Joint::ALL.into_iter()
            .filter(|&joint| {
                let value = coords.get(joint);
                value < self.min(joint) || value > self.max(joint)
            })
            .collect()
    }

    /// Record with the lowest value of every joint.
    pub fn lower(&self) -> Coordinates {
        Coordinates::from_array(self.from)
    }

    /// Record with the highest value of every joint.
    pub fn upper(&self) -> Coordinates {
        Coordinates::from_array(self.to)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamps the record into the limits of the stock arm.
pub fn constrain(coords: &Coordinates) -> Coordinates {
    Constraints::new().constrain(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limits_unchanged() {
        let coords = Coordinates::from_array([50, 140, 90, 70, 40, 86]);
        assert!(Constraints::new().compliant(&coords));
        assert_eq!(constrain(&coords), coords);
    }

    #[test]
    fn test_clamps_below() {
        let coords = Coordinates::from_array([0, -10, -1, 0, 0, -90]);
        let clamped = constrain(&coords);
        assert_eq!(clamped, Coordinates::from_array([19, 50, 0, 40, 30, 0]));
    }

    #[test]
    fn test_clamps_above() {
        let coords = Coordinates::from_array([91, 400, 181, 121, 111, 87]);
        let clamped = constrain(&coords);
        assert_eq!(clamped, Coordinates::from_array([90, 170, 180, 120, 110, 86]));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let limits = Constraints::new();
        assert!(limits.compliant(&limits.lower()));
        assert!(limits.compliant(&limits.upper()));
        assert_eq!(limits.constrain(&limits.lower()), limits.lower());
        assert_eq!(limits.constrain(&limits.upper()), limits.upper());
    }

    #[test]
    fn test_violations() {
        let coords = Coordinates::from_array([10, 140, 90, 130, 40, 86]);
        let limits = Constraints::new();
        assert!(!limits.compliant(&coords));
        assert_eq!(limits.violations(&coords), vec![Joint::Elbow, Joint::Base]);
    }

    #[test]
    fn test_swapped_custom_limits() {
        let limits = Constraints::from_limits([90, 50, 0, 40, 30, 0], [19, 170, 180, 120, 110, 86]);
        assert_eq!(limits, Constraints::new());
    }
}
