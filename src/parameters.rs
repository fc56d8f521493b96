//! Defines the arm parameter data structure

pub mod arm_kinematics {

    /// Physical measurements and calibration of the arm. See
    /// [parameters_robots.rs](parameters_robots.rs) for the stock values.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Length of the upper arm, from the shoulder pivot to the elbow pivot (M).
        pub upper_arm: f64,

        /// Length of the forearm, from the elbow pivot to the wrist pivot (N).
        pub forearm: f64,

        /// Offset of the gripper from the wrist pivot.
        pub gripper_length: f64,

        /// Degrees added to the solved shoulder angle.
        pub shoulder_calibration: f64,

        /// Degrees added to the solved elbow angle.
        pub elbow_calibration: f64,

        /// Wrist angle in degrees used when a pose request does not specify one.
        pub default_wrist: i32,
    }

    impl Parameters {
        /// Longest reach from the shoulder pivot. Targets at or beyond it are unreachable.
        pub fn reach(&self) -> f64 {
            self.upper_arm + self.forearm
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "arm_geometry:\n  \
              upper_arm: {}\n  \
              forearm: {}\n  \
              gripper_length: {}\n\
            calibration:\n  \
              shoulder: {}\n  \
              elbow: {}\n\
            default_wrist: {}\n",
                self.upper_arm,
                self.forearm,
                self.gripper_length,
                self.shoulder_calibration,
                self.elbow_calibration,
                self.default_wrist
            )
        }
    }
}
