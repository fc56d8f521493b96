//! Hardcoded parameters for the stock arm

pub mod arm_kinematics {
    use crate::parameters::arm_kinematics::Parameters;

    /// Length of the gripper beyond the wrist pivot on the stock arm, cm.
    pub const GRIPPER_LENGTH: f64 = 1.1;

    #[allow(dead_code)]
    impl Parameters {
        // Stock arm: 10 cm links, servo mounting errors of +20 on the shoulder and -5 on the elbow.
        pub fn new() -> Self {
            Parameters {
                upper_arm: 10.0,
                forearm: 10.0,
                gripper_length: GRIPPER_LENGTH,
                shoulder_calibration: 20.0,
                elbow_calibration: -5.0,
                default_wrist: 90,
            }
        }

        /// Arm with the given link lengths, stock gripper and calibration.
        pub fn with_links(upper_arm: f64, forearm: f64) -> Self {
            Parameters {
                upper_arm,
                forearm,
                ..Self::new()
            }
        }

        /// Same geometry without calibration offsets. Angles are then pure triangle solutions.
        pub fn uncalibrated(self) -> Self {
            Parameters {
                shoulder_calibration: 0.0,
                elbow_calibration: 0.0,
                ..self
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Self::new()
        }
    }
}
