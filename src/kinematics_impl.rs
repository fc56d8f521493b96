use std::sync::Arc;

use nalgebra::Vector2;

use crate::constraints::Constraints;
use crate::diagnostics::{ArmTrace, Diagnostics, NoDiagnostics};
use crate::gripper;
use crate::kinematic_traits::{Coordinates, Kinematics, PoseRequest};
use crate::kinematics_error::{KinematicsError, Stage};
use crate::parameters::arm_kinematics::Parameters;
use crate::triangle::{half_angle, semi_perimeter};

/// Solver for the arm: base rotation, a two link planar arm (upper arm and forearm),
/// wrist, wrist rotation and gripper.
///
/// The planar part is solved as the triangle between the upper arm, the forearm and the
/// line from the shoulder pivot to the target. The elbow angle lies opposite that line,
/// the shoulder angle is the triangle angle at the shoulder plus the elevation of the target.
#[derive(Clone)]
pub struct ArmKinematics {
    parameters: Parameters,
    constraints: Constraints,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ArmKinematics {
    /// Creates a new `ArmKinematics` instance with the given parameters and
    /// the joint limits of the stock arm.
    pub fn new(parameters: Parameters) -> Self {
        Self::new_with_constraints(parameters, Constraints::new())
    }

    /// Creates a new `ArmKinematics` instance with the given parameters and joint limits.
    pub fn new_with_constraints(parameters: Parameters, constraints: Constraints) -> Self {
        ArmKinematics {
            parameters,
            constraints,
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    /// Sends the intermediate values of every solution to the given sink.
    pub fn with_diagnostics(self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        ArmKinematics { diagnostics, ..self }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Convenience form of [`Kinematics::position_to_coords`].
    pub fn solve(
        &self,
        rotation: i32,
        height: f64,
        distance: f64,
        gripper: i32,
        wrist_rotate: i32,
        wrist: Option<i32>,
    ) -> Result<Coordinates, KinematicsError> {
        let request = PoseRequest { rotation, height, distance, gripper, wrist_rotate, wrist };
        self.position_to_coords(&request)
    }

    /// Elbow and shoulder angles in degrees, before calibration and clamping.
    fn solve_triangle(&self, request: &PoseRequest, wrist: i32) -> Result<(f64, f64), KinematicsError> {
        let p = &self.parameters;
        let diagnostics = self.diagnostics.as_ref();

        let adjustment = gripper::gripper_adjustment(p, request.distance, request.height, wrist, diagnostics)?;
        let target = request.target() + Vector2::<f64>::y() * adjustment;
        let height = target.y;
        let x = target.norm();
        let unreachable = KinematicsError::Unreachable {
            reach: x,
            limit: p.reach(),
            stage: Stage::ArmTriangle,
        };
        if x >= p.reach() {
            return Err(unreachable);
        }

        let s = semi_perimeter(p.upper_arm, p.forearm, x);
        let elbow = half_angle(s, p.upper_arm, p.forearm);
        let small_shoulder = half_angle(s, p.upper_arm, x);
        let big_shoulder = (height / x).asin().to_degrees();
        let shoulder = small_shoulder + big_shoulder;

        diagnostics.arm(&ArmTrace {
            height,
            x,
            s,
            small_shoulder,
            big_shoulder,
            shoulder,
            elbow,
            wrist,
        });

        if !(elbow.is_finite() && shoulder.is_finite()) {
            return Err(unreachable);
        }
        Ok((elbow, shoulder))
    }
}

impl Kinematics for ArmKinematics {
    fn position_to_coords(&self, request: &PoseRequest) -> Result<Coordinates, KinematicsError> {
        let p = &self.parameters;
        let wrist = request.wrist.unwrap_or(p.default_wrist);
        self.diagnostics.request(request, wrist);

        let (elbow, shoulder) = self.solve_triangle(request, wrist)?;
        let elbow = elbow + p.elbow_calibration;
        let shoulder = shoulder + p.shoulder_calibration;

        // Angles go to the servos as whole degrees, fractions are dropped.
        let raw = Coordinates {
            elbow: elbow.trunc() as i32,
            shoulder: shoulder.trunc() as i32,
            wrist,
            base: request.rotation,
            gripper: request.gripper,
            wrist_rotate: request.wrist_rotate,
        };
        Ok(self.constraints.constrain(&raw))
    }

    fn gripper_adjustment(&self, distance: f64, height: f64, wrist: i32) -> Result<f64, KinematicsError> {
        gripper::gripper_adjustment(&self.parameters, distance, height, wrist, self.diagnostics.as_ref())
    }
}

impl Default for ArmKinematics {
    fn default() -> Self {
        Self::new(Parameters::new())
    }
}
