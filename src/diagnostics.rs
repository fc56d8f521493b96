//! Observers for intermediate solver values.
//!
//! The solvers report every triangle side and angle they compute to a [`Diagnostics`]
//! sink passed in by the caller. Nothing in the solver reads these values back, so a
//! sink may drop them ([`NoDiagnostics`]) or log them ([`TracingDiagnostics`]).

use tracing::debug;
use crate::kinematic_traits::PoseRequest;

/// Intermediate values of the gripper offset computation, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GripperTrace {
    pub x: f64,
    pub s: f64,
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon: f64,
    pub tau: f64,
    pub adjustment: f64,
}

/// Intermediate values of the upper arm / forearm triangle, angles in degrees and
/// before calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmTrace {
    pub height: f64,
    pub x: f64,
    pub s: f64,
    pub small_shoulder: f64,
    pub big_shoulder: f64,
    pub shoulder: f64,
    pub elbow: f64,
    pub wrist: i32,
}

pub trait Diagnostics: Send + Sync {
    fn request(&self, _request: &PoseRequest, _wrist: i32) {}
    fn gripper(&self, _trace: &GripperTrace) {}
    fn arm(&self, _trace: &ArmTrace) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// Emits DEBUG level `tracing` events with the values as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn request(&self, request: &PoseRequest, wrist: i32) {
        debug!(
            rotation = request.rotation,
            height = request.height,
            distance = request.distance,
            wrist,
            "pose requested"
        );
    }

    fn gripper(&self, trace: &GripperTrace) {
        debug!(
            x = trace.x,
            s = trace.s,
            alpha = trace.alpha,
            gamma = trace.gamma,
            epsilon = trace.epsilon,
            tau = trace.tau,
            adjustment = trace.adjustment,
            "gripper offset"
        );
    }

    fn arm(&self, trace: &ArmTrace) {
        debug!(
            height = trace.height,
            x = trace.x,
            s = trace.s,
            small_shoulder = trace.small_shoulder,
            big_shoulder = trace.big_shoulder,
            shoulder = trace.shoulder,
            elbow = trace.elbow,
            wrist = trace.wrist,
            "arm triangle"
        );
    }
}
