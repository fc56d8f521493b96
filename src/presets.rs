//! Named poses used as initial and fallback targets

use std::fmt;
use std::str::FromStr;

use crate::constraints::Constraints;
use crate::kinematic_traits::Coordinates;
use crate::kinematics_error::KinematicsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Default,
    Low,
    High,
    Park,
    Ninety,
    Min,
    Max,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::Low,
        Preset::High,
        Preset::Park,
        Preset::Ninety,
        Preset::Min,
        Preset::Max,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Low => "low",
            Preset::High => "high",
            Preset::Park => "park",
            Preset::Ninety => "ninety",
            Preset::Min => "min",
            Preset::Max => "max",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL.into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| KinematicsError::UnknownPreset(s.to_string()))
    }
}

/// Read-only table of the preset poses. Build it once and share it by reference.
#[derive(Debug, Clone)]
pub struct PresetTable {
    entries: [Coordinates; 7],
}

impl PresetTable {
    /// Presets of the stock arm; `min` and `max` follow the stock joint limits.
    pub fn standard() -> Self {
        Self::with_limits(&Constraints::new())
    }

    /// Presets where `min` and `max` are the bounds of the given limits.
    pub fn with_limits(limits: &Constraints) -> Self {
        PresetTable {
            entries: [
                Coordinates { elbow: 50, shoulder: 140, wrist: 90, base: 70, gripper: 40, wrist_rotate: 86 },
                Coordinates { elbow: 60, shoulder: 110, wrist: 120, base: 50, gripper: 30, wrist_rotate: 86 },
                Coordinates { elbow: 40, shoulder: 130, wrist: 30, base: 90, gripper: 90, wrist_rotate: 0 },
                Coordinates { elbow: 19, shoulder: 170, wrist: 80, base: 75, gripper: 40, wrist_rotate: 86 },
                Coordinates { elbow: 85, shoulder: 110, wrist: 90, base: 70, gripper: 40, wrist_rotate: 86 },
                limits.lower(),
                limits.upper(),
            ],
        }
    }

    pub fn preset(&self, preset: Preset) -> Coordinates {
        self.entries[preset as usize]
    }

    /// Looks the preset up by its name.
    pub fn get(&self, name: &str) -> Result<Coordinates, KinematicsError> {
        name.parse::<Preset>().map(|preset| self.preset(preset))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Preset, Coordinates)> + '_ {
        Preset::ALL.into_iter().map(move |preset| (preset, self.preset(preset)))
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::standard()
    }
}
