//! Supports extracting arm parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::arm_kinematics::Parameters;

impl Parameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Stock arm
    /// arm_geometry:
    ///   upper_arm: 10.0
    ///   forearm: 10.0
    ///   gripper_length: 1.1
    /// calibration:
    ///   shoulder: 20
    ///   elbow: -5
    /// default_wrist: 90
    /// ```
    /// Calibration (each of its values) and default wrist are optional and fall back
    /// to the stock values of [`Parameters::new`].
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [`Parameters::from_yaml_file`] but for YAML already in memory.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let stock = Parameters::new();
        let geometry = &doc["arm_geometry"];
        if geometry.is_badvalue() {
            return Err(ParameterError::MissingField("arm_geometry".to_string()));
        }

        let upper_arm = length(geometry, "upper_arm")?;
        let forearm = length(geometry, "forearm")?;
        let gripper_length = match optional_number(geometry, "arm_geometry", "gripper_length")? {
            Some(value) if value >= 0.0 => value,
            Some(value) => return Err(ParameterError::InvalidValue {
                field: "arm_geometry.gripper_length".to_string(),
                message: format!("must not be negative (got {})", value),
            }),
            None => stock.gripper_length,
        };

        let calibration = &doc["calibration"];
        let (shoulder_calibration, elbow_calibration) = if calibration.is_badvalue() {
            (stock.shoulder_calibration, stock.elbow_calibration)
        } else {
            (
                optional_number(calibration, "calibration", "shoulder")?
                    .unwrap_or(stock.shoulder_calibration),
                optional_number(calibration, "calibration", "elbow")?
                    .unwrap_or(stock.elbow_calibration),
            )
        };

        let default_wrist = match &doc["default_wrist"] {
            Yaml::BadValue => stock.default_wrist,
            Yaml::Integer(wrist) => i32::try_from(*wrist).map_err(|_| ParameterError::InvalidValue {
                field: "default_wrist".to_string(),
                message: format!("out of range (got {})", wrist),
            })?,
            other => return Err(ParameterError::InvalidValue {
                field: "default_wrist".to_string(),
                message: format!("must be an integer number of degrees (got {:?})", other),
            }),
        };

        Ok(Parameters {
            upper_arm,
            forearm,
            gripper_length,
            shoulder_calibration,
            elbow_calibration,
            default_wrist,
        })
    }
}

/// Link length under `arm_geometry`: required, finite and strictly positive.
fn length(section: &Yaml, key: &str) -> Result<f64, ParameterError> {
    let field = format!("arm_geometry.{}", key);
    let value = optional_number(section, "arm_geometry", key)?
        .ok_or_else(|| ParameterError::MissingField(field.clone()))?;
    if value <= 0.0 {
        return Err(ParameterError::InvalidValue {
            field,
            message: format!("must be positive (got {})", value),
        });
    }
    Ok(value)
}

/// Reads a number that may be written either as integer or as real. Missing key is `None`.
fn optional_number(section: &Yaml, section_name: &str, key: &str) -> Result<Option<f64>, ParameterError> {
    let value = match &section[key] {
        Yaml::BadValue => return Ok(None),
        Yaml::Integer(i) => *i as f64,
        real @ Yaml::Real(_) => real.as_f64().ok_or_else(|| ParameterError::ParseError(
            format!("{}.{} is not a valid number", section_name, key)))?,
        other => return Err(ParameterError::InvalidValue {
            field: format!("{}.{}", section_name, key),
            message: format!("must be a number (got {:?})", other),
        }),
    };
    if !value.is_finite() {
        return Err(ParameterError::InvalidValue {
            field: format!("{}.{}", section_name, key),
            message: format!("must be finite (got {})", value),
        });
    }
    Ok(Some(value))
}
