//! Reading package input schema
//!
//! A reading package is the raw input unit: an activity code plus the
//! ordered numeric fields the sensor produced for that workout. Packages
//! arrive either as NDJSON (one object per line) or as a JSON array.

use crate::error::TrackerError;
use crate::types::ActivityKind;
use serde::{Deserialize, Serialize};

/// Raw input unit: activity code + ordered sensor fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingPackage {
    /// Activity wire code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Ordered numeric fields, meaning depends on the activity kind
    pub data: Vec<f64>,
}

impl ReadingPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Check the package without computing anything: known code, matching
    /// arity, positive duration.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let kind = ActivityKind::from_code(&self.workout_type)?;

        if self.data.len() != kind.arity() {
            return Err(TrackerError::WrongArity {
                code: kind.code(),
                expected: kind.arity(),
                got: self.data.len(),
            });
        }

        let duration_h = self.data[1];
        if duration_h <= 0.0 {
            return Err(TrackerError::NonPositiveDuration(duration_h));
        }

        Ok(())
    }
}

/// Parse NDJSON input: one package per non-empty line
pub fn parse_ndjson(input: &str) -> Result<Vec<ReadingPackage>, TrackerError> {
    let mut packages = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        packages.push(serde_json::from_str(trimmed)?);
    }

    Ok(packages)
}

/// Parse a JSON array of packages
pub fn parse_array(input: &str) -> Result<Vec<ReadingPackage>, TrackerError> {
    Ok(serde_json::from_str(input)?)
}

/// Validation failure for one package in a batch
#[derive(Debug)]
pub struct PackageValidationError {
    /// Position of the package in the input
    pub index: usize,
    pub workout_type: String,
    pub error: TrackerError,
}

/// Validate a batch, collecting one entry per failing package
pub fn validate_packages(packages: &[ReadingPackage]) -> Vec<PackageValidationError> {
    packages
        .iter()
        .enumerate()
        .filter_map(|(index, package)| {
            package.validate().err().map(|error| PackageValidationError {
                index,
                workout_type: package.workout_type.clone(),
                error,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ndjson() {
        let input = r#"{"workout_type": "RUN", "data": [15000, 1, 75]}

{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
"#;
        let packages = parse_ndjson(input).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "RUN");
        assert_eq!(packages[1].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn test_parse_array() {
        let input = r#"[
            {"workout_type": "WLK", "data": [9000, 1, 75, 180]},
            {"workout_type": "RUN", "data": [15000, 1, 75]}
        ]"#;
        let packages = parse_array(input).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "WLK");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_ndjson("not json"),
            Err(TrackerError::Json(_))
        ));
        assert!(matches!(
            parse_array(r#"{"workout_type": "RUN"}"#),
            Err(TrackerError::Json(_))
        ));
    }

    #[test]
    fn test_validate_ok() {
        let package = ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        assert!(package.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_code() {
        let package = ReadingPackage::new("XYZ", vec![1.0, 1.0, 1.0]);
        assert!(matches!(
            package.validate(),
            Err(TrackerError::UnknownActivityCode(_))
        ));
    }

    #[test]
    fn test_validate_wrong_arity() {
        let package = ReadingPackage::new("WLK", vec![9000.0, 1.0, 75.0]);
        assert!(matches!(
            package.validate(),
            Err(TrackerError::WrongArity { expected: 4, got: 3, .. })
        ));
    }

    #[test]
    fn test_validate_zero_duration() {
        let package = ReadingPackage::new("RUN", vec![15000.0, 0.0, 75.0]);
        assert!(matches!(
            package.validate(),
            Err(TrackerError::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn test_validate_packages_reports_indices() {
        let packages = vec![
            ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            ReadingPackage::new("XYZ", vec![1.0]),
            ReadingPackage::new("SWM", vec![720.0, -1.0, 80.0, 25.0, 40.0]),
        ];

        let errors = validate_packages(&packages);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].index, 1);
        assert_eq!(errors[0].workout_type, "XYZ");
        assert_eq!(errors[1].index, 2);
    }
}
