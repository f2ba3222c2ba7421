//! Pipeline orchestration
//!
//! This module provides the public API for trainmeter: reading package in,
//! summary out. Each conversion is a pure, stateless composition of
//! dispatch, metric computation and formatting.

use crate::error::TrackerError;
use crate::schema::ReadingPackage;
use crate::summary::Summary;
use crate::workout::Workout;

/// Process a single reading package into a summary.
///
/// # Example
/// ```
/// use trainmeter::{process_package, ReadingPackage};
///
/// let package = ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
/// let summary = process_package(&package)?;
/// println!("{}", summary.message());
/// # Ok::<(), trainmeter::TrackerError>(())
/// ```
pub fn process_package(package: &ReadingPackage) -> Result<Summary, TrackerError> {
    let workout = Workout::from_reading(&package.workout_type, &package.data)?;
    Ok(Summary::from_workout(&workout))
}

/// Process a batch of packages, aborting on the first error.
pub fn process_packages(packages: &[ReadingPackage]) -> Result<Vec<Summary>, TrackerError> {
    packages.iter().map(process_package).collect()
}

/// Process a batch, skipping failing packages instead of aborting.
///
/// Returns the summaries for the packages that processed cleanly, plus one
/// `(index, error)` pair per package that did not.
pub fn process_packages_lossy(
    packages: &[ReadingPackage],
) -> (Vec<Summary>, Vec<(usize, TrackerError)>) {
    let mut summaries = Vec::new();
    let mut failures = Vec::new();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok(summary) => summaries.push(summary),
            Err(error) => failures.push((index, error)),
        }
    }

    (summaries, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_packages() -> Vec<ReadingPackage> {
        vec![
            ReadingPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            ReadingPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    #[test]
    fn test_process_batch_messages() {
        let summaries = process_packages(&sample_packages()).unwrap();
        let messages: Vec<String> = summaries.iter().map(|s| s.message()).collect();

        assert_eq!(
            messages,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
                 Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
                 Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; \
                 Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
                 Потрачено ккал: 797.805.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
                 Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; \
                 Потрачено ккал: 349.252.",
            ]
        );
    }

    #[test]
    fn test_process_batch_aborts_on_unknown_code() {
        let mut packages = sample_packages();
        packages.insert(1, ReadingPackage::new("XYZ", vec![1.0, 1.0, 1.0]));

        let err = process_packages(&packages).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownActivityCode(ref c) if c == "XYZ"));
    }

    #[test]
    fn test_process_batch_lossy_skips_failures() {
        let mut packages = sample_packages();
        packages.insert(1, ReadingPackage::new("XYZ", vec![1.0, 1.0, 1.0]));
        packages.push(ReadingPackage::new("RUN", vec![15000.0, 0.0, 75.0]));

        let (summaries, failures) = process_packages_lossy(&packages);

        assert_eq!(summaries.len(), 3);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0, 1);
        assert!(matches!(failures[0].1, TrackerError::UnknownActivityCode(_)));
        assert_eq!(failures[1].0, 4);
        assert!(matches!(failures[1].1, TrackerError::NonPositiveDuration(_)));
    }

    #[test]
    fn test_empty_batch() {
        assert!(process_packages(&[]).unwrap().is_empty());
    }
}
