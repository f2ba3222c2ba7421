//! Summary rendering
//!
//! This module turns a workout into its display summary: the fixed
//! single-line template for terminals, and a JSON record for machine
//! consumers.

use crate::error::TrackerError;
use crate::types::{ActivityKind, Metrics};
use crate::workout::Workout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Formatted workout summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub kind: ActivityKind,
    /// Workout duration (hours)
    pub duration_h: f64,
    #[serde(flatten)]
    pub metrics: Metrics,
    /// When this summary was computed (UTC)
    pub computed_at: DateTime<Utc>,
}

impl Summary {
    /// Build a summary from a workout record
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            kind: workout.kind(),
            duration_h: workout.duration_h(),
            metrics: workout.metrics(),
            computed_at: Utc::now(),
        }
    }

    /// Render the fixed display line, three decimals throughout
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.kind.display_name(),
            self.duration_h,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories_kcal,
        )
    }

    /// Serialize to a single-line JSON record
    pub fn to_json(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_running_message() {
        let workout = Workout::from_reading("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let summary = Summary::from_workout(&workout);

        assert_eq!(
            summary.message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; \
             Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
             Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn test_swimming_message() {
        let workout = Workout::from_reading("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let summary = Summary::from_workout(&workout);

        assert_eq!(
            summary.message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_walking_message_uses_display_name() {
        let workout = Workout::from_reading("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let summary = Summary::from_workout(&workout);

        assert!(summary.message().starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_json_record_shape() {
        let workout = Workout::from_reading("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let summary = Summary::from_workout(&workout);

        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["kind"], "running");
        assert_eq!(value["duration_h"], 1.0);
        assert_eq!(value["distance_km"], 9.75);
        assert!(value["computed_at"].is_string());
    }
}
