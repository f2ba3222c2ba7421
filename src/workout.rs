//! Workout records and the distance / speed / calorie formulas
//!
//! A [`Workout`] is the tagged union over the three activity kinds. Each
//! variant holds the fields its formulas need, parsed once from a reading
//! package and immutable afterwards.

use crate::error::TrackerError;
use crate::types::{ActivityKind, Metrics, MIN_IN_H, M_IN_KM};
use serde::{Deserialize, Serialize};

// Calorie formula constants, per kind
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A parsed workout reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Running {
        steps: f64,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        steps: f64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        strokes: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    },
}

impl Workout {
    /// Build a workout from a wire code and its ordered reading fields.
    ///
    /// Fails on an unknown code, a field count that does not match the
    /// kind's arity, or a non-positive duration.
    pub fn from_reading(code: &str, data: &[f64]) -> Result<Self, TrackerError> {
        let kind = ActivityKind::from_code(code)?;

        if data.len() != kind.arity() {
            return Err(TrackerError::WrongArity {
                code: kind.code(),
                expected: kind.arity(),
                got: data.len(),
            });
        }

        let duration_h = data[1];
        if duration_h <= 0.0 {
            return Err(TrackerError::NonPositiveDuration(duration_h));
        }

        let workout = match kind {
            ActivityKind::Running => Workout::Running {
                steps: data[0],
                duration_h,
                weight_kg: data[2],
            },
            ActivityKind::Walking => Workout::Walking {
                steps: data[0],
                duration_h,
                weight_kg: data[2],
                height_cm: data[3],
            },
            ActivityKind::Swimming => Workout::Swimming {
                strokes: data[0],
                duration_h,
                weight_kg: data[2],
                pool_length_m: data[3],
                pool_laps: data[4],
            },
        };

        Ok(workout)
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Running { .. } => ActivityKind::Running,
            Workout::Walking { .. } => ActivityKind::Walking,
            Workout::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    /// Step or stroke count
    fn action(&self) -> f64 {
        match *self {
            Workout::Running { steps, .. } | Workout::Walking { steps, .. } => steps,
            Workout::Swimming { strokes, .. } => strokes,
        }
    }

    pub fn duration_h(&self) -> f64 {
        match *self {
            Workout::Running { duration_h, .. }
            | Workout::Walking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => duration_h,
        }
    }

    fn weight_kg(&self) -> f64 {
        match *self {
            Workout::Running { weight_kg, .. }
            | Workout::Walking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => weight_kg,
        }
    }

    /// Distance covered (km), from the step/stroke count and stride length
    pub fn distance_km(&self) -> f64 {
        self.action() * self.kind().stride_length_m() / M_IN_KM
    }

    /// Mean speed (km/h).
    ///
    /// Swimming uses the pool geometry directly; the stroke-based distance
    /// only feeds the distance metric.
    pub fn mean_speed_kmh(&self) -> f64 {
        match *self {
            Workout::Swimming {
                duration_h,
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * pool_laps / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Energy spent (kcal), per the kind's calorie formula
    pub fn calories_kcal(&self) -> f64 {
        let speed_kmh = self.mean_speed_kmh();
        let duration_h = self.duration_h();
        let weight_kg = self.weight_kg();

        match *self {
            Workout::Running { .. } => {
                (RUN_SPEED_MULTIPLIER * speed_kmh + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Walking { height_cm, .. } => {
                let speed_ms = speed_kmh * KMH_IN_MS;
                let height_m = height_cm / CM_IN_M;
                (WLK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_ms.powi(2) / height_m * WLK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Swimming { .. } => {
                (speed_kmh + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight_kg * duration_h
            }
        }
    }

    /// Compute all derived metrics at once
    pub fn metrics(&self) -> Metrics {
        Metrics {
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
