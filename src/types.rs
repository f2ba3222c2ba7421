//! Core types for the trainmeter pipeline
//!
//! This module defines the activity kinds, their per-kind formula constants,
//! and the derived metrics that flow out of the calculator.

use crate::error::TrackerError;
use serde::{Deserialize, Serialize};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Activity kind identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

/// Per-kind descriptor: wire code, reading arity and stride length.
///
/// Constants live here rather than on the workout records so a record can
/// never carry contaminated cross-kind values.
struct KindDescriptor {
    code: &'static str,
    display_name: &'static str,
    arity: usize,
    stride_length_m: f64,
}

const RUNNING: KindDescriptor = KindDescriptor {
    code: "RUN",
    display_name: "Running",
    arity: 3,
    stride_length_m: 0.65,
};

const WALKING: KindDescriptor = KindDescriptor {
    code: "WLK",
    display_name: "SportsWalking",
    arity: 4,
    stride_length_m: 0.65,
};

const SWIMMING: KindDescriptor = KindDescriptor {
    code: "SWM",
    display_name: "Swimming",
    arity: 5,
    // one stroke moves the swimmer roughly 1.38 m
    stride_length_m: 1.38,
};

impl ActivityKind {
    /// Resolve a wire code (`RUN`, `WLK`, `SWM`) to an activity kind
    pub fn from_code(code: &str) -> Result<Self, TrackerError> {
        match code {
            "RUN" => Ok(ActivityKind::Running),
            "WLK" => Ok(ActivityKind::Walking),
            "SWM" => Ok(ActivityKind::Swimming),
            other => Err(TrackerError::UnknownActivityCode(other.to_string())),
        }
    }

    fn descriptor(&self) -> &'static KindDescriptor {
        match self {
            ActivityKind::Running => &RUNNING,
            ActivityKind::Walking => &WALKING,
            ActivityKind::Swimming => &SWIMMING,
        }
    }

    pub fn code(&self) -> &'static str {
        self.descriptor().code
    }

    /// Name used in the rendered summary line
    pub fn display_name(&self) -> &'static str {
        self.descriptor().display_name
    }

    /// Expected number of reading fields for this kind
    pub fn arity(&self) -> usize {
        self.descriptor().arity
    }

    /// Distance covered by one step (Running/Walking) or stroke (Swimming),
    /// in meters
    pub fn stride_length_m(&self) -> f64 {
        self.descriptor().stride_length_m
    }
}

/// Derived metrics computed once from a workout record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Total distance (km)
    pub distance_km: f64,
    /// Mean speed over the whole workout (km/h)
    pub mean_speed_kmh: f64,
    /// Energy spent (kcal)
    pub calories_kcal: f64,
}
