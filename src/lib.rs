//! Trainmeter - workout metrics calculator
//!
//! Trainmeter turns raw fitness readings into derived workout metrics
//! through a deterministic pipeline: reading package → dispatch by activity
//! code → distance / mean speed / calorie computation → formatted summary.
//!
//! ## Activities
//!
//! - **Running** (`RUN`): `[steps, duration_h, weight_kg]`
//! - **SportsWalking** (`WLK`): `[steps, duration_h, weight_kg, height_cm]`
//! - **Swimming** (`SWM`): `[strokes, duration_h, weight_kg, pool_length_m, pool_laps]`

pub mod error;
pub mod pipeline;
pub mod schema;
pub mod summary;
pub mod types;
pub mod workout;

pub use error::TrackerError;
pub use pipeline::{process_package, process_packages, process_packages_lossy};
pub use schema::ReadingPackage;
pub use summary::Summary;
pub use types::{ActivityKind, Metrics};
pub use workout::Workout;

/// Trainmeter version embedded in CLI output
pub const TRAINMETER_VERSION: &str = env!("CARGO_PKG_VERSION");
