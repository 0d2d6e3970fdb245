//! Engine configuration and the contractual constants.
//!
//! Every threshold and weight the response format depends on lives here,
//! so the output contract stays auditable in one place. These are fixed
//! constants, not per-request knobs.

use pyo3::prelude::*;

/// Difficulty score at or below this rates a semester "Light".
pub const DIFFICULTY_LIGHT_MAX: f64 = 5.0;
/// Difficulty score at or below this (and above the light bound) rates
/// a semester "Moderate"; anything higher is "Heavy".
pub const DIFFICULTY_MODERATE_MAX: f64 = 8.0;

/// Credits above which a semester gets a high-volume decision event.
pub const HIGH_VOLUME_CREDITS: u32 = 15;
/// Credits below which a semester gets a lighter-load decision event
/// while courses remain unscheduled.
pub const LIGHT_LOAD_CREDITS: u32 = 12;

/// Dependents needed before a course counts as a bottleneck.
pub const BOTTLENECK_MIN_DEPENDENTS: usize = 3;
/// Dependents needed before placing a course earns an "unlocked" event.
pub const UNLOCK_MIN_DEPENDENTS: usize = 2;

/// Confidence component weights. Contractual; they must sum to 1.
pub const WEIGHT_PREREQUISITE_SAFETY: f64 = 0.40;
pub const WEIGHT_WORKLOAD_BALANCE: f64 = 0.30;
pub const WEIGHT_FAILURE_RECOVERY: f64 = 0.15;
pub const WEIGHT_GRADUATION_SLACK: f64 = 0.15;

/// Weekly work hours above which burnout risk is forced to High.
pub const WORK_HOURS_HIGH: u32 = 30;
/// Weekly work hours above which burnout risk is raised to at least Medium.
pub const WORK_HOURS_MEDIUM: u32 = 20;
/// GPA below which a risk factor recommends a lighter load.
pub const GPA_RISK_FLOOR: f64 = 2.0;
/// GPA below which a softer workload-balance note is added.
pub const GPA_BALANCE_FLOOR: f64 = 2.5;

/// Request bounds enforced at the boundary.
pub const MAX_REMAINING_SEMESTERS: u32 = 20;
pub const MAX_SEMESTER_LOAD: u32 = 10;
pub const MAX_COURSE_CREDITS: u32 = 12;
pub const MAX_GPA: f64 = 4.0;

/// Engine configuration.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Verbosity level: 0=silent, 1=decisions, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { verbosity: 0 }
    }
}

#[pymethods]
impl PlannerConfig {
    #[new]
    #[pyo3(signature = (verbosity=0))]
    fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    fn __repr__(&self) -> String {
        format!("PlannerConfig(verbosity={})", self.verbosity)
    }
}
