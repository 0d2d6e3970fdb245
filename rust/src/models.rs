//! Core data types for the degree planning engine.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use thiserror::Error;

use crate::config::{MAX_COURSE_CREDITS, MAX_GPA, MAX_REMAINING_SEMESTERS, MAX_SEMESTER_LOAD};

/// Normalize a course code to its canonical form (trimmed, ASCII uppercase).
///
/// All code comparisons inside the engine run on normalized codes.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Errors raised at the request boundary for out-of-range fields.
///
/// These mirror the bounds the host application declares on its request
/// schema; well-typed data inside these bounds never raises (degraded
/// conditions travel as warnings in the response instead).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("remaining_semesters must be between 1 and {MAX_REMAINING_SEMESTERS}, got {0}")]
    SemestersOutOfRange(u32),
    #[error("max_courses_per_semester must be between 1 and {MAX_SEMESTER_LOAD}, got {0}")]
    SemesterLoadOutOfRange(u32),
    #[error("course {code} has {credits} credits, expected at most {MAX_COURSE_CREDITS}")]
    CreditsOutOfRange { code: String, credits: u32 },
    #[error("current_gpa must be between 0.0 and {MAX_GPA}, got {0}")]
    GpaOutOfRange(f64),
}

/// A course in the caller-supplied catalog.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Course {
    /// Unique course code, e.g. "CS101".
    #[pyo3(get, set)]
    pub code: String,
    #[pyo3(get, set)]
    pub name: String,
    /// Credit hours.
    #[pyo3(get, set)]
    pub credits: u32,
    /// Codes of prerequisite courses. May reference codes outside the
    /// catalog; those are treated as already satisfied.
    #[pyo3(get, set)]
    pub prerequisites: Vec<String>,
    /// Optional difficulty hint, carried through but not interpreted.
    #[pyo3(get, set)]
    pub difficulty: Option<String>,
}

#[pymethods]
impl Course {
    #[new]
    #[pyo3(signature = (code, name, credits, prerequisites=Vec::new(), difficulty=None))]
    fn new(
        code: String,
        name: String,
        credits: u32,
        prerequisites: Vec<String>,
        difficulty: Option<String>,
    ) -> Self {
        Self {
            code,
            name,
            credits,
            prerequisites,
            difficulty,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Course(code={:?}, credits={}, prerequisites={:?})",
            self.code, self.credits, self.prerequisites
        )
    }
}

impl Course {
    /// Copy of this course with its code and prerequisite codes normalized.
    pub fn normalized(&self) -> Self {
        Self {
            code: normalize_code(&self.code),
            name: self.name.clone(),
            credits: self.credits,
            prerequisites: self.prerequisites.iter().map(|p| normalize_code(p)).collect(),
            difficulty: self.difficulty.clone(),
        }
    }
}

/// What-if configuration: treat these completed courses as failed.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct FailureSimulation {
    #[pyo3(get, set)]
    pub enabled: bool,
    #[pyo3(get, set)]
    pub failed_courses: Vec<String>,
}

#[pymethods]
impl FailureSimulation {
    #[new]
    #[pyo3(signature = (enabled=false, failed_courses=Vec::new()))]
    fn new(enabled: bool, failed_courses: Vec<String>) -> Self {
        Self {
            enabled,
            failed_courses,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "FailureSimulation(enabled={}, failed_courses={:?})",
            self.enabled, self.failed_courses
        )
    }
}

/// A full planning request. All data comes from the caller; the engine
/// never invents courses or prerequisites that are not in here.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlanRequest {
    #[pyo3(get, set)]
    pub courses: Vec<Course>,
    #[pyo3(get, set)]
    pub completed_courses: Vec<String>,
    #[pyo3(get, set)]
    pub remaining_semesters: u32,
    #[pyo3(get, set)]
    pub max_courses_per_semester: u32,
    #[pyo3(get, set)]
    pub priority_courses: Vec<String>,
    /// Passed through untouched; prose generation happens outside the core.
    #[pyo3(get, set)]
    pub career_goal: Option<String>,
    #[pyo3(get, set)]
    pub current_gpa: Option<f64>,
    #[pyo3(get, set)]
    pub weekly_work_hours: Option<u32>,
    #[pyo3(get, set)]
    pub failure_simulation: Option<FailureSimulation>,
    /// Affects only prose tone generated outside this core.
    #[pyo3(get, set)]
    pub advisor_mode: bool,
}

#[pymethods]
impl PlanRequest {
    #[new]
    #[pyo3(signature = (
        courses,
        remaining_semesters,
        max_courses_per_semester,
        completed_courses=Vec::new(),
        priority_courses=Vec::new(),
        career_goal=None,
        current_gpa=None,
        weekly_work_hours=None,
        failure_simulation=None,
        advisor_mode=false
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        courses: Vec<Course>,
        remaining_semesters: u32,
        max_courses_per_semester: u32,
        completed_courses: Vec<String>,
        priority_courses: Vec<String>,
        career_goal: Option<String>,
        current_gpa: Option<f64>,
        weekly_work_hours: Option<u32>,
        failure_simulation: Option<FailureSimulation>,
        advisor_mode: bool,
    ) -> Self {
        Self {
            courses,
            completed_courses,
            remaining_semesters,
            max_courses_per_semester,
            priority_courses,
            career_goal,
            current_gpa,
            weekly_work_hours,
            failure_simulation,
            advisor_mode,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PlanRequest(courses={}, completed={}, remaining_semesters={}, max_courses_per_semester={})",
            self.courses.len(),
            self.completed_courses.len(),
            self.remaining_semesters,
            self.max_courses_per_semester
        )
    }
}

impl PlanRequest {
    /// Enforce the bounded request fields.
    pub fn check_bounds(&self) -> Result<(), RequestError> {
        if self.remaining_semesters == 0 || self.remaining_semesters > MAX_REMAINING_SEMESTERS {
            return Err(RequestError::SemestersOutOfRange(self.remaining_semesters));
        }
        if self.max_courses_per_semester == 0 || self.max_courses_per_semester > MAX_SEMESTER_LOAD {
            return Err(RequestError::SemesterLoadOutOfRange(
                self.max_courses_per_semester,
            ));
        }
        for course in &self.courses {
            if course.credits > MAX_COURSE_CREDITS {
                return Err(RequestError::CreditsOutOfRange {
                    code: course.code.clone(),
                    credits: course.credits,
                });
            }
        }
        if let Some(gpa) = self.current_gpa {
            if !(0.0..=MAX_GPA).contains(&gpa) {
                return Err(RequestError::GpaOutOfRange(gpa));
            }
        }
        Ok(())
    }
}

/// One scheduling decision, recorded for transparency.
///
/// Append-only; produced once per run and never edited.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionEvent {
    /// Semester identifier, e.g. "Semester 2" or "Pre-Planning".
    #[pyo3(get)]
    pub semester: String,
    #[pyo3(get)]
    pub decision: String,
    #[pyo3(get)]
    pub reason: String,
    #[pyo3(get)]
    pub risk_mitigated: String,
    #[pyo3(get)]
    pub trade_off: String,
}

#[pymethods]
impl DecisionEvent {
    fn __repr__(&self) -> String {
        format!(
            "DecisionEvent(semester={:?}, decision={:?})",
            self.semester, self.decision
        )
    }
}

/// Burnout and graduation risk assessment.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct RiskAnalysis {
    /// "Low", "Medium" or "High".
    #[pyo3(get)]
    pub burnout_risk: String,
    /// "On Track" or "Delayed".
    #[pyo3(get)]
    pub graduation_risk: String,
    #[pyo3(get)]
    pub risk_factors: Vec<String>,
}

#[pymethods]
impl RiskAnalysis {
    fn __repr__(&self) -> String {
        format!(
            "RiskAnalysis(burnout_risk={:?}, graduation_risk={:?}, factors={})",
            self.burnout_risk,
            self.graduation_risk,
            self.risk_factors.len()
        )
    }
}

/// Component scores feeding the overall confidence score.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceBreakdown {
    #[pyo3(get)]
    pub prerequisite_safety: f64,
    #[pyo3(get)]
    pub workload_balance: f64,
    #[pyo3(get)]
    pub failure_recovery_margin: f64,
    #[pyo3(get)]
    pub graduation_slack: f64,
}

#[pymethods]
impl ConfidenceBreakdown {
    fn __repr__(&self) -> String {
        format!(
            "ConfidenceBreakdown(prerequisite_safety={}, workload_balance={}, failure_recovery_margin={}, graduation_slack={})",
            self.prerequisite_safety,
            self.workload_balance,
            self.failure_recovery_margin,
            self.graduation_slack
        )
    }
}

/// Downstream impact of simulated course failures.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct FailureImpact {
    #[pyo3(get)]
    pub failed_courses: Vec<String>,
    /// Transitive dependents of the failed courses, in discovery order.
    #[pyo3(get)]
    pub directly_affected: Vec<String>,
    #[pyo3(get)]
    pub affected_count: usize,
    /// "1 semester minimum" when anything is affected, otherwise "None".
    #[pyo3(get)]
    pub delay_estimate: String,
}

#[pymethods]
impl FailureImpact {
    fn __repr__(&self) -> String {
        format!(
            "FailureImpact(failed={:?}, affected_count={})",
            self.failed_courses, self.affected_count
        )
    }
}

/// Full planning response.
///
/// Semester maps are stored as ordered vectors so repeated runs on
/// identical input produce identical output, including iteration order;
/// the Python getters rebuild insertion-ordered dicts from them.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct PlanResponse {
    /// Ordered (semester label, course codes) pairs.
    pub degree_plan: Vec<(String, Vec<String>)>,
    /// Ordered (semester label, "Light"|"Moderate"|"Heavy") pairs.
    pub semester_difficulty: Vec<(String, String)>,
    #[pyo3(get)]
    pub risk_analysis: RiskAnalysis,
    #[pyo3(get)]
    pub failure_impact: Option<FailureImpact>,
    #[pyo3(get)]
    pub decision_timeline: Vec<DecisionEvent>,
    #[pyo3(get)]
    pub confidence_score: f64,
    #[pyo3(get)]
    pub confidence_breakdown: Option<ConfidenceBreakdown>,
    #[pyo3(get)]
    pub key_insight: String,
    #[pyo3(get)]
    pub career_alignment_notes: String,
    #[pyo3(get)]
    pub warnings: Vec<String>,
    #[pyo3(get)]
    pub unscheduled_courses: Vec<String>,
    /// "Valid" or "Invalid".
    #[pyo3(get)]
    pub validation_status: String,
}

#[pymethods]
impl PlanResponse {
    /// Semester-by-semester course schedule as an ordered dict.
    #[getter]
    fn degree_plan<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (semester, codes) in &self.degree_plan {
            dict.set_item(semester, codes.clone())?;
        }
        Ok(dict)
    }

    /// Difficulty rating per semester as an ordered dict.
    #[getter]
    fn semester_difficulty<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (semester, rating) in &self.semester_difficulty {
            dict.set_item(semester, rating)?;
        }
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "PlanResponse(semesters={}, unscheduled={}, confidence_score={}, validation_status={:?})",
            self.degree_plan.len(),
            self.unscheduled_courses.len(),
            self.confidence_score,
            self.validation_status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(semesters: u32, per_semester: u32) -> PlanRequest {
        PlanRequest {
            courses: vec![Course {
                code: "CS101".to_string(),
                name: "Intro".to_string(),
                credits: 4,
                prerequisites: vec![],
                difficulty: None,
            }],
            completed_courses: vec![],
            remaining_semesters: semesters,
            max_courses_per_semester: per_semester,
            priority_courses: vec![],
            career_goal: None,
            current_gpa: None,
            weekly_work_hours: None,
            failure_simulation: None,
            advisor_mode: false,
        }
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  cs101 "), "CS101");
        assert_eq!(normalize_code("MA102"), "MA102");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_bounds_accept_valid_request() {
        assert!(make_request(8, 5).check_bounds().is_ok());
    }

    #[test]
    fn test_bounds_reject_zero_semesters() {
        let request = make_request(0, 5);
        assert_eq!(
            request.check_bounds(),
            Err(RequestError::SemestersOutOfRange(0))
        );
    }

    #[test]
    fn test_bounds_reject_oversized_load() {
        let request = make_request(8, 11);
        assert_eq!(
            request.check_bounds(),
            Err(RequestError::SemesterLoadOutOfRange(11))
        );
    }

    #[test]
    fn test_bounds_reject_bad_gpa() {
        let mut request = make_request(8, 5);
        request.current_gpa = Some(4.5);
        assert_eq!(request.check_bounds(), Err(RequestError::GpaOutOfRange(4.5)));
    }

    #[test]
    fn test_bounds_reject_oversized_credits() {
        let mut request = make_request(8, 5);
        request.courses[0].credits = 13;
        assert!(matches!(
            request.check_bounds(),
            Err(RequestError::CreditsOutOfRange { .. })
        ));
    }
}
