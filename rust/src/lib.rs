//! Rust implementation of the degree planner's deterministic core.
//!
//! This module provides the scheduling engine behind the planning API:
//! prerequisite graph resolution, capacity-bounded semester assignment,
//! difficulty and burnout risk assessment, confidence scoring and what-if
//! failure simulation. Everything here is pure computation over
//! caller-supplied data; prose generation, persistence and auth live in
//! the host application.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod config;
pub mod confidence;
pub mod graph;
pub mod insight;
pub mod logging;
pub mod models;
pub mod planner;
pub mod ranking;
pub mod risk;
pub mod scheduler;
pub mod simulation;
pub mod validate;

pub use config::PlannerConfig;
pub use graph::CourseGraph;
pub use models::{
    ConfidenceBreakdown, Course, DecisionEvent, FailureImpact, FailureSimulation, PlanRequest,
    PlanResponse, RequestError, RiskAnalysis,
};
pub use planner::generate_plan;

/// Generate a degree plan from a planning request.
///
/// Runs the full deterministic pass: validation, prerequisite graph,
/// topological ordering, semester scheduling, difficulty rating, risk
/// assessment, confidence scoring and (when enabled) failure simulation.
///
/// # Arguments
/// * `request` - The planning request with catalog and constraints
/// * `config` - Optional engine configuration (verbosity)
///
/// # Returns
/// * PlanResponse; degraded input comes back with warnings or an
///   Invalid validation status rather than an exception
///
/// # Raises
/// * ValueError if a bounded request field is out of range
#[pyfunction]
#[pyo3(signature = (request, config=None))]
fn run_planner(request: PlanRequest, config: Option<PlannerConfig>) -> PyResult<PlanResponse> {
    if let Err(e) = request.check_bounds() {
        return Err(pyo3::exceptions::PyValueError::new_err(e.to_string()));
    }
    Ok(planner::generate_plan(
        &request,
        &config.unwrap_or_default(),
    ))
}

/// The degreeplanner.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Course>()?;
    m.add_class::<FailureSimulation>()?;
    m.add_class::<PlanRequest>()?;
    m.add_class::<PlanResponse>()?;
    m.add_class::<DecisionEvent>()?;
    m.add_class::<RiskAnalysis>()?;
    m.add_class::<ConfidenceBreakdown>()?;
    m.add_class::<FailureImpact>()?;

    // Config types
    m.add_class::<PlannerConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(run_planner, m)?)?;

    Ok(())
}
