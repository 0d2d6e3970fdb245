//! The plan generation pipeline.
//!
//! One call runs the whole pass: validate, build the prerequisite graph,
//! resolve a topological order, pack semesters, rate difficulty, assess
//! risk, score confidence, and assemble the response. All state is local
//! to the call, so concurrent requests cannot interfere.

use rustc_hash::FxHashSet;

use crate::config::PlannerConfig;
use crate::confidence::{confidence_score, ConfidenceInputs};
use crate::graph::CourseGraph;
use crate::insight::{career_alignment, key_insight, INVALID_INSIGHT};
use crate::log_decisions;
use crate::models::{
    normalize_code, Course, DecisionEvent, PlanRequest, PlanResponse, RiskAnalysis,
};
use crate::risk::{assess_risks, semester_difficulties, Difficulty, GraduationRisk};
use crate::scheduler::schedule_semesters;
use crate::simulation::failure_impact;
use crate::validate::validate_request;

/// Generate a degree plan for one request.
///
/// Never panics and never errors on well-typed input: an empty catalog
/// comes back as an Invalid response, malformed references come back as
/// warnings, and prerequisite cycles degrade to unscheduled courses.
pub fn generate_plan(request: &PlanRequest, config: &PlannerConfig) -> PlanResponse {
    let catalog: Vec<Course> = request.courses.iter().map(Course::normalized).collect();
    let completed_list = normalize_codes(&request.completed_courses);
    let priority_list = normalize_codes(&request.priority_courses);

    let validation = validate_request(
        &catalog,
        &completed_list,
        &priority_list,
        request.remaining_semesters,
        request.max_courses_per_semester,
    );
    if !validation.is_valid {
        return invalid_response(validation.errors);
    }
    let mut warnings = validation.warnings;

    let graph = CourseGraph::build(&catalog);
    let mut completed: FxHashSet<String> = completed_list.iter().cloned().collect();
    let mut timeline: Vec<DecisionEvent> = Vec::new();

    // What-if mode: pull the failed courses back out of the completed set
    // so the rest of the pass re-plans them, and report their blast radius.
    let mut impact = None;
    if let Some(simulation) = &request.failure_simulation {
        if simulation.enabled {
            let failed = normalize_codes(&simulation.failed_courses);
            for code in &failed {
                completed.remove(code);
            }
            impact = Some(failure_impact(&graph, &failed));
            warnings.push(format!(
                "Failure simulation active: {} removed from completed courses.",
                failed.join(", ")
            ));
            timeline.push(DecisionEvent {
                semester: "Pre-Planning".to_string(),
                decision: format!("Simulating failure of {}", failed.join(", ")),
                reason: "User requested what-if analysis".to_string(),
                risk_mitigated: "Understanding downstream impact before it happens".to_string(),
                trade_off: String::new(),
            });
        }
    }

    let topo_order = graph.topological_order(&completed);
    let outcome = schedule_semesters(
        &graph,
        &topo_order,
        &completed,
        request.remaining_semesters,
        request.max_courses_per_semester,
        &priority_list.iter().cloned().collect(),
        config,
    );
    timeline.extend(outcome.events);

    // Courses trapped in a prerequisite cycle never entered the
    // topological order; they are just as unschedulable as the
    // budget-starved ones and are accounted for the same way.
    let mut unscheduled = outcome.unscheduled;
    let ordered: FxHashSet<&str> = topo_order.iter().map(String::as_str).collect();
    for code in graph.codes() {
        if !completed.contains(code) && !ordered.contains(code.as_str()) {
            unscheduled.push(code.clone());
        }
    }
    log_decisions!(
        config.verbosity,
        "plan: {} semesters, {} unscheduled",
        outcome.semesters.len(),
        unscheduled.len()
    );

    let difficulties = semester_difficulties(&outcome.semesters, &graph);
    let bottlenecks = graph.bottlenecks();
    let assessment = assess_risks(
        &difficulties,
        &unscheduled,
        request.weekly_work_hours,
        request.current_gpa,
        &bottlenecks,
    );

    let scheduled_count: usize = outcome.semesters.iter().map(|(_, codes)| codes.len()).sum();
    let (score, breakdown) = confidence_score(&ConfidenceInputs {
        scheduled_count,
        remaining_count: graph.len().saturating_sub(completed.len()),
        heavy_semesters: difficulties
            .iter()
            .filter(|(_, d)| *d == Difficulty::Heavy)
            .count(),
        light_semesters: difficulties
            .iter()
            .filter(|(_, d)| *d == Difficulty::Light)
            .count(),
        total_semesters: outcome.semesters.len(),
        unscheduled_count: unscheduled.len(),
        on_track: assessment.graduation_risk == GraduationRisk::OnTrack,
    });

    let insight = key_insight(score, &bottlenecks, assessment.graduation_risk, &unscheduled);
    let career_alignment_notes = request
        .career_goal
        .as_deref()
        .map(|goal| career_alignment(goal, &graph, &outcome.semesters))
        .unwrap_or_default();

    if !unscheduled.is_empty() {
        warnings.push(format!(
            "Could not schedule {} courses within {} semesters: {}",
            unscheduled.len(),
            request.remaining_semesters,
            unscheduled.join(", ")
        ));
    }

    PlanResponse {
        degree_plan: outcome.semesters,
        semester_difficulty: difficulties
            .into_iter()
            .map(|(semester, d)| (semester, d.as_str().to_string()))
            .collect(),
        risk_analysis: RiskAnalysis {
            burnout_risk: assessment.burnout_risk.as_str().to_string(),
            graduation_risk: assessment.graduation_risk.as_str().to_string(),
            risk_factors: assessment.risk_factors,
        },
        failure_impact: impact,
        decision_timeline: timeline,
        confidence_score: score,
        confidence_breakdown: Some(breakdown),
        key_insight: insight,
        career_alignment_notes,
        warnings,
        unscheduled_courses: unscheduled,
        validation_status: "Valid".to_string(),
    }
}

/// Normalize a code list, dropping duplicates but keeping first-seen order.
fn normalize_codes(codes: &[String]) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    codes
        .iter()
        .map(|code| normalize_code(code))
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

fn invalid_response(errors: Vec<String>) -> PlanResponse {
    PlanResponse {
        degree_plan: Vec::new(),
        semester_difficulty: Vec::new(),
        risk_analysis: RiskAnalysis {
            burnout_risk: "Low".to_string(),
            graduation_risk: "Delayed".to_string(),
            risk_factors: errors.clone(),
        },
        failure_impact: None,
        decision_timeline: Vec::new(),
        confidence_score: 0.0,
        confidence_breakdown: None,
        key_insight: INVALID_INSIGHT.to_string(),
        career_alignment_notes: String::new(),
        warnings: errors,
        unscheduled_courses: Vec::new(),
        validation_status: "Invalid".to_string(),
    }
}
