//! Plan confidence scoring.
//!
//! Four component scores, each clamped to [0,100], combined with the
//! contractual 0.40/0.30/0.15/0.15 weights:
//! - prerequisite safety: share of remaining courses that got scheduled
//! - workload balance: penalty per heavy semester, bonus per light one
//! - failure recovery margin: slack for retakes
//! - graduation slack: buffer to an on-time finish

use crate::config::{
    WEIGHT_FAILURE_RECOVERY, WEIGHT_GRADUATION_SLACK, WEIGHT_PREREQUISITE_SAFETY,
    WEIGHT_WORKLOAD_BALANCE,
};
use crate::models::ConfidenceBreakdown;

/// Inputs distilled from a finished scheduling pass.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceInputs {
    /// Courses placed into semesters.
    pub scheduled_count: usize,
    /// Catalog courses minus completed ones.
    pub remaining_count: usize,
    pub heavy_semesters: usize,
    pub light_semesters: usize,
    pub total_semesters: usize,
    pub unscheduled_count: usize,
    pub on_track: bool,
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

fn round1(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Compute the weighted confidence score and its breakdown.
///
/// Sub-scores are rounded to one decimal in the breakdown; the weighted
/// total is computed from the unrounded values and then rounded itself.
pub fn confidence_score(inputs: &ConfidenceInputs) -> (f64, ConfidenceBreakdown) {
    let safety = if inputs.remaining_count > 0 {
        clamp_score(inputs.scheduled_count as f64 / inputs.remaining_count as f64 * 100.0)
    } else {
        100.0
    };

    let balance = if inputs.total_semesters > 0 {
        clamp_score(
            100.0 - inputs.heavy_semesters as f64 * 20.0 + inputs.light_semesters as f64 * 5.0,
        )
    } else {
        50.0
    };

    let recovery = if inputs.unscheduled_count > 0 {
        (100.0 - inputs.unscheduled_count as f64 * 15.0).max(0.0)
    } else {
        let avg_per_semester =
            inputs.scheduled_count as f64 / inputs.total_semesters.max(1) as f64;
        if avg_per_semester <= 4.0 {
            100.0
        } else {
            (100.0 - (avg_per_semester - 4.0) * 10.0).max(50.0)
        }
    };

    let slack = if inputs.on_track {
        100.0
    } else {
        (100.0 - inputs.unscheduled_count as f64 * 10.0).max(20.0)
    };

    let combined = safety * WEIGHT_PREREQUISITE_SAFETY
        + balance * WEIGHT_WORKLOAD_BALANCE
        + recovery * WEIGHT_FAILURE_RECOVERY
        + slack * WEIGHT_GRADUATION_SLACK;

    let breakdown = ConfidenceBreakdown {
        prerequisite_safety: round1(safety),
        workload_balance: round1(balance),
        failure_recovery_margin: round1(recovery),
        graduation_slack: round1(slack),
    };

    (round1(combined), breakdown)
}
