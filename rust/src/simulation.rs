//! What-if failure simulation.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::graph::CourseGraph;
use crate::models::FailureImpact;

/// Compute the downstream impact of failing the given courses.
///
/// Walks the forward graph breadth-first from each failed course and
/// collects every transitive dependent, in discovery order. The delay
/// estimate is a coarse heuristic, not a re-plan; the caller re-plans by
/// removing the failed codes from its completed set before scheduling.
pub fn failure_impact(graph: &CourseGraph, failed: &[String]) -> FailureImpact {
    let mut affected: Vec<String> = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for code in failed {
        let mut queue: VecDeque<&str> = VecDeque::from([code.as_str()]);
        while let Some(current) = queue.pop_front() {
            for dependent in graph.dependents(current) {
                if seen.insert(dependent.as_str()) {
                    affected.push(dependent.clone());
                    queue.push_back(dependent.as_str());
                }
            }
        }
    }

    let delay_estimate = if affected.is_empty() {
        "None".to_string()
    } else {
        "1 semester minimum".to_string()
    };

    FailureImpact {
        failed_courses: failed.to_vec(),
        affected_count: affected.len(),
        directly_affected: affected,
        delay_estimate,
    }
}
