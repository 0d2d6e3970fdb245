//! Greedy semester scheduler with decision tracking.

use rustc_hash::FxHashSet;

use crate::config::{
    HIGH_VOLUME_CREDITS, LIGHT_LOAD_CREDITS, PlannerConfig, UNLOCK_MIN_DEPENDENTS,
};
use crate::graph::CourseGraph;
use crate::models::DecisionEvent;
use crate::ranking::rank_eligible;
use crate::{log_checks, log_debug, log_decisions};

/// Result of packing the topological order into semesters.
#[derive(Debug, Default)]
pub struct ScheduleOutcome {
    /// Ordered (semester label, course codes) pairs. Labels run
    /// `semester_1`, `semester_2`, ... with no gaps.
    pub semesters: Vec<(String, Vec<String>)>,
    /// Topologically valid courses that did not fit in the budget.
    pub unscheduled: Vec<String>,
    /// Noteworthy choices, in the order they were made.
    pub events: Vec<DecisionEvent>,
}

/// Assign topologically ordered courses to capacity-bounded semesters.
///
/// Each semester takes up to `max_per_semester` of the best-ranked courses
/// whose in-catalog prerequisites are all completed or placed in an
/// earlier semester. Stops early once no remaining course is eligible;
/// whatever is left is returned as unscheduled rather than dropped.
pub fn schedule_semesters(
    graph: &CourseGraph,
    topo_order: &[String],
    completed: &FxHashSet<String>,
    remaining_semesters: u32,
    max_per_semester: u32,
    priority: &FxHashSet<String>,
    config: &PlannerConfig,
) -> ScheduleOutcome {
    let verbosity = config.verbosity;
    let mut remaining: Vec<String> = topo_order.to_vec();
    let mut scheduled: FxHashSet<String> = FxHashSet::default();
    let mut outcome = ScheduleOutcome::default();

    for semester in 1..=remaining_semesters {
        if remaining.is_empty() {
            break;
        }

        let eligible: Vec<String> = remaining
            .iter()
            .filter(|code| {
                let ready = graph
                    .prerequisites(code)
                    .iter()
                    .all(|prereq| completed.contains(prereq) || scheduled.contains(prereq));
                if !ready {
                    log_checks!(verbosity, "semester {}: {} not yet eligible", semester, code);
                }
                ready
            })
            .cloned()
            .collect();

        if eligible.is_empty() {
            log_decisions!(
                verbosity,
                "semester {}: no eligible courses, stopping with {} unplaced",
                semester,
                remaining.len()
            );
            break;
        }
        log_debug!(
            verbosity,
            "  semester {}: {} of {} remaining are eligible",
            semester,
            eligible.len(),
            remaining.len()
        );

        let mut taken = rank_eligible(eligible, graph, priority);
        taken.truncate(max_per_semester as usize);
        log_decisions!(
            verbosity,
            "semester {}: placed {:?}",
            semester,
            taken
        );

        scheduled.extend(taken.iter().cloned());
        remaining.retain(|code| !scheduled.contains(code));

        record_events(
            &mut outcome.events,
            semester,
            &taken,
            graph,
            priority,
            !remaining.is_empty(),
        );
        outcome
            .semesters
            .push((format!("semester_{semester}"), taken));
    }

    outcome.unscheduled = remaining;
    outcome
}

/// Append the decision events for one packed semester.
fn record_events(
    events: &mut Vec<DecisionEvent>,
    semester: u32,
    taken: &[String],
    graph: &CourseGraph,
    priority: &FxHashSet<String>,
    courses_remain: bool,
) {
    let label = format!("Semester {semester}");

    for code in taken.iter().filter(|code| priority.contains(*code)) {
        events.push(DecisionEvent {
            semester: label.clone(),
            decision: format!("Prioritized {code}"),
            reason: "User marked this course as a high priority".to_string(),
            risk_mitigated: "Ensures early completion of critical interest areas".to_string(),
            trade_off: "May delay general education requirements".to_string(),
        });
    }

    for code in taken.iter().filter(|code| !priority.contains(*code)) {
        let dependents = graph.dependent_count(code);
        if dependents >= UNLOCK_MIN_DEPENDENTS {
            events.push(DecisionEvent {
                semester: label.clone(),
                decision: format!("Unlocked {code}"),
                reason: format!("Prerequisite for {dependents} downstream courses"),
                risk_mitigated: format!("Prevents blocking {dependents} future courses"),
                trade_off: String::new(),
            });
        }
    }

    let total_credits: u32 = taken
        .iter()
        .filter_map(|code| graph.course(code))
        .map(|course| course.credits)
        .sum();
    if total_credits > HIGH_VOLUME_CREDITS {
        events.push(DecisionEvent {
            semester: label,
            decision: format!("High Volume: {total_credits} Credits"),
            reason: "Accelerating progress to meet graduation timeline".to_string(),
            risk_mitigated: "Reduced total semesters".to_string(),
            trade_off: "Increased study load intensity".to_string(),
        });
    } else if total_credits < LIGHT_LOAD_CREDITS && courses_remain {
        events.push(DecisionEvent {
            semester: label,
            decision: format!("Lighter Load: {total_credits} Credits"),
            reason: "Prerequisite chains limit available courses".to_string(),
            risk_mitigated: "Prevents scheduling unprepared courses".to_string(),
            trade_off: "May extend graduation timeline".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    fn make_course(code: &str, credits: u32, prereqs: &[&str]) -> Course {
        Course {
            code: code.to_string(),
            name: String::new(),
            credits,
            prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
            difficulty: None,
        }
    }

    fn codes(list: &[&str]) -> FxHashSet<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    fn run(
        catalog: &[Course],
        completed_codes: &[&str],
        semesters: u32,
        per_semester: u32,
        priority_codes: &[&str],
    ) -> (CourseGraph, ScheduleOutcome) {
        let graph = CourseGraph::build(catalog);
        let completed = codes(completed_codes);
        let topo = graph.topological_order(&completed);
        let outcome = schedule_semesters(
            &graph,
            &topo,
            &completed,
            semesters,
            per_semester,
            &codes(priority_codes),
            &PlannerConfig::default(),
        );
        (graph, outcome)
    }

    #[test]
    fn test_chain_spreads_one_per_semester() {
        let catalog = vec![
            make_course("CS101", 4, &[]),
            make_course("CS102", 4, &["CS101"]),
            make_course("CS201", 4, &["CS102"]),
        ];
        let (_, outcome) = run(&catalog, &[], 3, 1, &[]);

        assert_eq!(
            outcome.semesters,
            vec![
                ("semester_1".to_string(), vec!["CS101".to_string()]),
                ("semester_2".to_string(), vec!["CS102".to_string()]),
                ("semester_3".to_string(), vec!["CS201".to_string()]),
            ]
        );
        assert!(outcome.unscheduled.is_empty());
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("MA101", 3, &[]),
            make_course("PH101", 3, &[]),
            make_course("EN101", 3, &[]),
            make_course("HI101", 3, &[]),
        ];
        let (_, outcome) = run(&catalog, &[], 2, 2, &[]);

        for (_, courses) in &outcome.semesters {
            assert!(courses.len() <= 2);
        }
        assert_eq!(outcome.unscheduled.len(), 1);
    }

    #[test]
    fn test_budget_overflow_goes_to_unscheduled() {
        let catalog = vec![
            make_course("CS101", 4, &[]),
            make_course("CS102", 4, &["CS101"]),
            make_course("CS201", 4, &["CS102"]),
        ];
        let (_, outcome) = run(&catalog, &[], 2, 1, &[]);

        assert_eq!(outcome.semesters.len(), 2);
        assert_eq!(outcome.unscheduled, ["CS201"]);
    }

    #[test]
    fn test_prerequisite_not_taken_same_semester() {
        // Capacity would allow both at once; CS102 must still wait.
        let catalog = vec![
            make_course("CS101", 4, &[]),
            make_course("CS102", 4, &["CS101"]),
        ];
        let (_, outcome) = run(&catalog, &[], 2, 5, &[]);

        assert_eq!(outcome.semesters[0].1, ["CS101"]);
        assert_eq!(outcome.semesters[1].1, ["CS102"]);
    }

    #[test]
    fn test_priority_course_scheduled_first() {
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("MA101", 3, &[]),
            make_course("EL101", 3, &[]),
        ];
        let (_, outcome) = run(&catalog, &[], 3, 1, &["EL101"]);

        assert_eq!(outcome.semesters[0].1, ["EL101"]);
    }

    #[test]
    fn test_priority_placement_emits_event() {
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("EL101", 3, &[]),
        ];
        let (_, outcome) = run(&catalog, &[], 1, 2, &["EL101"]);

        let priority_events: Vec<_> = outcome
            .events
            .iter()
            .filter(|e| e.decision == "Prioritized EL101")
            .collect();
        assert_eq!(priority_events.len(), 1);
        assert_eq!(priority_events[0].semester, "Semester 1");
    }

    #[test]
    fn test_unlock_event_for_gating_course() {
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("CS102", 3, &["CS101"]),
            make_course("CS201", 3, &["CS101"]),
        ];
        let (_, outcome) = run(&catalog, &[], 3, 1, &[]);

        assert!(outcome
            .events
            .iter()
            .any(|e| e.decision == "Unlocked CS101"
                && e.reason == "Prerequisite for 2 downstream courses"));
    }

    #[test]
    fn test_priority_course_not_double_logged_as_unlock() {
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("CS102", 3, &["CS101"]),
            make_course("CS201", 3, &["CS101"]),
        ];
        let (_, outcome) = run(&catalog, &[], 3, 1, &["CS101"]);

        assert!(outcome.events.iter().any(|e| e.decision == "Prioritized CS101"));
        assert!(!outcome.events.iter().any(|e| e.decision == "Unlocked CS101"));
    }

    #[test]
    fn test_high_volume_event() {
        let catalog = vec![
            make_course("CS101", 6, &[]),
            make_course("MA101", 6, &[]),
            make_course("PH101", 6, &[]),
        ];
        let (_, outcome) = run(&catalog, &[], 1, 3, &[]);

        assert!(outcome
            .events
            .iter()
            .any(|e| e.decision == "High Volume: 18 Credits"));
    }

    #[test]
    fn test_lighter_load_event_only_while_courses_remain() {
        // One 3-credit course placed, one still blocked behind it.
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("CS102", 3, &["CS101"]),
        ];
        let (_, outcome) = run(&catalog, &[], 2, 5, &[]);

        assert!(outcome
            .events
            .iter()
            .any(|e| e.decision == "Lighter Load: 3 Credits" && e.semester == "Semester 1"));
        // Final semester empties the pool, so no lighter-load note for it.
        assert!(!outcome
            .events
            .iter()
            .any(|e| e.decision == "Lighter Load: 3 Credits" && e.semester == "Semester 2"));
    }

    #[test]
    fn test_stuck_state_stops_early() {
        // CS102's prerequisite is never completed nor schedulable here
        // because the topo order is handed in pre-filtered.
        let catalog = vec![
            make_course("CS101", 3, &[]),
            make_course("CS102", 3, &["CS101"]),
        ];
        let graph = CourseGraph::build(&catalog);
        let outcome = schedule_semesters(
            &graph,
            &["CS102".to_string()],
            &FxHashSet::default(),
            4,
            1,
            &FxHashSet::default(),
            &PlannerConfig::default(),
        );

        assert!(outcome.semesters.is_empty());
        assert_eq!(outcome.unscheduled, ["CS102"]);
    }
}
