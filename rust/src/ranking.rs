//! Eligible-course ranking for the semester scheduler.
//!
//! Ranks by priority flag, then bottleneck-unlocking power, then course
//! level, front-loading the highest-leverage work. Ties keep the caller's
//! order, which is topological (and therefore catalog) order.

use rustc_hash::FxHashSet;

use crate::graph::CourseGraph;

/// Ranking key for one eligible course.
///
/// Derived `Ord` compares fields in declaration order, so a higher key
/// means: priority courses first, then more dependents, then higher level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CourseRank {
    pub is_priority: bool,
    pub dependent_count: usize,
    pub level: u32,
}

/// Course level: the first ASCII digit in the code, 0 if none.
///
/// "CS301" -> 3, "MATH40" -> 4, "SEMINAR" -> 0.
pub fn course_level(code: &str) -> u32 {
    code.chars().find_map(|c| c.to_digit(10)).unwrap_or(0)
}

/// Compute the ranking key for a course.
pub fn rank_course(code: &str, graph: &CourseGraph, priority: &FxHashSet<String>) -> CourseRank {
    CourseRank {
        is_priority: priority.contains(code),
        dependent_count: graph.dependent_count(code),
        level: course_level(code),
    }
}

/// Sort eligible codes by rank, best first.
///
/// The sort is stable, so equally ranked courses keep their topological
/// order; results are reproducible for identical input.
pub fn rank_eligible(
    eligible: Vec<String>,
    graph: &CourseGraph,
    priority: &FxHashSet<String>,
) -> Vec<String> {
    let mut ranked: Vec<(String, CourseRank)> = eligible
        .into_iter()
        .map(|code| {
            let rank = rank_course(&code, graph, priority);
            (code, rank)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(code, _)| code).collect()
}
