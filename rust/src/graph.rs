//! Prerequisite graph construction and topological resolution.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::config::BOTTLENECK_MIN_DEPENDENTS;
use crate::models::Course;

/// Forward and reverse prerequisite adjacency over one catalog.
///
/// Both directions are restricted to codes present in the catalog;
/// prerequisites referencing unknown codes are treated as already
/// satisfied (validation warns about them separately). Adjacency lists
/// keep catalog declaration order so every traversal is deterministic.
///
/// A graph is built fresh for each planning request and dropped with it;
/// nothing here survives across requests.
#[derive(Debug, Default)]
pub struct CourseGraph {
    /// Catalog codes in first-occurrence order.
    codes: Vec<String>,
    /// Code to course data; on duplicate codes the last entry wins.
    courses: FxHashMap<String, Course>,
    /// Prerequisite code to its dependents.
    forward: FxHashMap<String, Vec<String>>,
    /// Course code to its in-catalog prerequisites.
    reverse: FxHashMap<String, Vec<String>>,
}

impl CourseGraph {
    /// Build the graph from a catalog of normalized courses.
    ///
    /// Never fails: duplicate codes overwrite course data (the position of
    /// the first occurrence is kept), and edges are accumulated across all
    /// occurrences with duplicates collapsed.
    pub fn build(catalog: &[Course]) -> Self {
        let mut codes: Vec<String> = Vec::with_capacity(catalog.len());
        let mut courses: FxHashMap<String, Course> = FxHashMap::default();
        for course in catalog {
            if !courses.contains_key(&course.code) {
                codes.push(course.code.clone());
            }
            courses.insert(course.code.clone(), course.clone());
        }

        let mut forward: FxHashMap<String, Vec<String>> = FxHashMap::default();
        let mut reverse: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for course in catalog {
            for prereq in &course.prerequisites {
                if !courses.contains_key(prereq) {
                    continue;
                }
                let dependents = forward.entry(prereq.clone()).or_default();
                if !dependents.contains(&course.code) {
                    dependents.push(course.code.clone());
                }
                let prereqs = reverse.entry(course.code.clone()).or_default();
                if !prereqs.contains(prereq) {
                    prereqs.push(prereq.clone());
                }
            }
        }

        Self {
            codes,
            courses,
            forward,
            reverse,
        }
    }

    /// Unique catalog codes in first-occurrence order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Number of unique courses in the catalog.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// In-catalog prerequisites of a course, in declaration order.
    pub fn prerequisites(&self, code: &str) -> &[String] {
        self.reverse.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Courses that list `code` as a prerequisite, in catalog order.
    pub fn dependents(&self, code: &str) -> &[String] {
        self.forward.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dependent_count(&self, code: &str) -> usize {
        self.dependents(code).len()
    }

    /// Courses that gate at least `BOTTLENECK_MIN_DEPENDENTS` others,
    /// sorted by dependent count descending (catalog order on ties).
    pub fn bottlenecks(&self) -> Vec<(String, usize)> {
        let mut found: Vec<(String, usize)> = self
            .codes
            .iter()
            .filter_map(|code| {
                let count = self.dependent_count(code);
                (count >= BOTTLENECK_MIN_DEPENDENTS).then(|| (code.clone(), count))
            })
            .collect();
        found.sort_by(|a, b| b.1.cmp(&a.1));
        found
    }

    /// Order the uncompleted catalog courses so that every course appears
    /// after all of its uncompleted in-catalog prerequisites, using Kahn's
    /// algorithm seeded in catalog order.
    ///
    /// Courses caught in a prerequisite cycle never reach in-degree zero
    /// and are left out of the result; callers account for them as
    /// permanently unschedulable. Cycles never raise.
    pub fn topological_order(&self, completed: &FxHashSet<String>) -> Vec<String> {
        let mut in_degree: FxHashMap<&str, usize> = FxHashMap::default();
        for code in &self.codes {
            if completed.contains(code) {
                continue;
            }
            let unsatisfied = self
                .prerequisites(code)
                .iter()
                .filter(|prereq| !completed.contains(*prereq))
                .count();
            in_degree.insert(code.as_str(), unsatisfied);
        }

        let mut queue: VecDeque<&str> = self
            .codes
            .iter()
            .map(String::as_str)
            .filter(|code| in_degree.get(code) == Some(&0))
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(in_degree.len());
        while let Some(code) = queue.pop_front() {
            order.push(code.to_string());
            for dependent in self.dependents(code) {
                if let Some(degree) = in_degree.get_mut(dependent.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependent.as_str());
                    }
                }
            }
        }

        order
    }
}
