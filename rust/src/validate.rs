//! Input validation.
//!
//! Only an empty catalog is fatal to a request. Everything else found
//! here (duplicates, dangling references, infeasible budgets) downgrades
//! to a warning so scheduling can still proceed on what the caller sent.

use rustc_hash::FxHashSet;

use crate::models::Course;

/// Outcome of validating one planning request.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Validate a normalized request.
///
/// `completed` and `priority` are the normalized code lists;
/// `remaining_semesters` and `max_per_semester` bound the schedule budget.
pub fn validate_request(
    catalog: &[Course],
    completed: &[String],
    priority: &[String],
    remaining_semesters: u32,
    max_per_semester: u32,
) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        ..Default::default()
    };

    if catalog.is_empty() {
        report.is_valid = false;
        report
            .errors
            .push("No courses provided. Please upload your course data.".to_string());
        return report;
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut duplicates: Vec<&str> = Vec::new();
    for course in catalog {
        if !seen.insert(course.code.as_str()) && !duplicates.contains(&course.code.as_str()) {
            duplicates.push(course.code.as_str());
        }
    }
    if !duplicates.is_empty() {
        report.warnings.push(format!(
            "Duplicate course codes detected: {}",
            duplicates.join(", ")
        ));
    }

    let valid_codes: FxHashSet<&str> = catalog.iter().map(|c| c.code.as_str()).collect();
    let completed_set: FxHashSet<&str> = completed.iter().map(String::as_str).collect();

    for course in catalog {
        for prereq in &course.prerequisites {
            if !valid_codes.contains(prereq.as_str()) && !completed_set.contains(prereq.as_str()) {
                report.warnings.push(format!(
                    "Course {} has prerequisite {} not found in catalog.",
                    course.code, prereq
                ));
            }
        }
    }

    for code in completed {
        if !valid_codes.contains(code.as_str()) {
            report.warnings.push(format!(
                "Completed course {code} not found in course catalog."
            ));
        }
    }

    for code in priority {
        if !valid_codes.contains(code.as_str()) {
            report.warnings.push(format!(
                "Priority course {code} not found in course catalog."
            ));
        }
    }

    let remaining_count = valid_codes
        .iter()
        .filter(|code| !completed_set.contains(**code))
        .count();
    let available_slots = (remaining_semesters as usize) * (max_per_semester as usize);
    if remaining_count > available_slots {
        report.warnings.push(format!(
            "{remaining_count} courses remaining but only {available_slots} slots available \
             ({remaining_semesters} semesters x {max_per_semester} courses)."
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_course(code: &str, prereqs: &[&str]) -> Course {
        Course {
            code: code.to_string(),
            name: String::new(),
            credits: 3,
            prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
            difficulty: None,
        }
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let report = validate_request(&[], &[], &[], 4, 5);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            ["No courses provided. Please upload your course data."]
        );
    }

    #[test]
    fn test_clean_catalog_passes_without_warnings() {
        let catalog = vec![make_course("CS101", &[]), make_course("CS102", &["CS101"])];
        let report = validate_request(&catalog, &[], &[], 4, 5);
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_duplicates_warn_once_per_code() {
        let catalog = vec![
            make_course("CS101", &[]),
            make_course("CS101", &[]),
            make_course("CS101", &[]),
        ];
        let report = validate_request(&catalog, &[], &[], 4, 5);
        assert!(report.is_valid);
        assert_eq!(
            report.warnings,
            ["Duplicate course codes detected: CS101"]
        );
    }

    #[test]
    fn test_dangling_prerequisite_warns_unless_completed() {
        let catalog = vec![make_course("CS102", &["CS101", "MA101"])];
        let report = validate_request(&catalog, &["MA101".to_string()], &[], 4, 5);
        assert_eq!(
            report.warnings,
            ["Course CS102 has prerequisite CS101 not found in catalog."]
        );
    }

    #[test]
    fn test_unknown_completed_and_priority_warn() {
        let catalog = vec![make_course("CS101", &[])];
        let report = validate_request(
            &catalog,
            &["ZZ100".to_string()],
            &["ZZ200".to_string()],
            4,
            5,
        );
        assert_eq!(
            report.warnings,
            [
                "Completed course ZZ100 not found in course catalog.",
                "Priority course ZZ200 not found in course catalog.",
            ]
        );
    }

    #[test]
    fn test_infeasible_budget_warns() {
        let catalog = vec![
            make_course("CS101", &[]),
            make_course("CS102", &[]),
            make_course("CS201", &[]),
        ];
        let report = validate_request(&catalog, &[], &[], 1, 2);
        assert_eq!(
            report.warnings,
            ["3 courses remaining but only 2 slots available (1 semesters x 2 courses)."]
        );
    }
}
