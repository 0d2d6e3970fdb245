//! Deterministic plan insights.
//!
//! These strings double as the fallback when the external text-generation
//! collaborator is unavailable, so they are computed here rather than
//! delegated.

use crate::graph::CourseGraph;
use crate::risk::GraduationRisk;

/// Insight used when validation fails and no plan exists.
pub const INVALID_INSIGHT: &str = "Cannot generate plan due to validation errors.";

const CONFIDENCE_HIGH: f64 = 90.0;
const CONFIDENCE_MODERATE: f64 = 70.0;

/// Career keyword table: goal substring -> course-matching keywords.
const CAREER_KEYWORDS: [(&str, &[&str]); 5] = [
    (
        "machine learning",
        &["ml", "ai", "data", "algorithm", "statistics"],
    ),
    (
        "data scientist",
        &["data", "statistics", "ml", "analysis", "database"],
    ),
    (
        "software engineer",
        &["software", "engineering", "programming", "systems"],
    ),
    ("web developer", &["web", "frontend", "backend", "network"]),
    ("security", &["security", "network", "crypto", "systems"]),
];

/// Pick one memorable insight for the plan.
///
/// Candidates are ranked: confidence statement, then top bottleneck, then
/// the on-track note; the first always wins but the full list mirrors the
/// intended ordering if the lead candidate is ever dropped.
pub fn key_insight(
    confidence: f64,
    bottlenecks: &[(String, usize)],
    graduation_risk: GraduationRisk,
    unscheduled: &[String],
) -> String {
    let mut insights: Vec<String> = Vec::new();

    if confidence >= CONFIDENCE_HIGH {
        insights.push(format!(
            "This plan has {confidence:.0}% confidence — it survives one failed core course without delaying graduation."
        ));
    } else if confidence >= CONFIDENCE_MODERATE {
        insights.push(format!(
            "This plan scores {confidence:.0}% confidence — balanced but leaves limited room for setbacks."
        ));
    } else {
        insights.push(format!(
            "This plan scores {confidence:.0}% confidence — consider reducing course load or extending timeline."
        ));
    }

    if let Some((code, count)) = bottlenecks.first() {
        insights.push(format!(
            "Completing {code} early is critical — it unlocks {count} downstream courses."
        ));
    }

    if graduation_risk == GraduationRisk::OnTrack && unscheduled.is_empty() {
        insights.push(
            "All required courses fit within your timeline — on-time graduation is achievable."
                .to_string(),
        );
    }

    insights
        .into_iter()
        .next()
        .unwrap_or_else(|| "Plan generated based on your provided data.".to_string())
}

/// Keyword-coverage analysis of the plan against a career goal.
///
/// Pure computation over caller-supplied data; no courses are suggested
/// that are not already in the catalog.
pub fn career_alignment(
    career_goal: &str,
    graph: &CourseGraph,
    plan: &[(String, Vec<String>)],
) -> String {
    let goal_lower = career_goal.to_lowercase();
    let keywords: &[&str] = CAREER_KEYWORDS
        .iter()
        .find(|(key, _)| goal_lower.contains(key))
        .map(|(_, kws)| *kws)
        .unwrap_or(&[]);

    let relevant: Vec<&str> = graph
        .codes()
        .iter()
        .filter(|code| {
            let course_text = graph
                .course(code)
                .map(|c| format!("{} {}", c.code, c.name).to_lowercase())
                .unwrap_or_default();
            keywords.iter().any(|kw| course_text.contains(kw))
        })
        .map(String::as_str)
        .collect();

    if relevant.is_empty() {
        return format!(
            "Career goal '{career_goal}' noted. All decisions based on your provided course data."
        );
    }

    let scheduled_relevant = plan
        .iter()
        .flat_map(|(_, codes)| codes.iter())
        .filter(|code| relevant.contains(&code.as_str()))
        .count();
    let coverage = scheduled_relevant as f64 / relevant.len() as f64 * 100.0;
    let sample: Vec<&str> = relevant.iter().take(5).copied().collect();

    format!(
        "For '{career_goal}': {scheduled_relevant}/{} relevant courses scheduled ({coverage:.0}% coverage). Relevant courses in your catalog: {}",
        relevant.len(),
        sample.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    fn make_course(code: &str, name: &str) -> Course {
        Course {
            code: code.to_string(),
            name: name.to_string(),
            credits: 4,
            prerequisites: vec![],
            difficulty: None,
        }
    }

    #[test]
    fn test_high_confidence_insight() {
        let insight = key_insight(95.0, &[], GraduationRisk::OnTrack, &[]);
        assert!(insight.contains("95% confidence"));
        assert!(insight.contains("survives one failed core course"));
    }

    #[test]
    fn test_moderate_confidence_insight() {
        let insight = key_insight(75.0, &[], GraduationRisk::OnTrack, &[]);
        assert!(insight.contains("limited room for setbacks"));
    }

    #[test]
    fn test_low_confidence_insight() {
        let insight = key_insight(40.0, &[], GraduationRisk::Delayed, &["X1".to_string()]);
        assert!(insight.contains("consider reducing course load"));
    }

    #[test]
    fn test_confidence_insight_outranks_bottleneck() {
        let bottlenecks = vec![("CS101".to_string(), 4)];
        let insight = key_insight(95.0, &bottlenecks, GraduationRisk::OnTrack, &[]);
        assert!(insight.contains("confidence"));
    }

    #[test]
    fn test_career_alignment_coverage() {
        let graph = CourseGraph::build(&[
            make_course("CS301", "Data Structures"),
            make_course("CS302", "Algorithms"),
            make_course("EN101", "Composition"),
        ]);
        let plan = vec![("semester_1".to_string(), vec!["CS301".to_string()])];
        let notes = career_alignment("Machine Learning Engineer", &graph, &plan);

        assert!(notes.contains("1/2 relevant courses scheduled"));
        assert!(notes.contains("50% coverage"));
        assert!(notes.contains("CS301, CS302"));
    }

    #[test]
    fn test_career_alignment_unknown_goal_falls_back() {
        let graph = CourseGraph::build(&[make_course("EN101", "Composition")]);
        let notes = career_alignment("Marine Biologist", &graph, &[]);
        assert_eq!(
            notes,
            "Career goal 'Marine Biologist' noted. All decisions based on your provided course data."
        );
    }

    #[test]
    fn test_career_alignment_matches_code_text() {
        // "ai" matches inside the course name, not the code.
        let graph = CourseGraph::build(&[make_course("CS420", "AI Fundamentals")]);
        let notes = career_alignment("machine learning", &graph, &[]);
        assert!(notes.contains("0/1 relevant courses scheduled"));
    }
}
