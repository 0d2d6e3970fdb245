//! Semester difficulty rating and burnout/graduation risk assessment.

use crate::config::{
    DIFFICULTY_LIGHT_MAX, DIFFICULTY_MODERATE_MAX, GPA_BALANCE_FLOOR, GPA_RISK_FLOOR,
    WORK_HOURS_HIGH, WORK_HOURS_MEDIUM,
};
use crate::graph::CourseGraph;
use crate::ranking::course_level;

/// Difficulty rating of one semester.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Light,
    Moderate,
    Heavy,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Light => "Light",
            Difficulty::Moderate => "Moderate",
            Difficulty::Heavy => "Heavy",
        }
    }
}

/// Burnout risk level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BurnoutRisk {
    Low,
    Medium,
    High,
}

impl BurnoutRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurnoutRisk::Low => "Low",
            BurnoutRisk::Medium => "Medium",
            BurnoutRisk::High => "High",
        }
    }
}

/// Graduation timeline risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraduationRisk {
    OnTrack,
    Delayed,
}

impl GraduationRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraduationRisk::OnTrack => "On Track",
            GraduationRisk::Delayed => "Delayed",
        }
    }
}

/// Risk assessment over a whole plan.
#[derive(Debug)]
pub struct RiskAssessment {
    pub burnout_risk: BurnoutRisk,
    pub graduation_risk: GraduationRisk,
    pub risk_factors: Vec<String>,
}

/// Difficulty score of one semester's course list.
///
/// `score = course_count + total_credits/4 + sum(level_digit)/2`
pub fn difficulty_score(codes: &[String], graph: &CourseGraph) -> f64 {
    let mut total_credits: u32 = 0;
    let mut level_sum: u32 = 0;
    for code in codes {
        if let Some(course) = graph.course(code) {
            total_credits += course.credits;
            level_sum += course_level(code);
        }
    }
    codes.len() as f64 + f64::from(total_credits) / 4.0 + f64::from(level_sum) / 2.0
}

/// Rate a score against the fixed Light/Moderate/Heavy thresholds.
pub fn rate_score(score: f64) -> Difficulty {
    if score <= DIFFICULTY_LIGHT_MAX {
        Difficulty::Light
    } else if score <= DIFFICULTY_MODERATE_MAX {
        Difficulty::Moderate
    } else {
        Difficulty::Heavy
    }
}

/// Rate every semester of a plan, preserving semester order.
pub fn semester_difficulties(
    plan: &[(String, Vec<String>)],
    graph: &CourseGraph,
) -> Vec<(String, Difficulty)> {
    plan.iter()
        .map(|(semester, codes)| (semester.clone(), rate_score(difficulty_score(codes, graph))))
        .collect()
}

/// Assess burnout and graduation risk for a rated plan.
///
/// Weekly work hours can raise the burnout level on their own; a low GPA
/// only adds explanatory factors without touching the level.
pub fn assess_risks(
    difficulties: &[(String, Difficulty)],
    unscheduled: &[String],
    weekly_work_hours: Option<u32>,
    current_gpa: Option<f64>,
    bottlenecks: &[(String, usize)],
) -> RiskAssessment {
    let mut risk_factors: Vec<String> = Vec::new();

    let heavy_count = difficulties
        .iter()
        .filter(|(_, d)| *d == Difficulty::Heavy)
        .count();
    let moderate_count = difficulties
        .iter()
        .filter(|(_, d)| *d == Difficulty::Moderate)
        .count();

    let mut consecutive_heavy = 0usize;
    let mut max_consecutive = 0usize;
    for (_, difficulty) in difficulties {
        if *difficulty == Difficulty::Heavy {
            consecutive_heavy += 1;
            max_consecutive = max_consecutive.max(consecutive_heavy);
        } else {
            consecutive_heavy = 0;
        }
    }

    let mut burnout_risk = BurnoutRisk::Low;
    if max_consecutive >= 2 {
        burnout_risk = BurnoutRisk::High;
        risk_factors.push(format!(
            "{max_consecutive} consecutive heavy semesters detected - high burnout risk"
        ));
    } else if heavy_count >= 3 {
        burnout_risk = BurnoutRisk::High;
        risk_factors.push(format!("{heavy_count} heavy semesters in total"));
    } else if heavy_count >= 2 || (heavy_count >= 1 && moderate_count >= 2) {
        burnout_risk = BurnoutRisk::Medium;
        risk_factors.push(format!(
            "{heavy_count} heavy + {moderate_count} moderate semesters"
        ));
    }

    if let Some(hours) = weekly_work_hours {
        if hours > WORK_HOURS_HIGH {
            burnout_risk = BurnoutRisk::High;
            risk_factors.push(format!(
                "Working {hours}+ hours/week significantly increases burnout risk"
            ));
        } else if hours > WORK_HOURS_MEDIUM {
            if burnout_risk == BurnoutRisk::Low {
                burnout_risk = BurnoutRisk::Medium;
            }
            risk_factors.push(format!("Working {hours} hours/week while studying"));
        }
    }

    if let Some(gpa) = current_gpa {
        if gpa < GPA_RISK_FLOOR {
            risk_factors.push(format!("GPA {gpa} is below 2.0 - consider lighter load"));
        } else if gpa < GPA_BALANCE_FLOOR {
            risk_factors.push(format!("GPA {gpa} may benefit from balanced workload"));
        }
    }

    let graduation_risk = if unscheduled.is_empty() {
        GraduationRisk::OnTrack
    } else {
        risk_factors.push(format!(
            "{} courses could not be scheduled in remaining semesters",
            unscheduled.len()
        ));
        GraduationRisk::Delayed
    };

    if !bottlenecks.is_empty() {
        let top: Vec<&str> = bottlenecks
            .iter()
            .take(3)
            .map(|(code, _)| code.as_str())
            .collect();
        risk_factors.push(format!(
            "Bottleneck courses (many dependents): {}",
            top.join(", ")
        ));
    }

    RiskAssessment {
        burnout_risk,
        graduation_risk,
        risk_factors,
    }
}
