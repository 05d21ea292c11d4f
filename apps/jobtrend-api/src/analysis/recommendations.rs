use serde::{Deserialize, Serialize};

use crate::analysis::experience::ExperienceLevel;
use crate::analysis::gaps::Priority;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub skills: Vec<String>,
    pub reason: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(kind: &str, skills: &[&str], reason: &str, priority: Priority) -> Self {
        Self {
            kind: kind.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            reason: reason.to_string(),
            priority,
        }
    }
}

/// One level-based bundle, then skill-based follow-ups.
pub fn generate_upgrade_recommendations(
    current_skills: &[String],
    level: ExperienceLevel,
) -> Vec<Recommendation> {
    let has = |name: &str| current_skills.iter().any(|s| s == name);

    let mut recommendations = vec![match level {
        ExperienceLevel::Entry => Recommendation::new(
            "Foundation",
            &["JavaScript", "HTML/CSS", "Git", "Basic SQL"],
            "Essential foundation for any tech career",
            Priority::High,
        ),
        ExperienceLevel::Mid => Recommendation::new(
            "Specialization",
            &["React/Node.js", "Database Design", "API Development"],
            "Focus on full-stack development",
            Priority::High,
        ),
        ExperienceLevel::Senior => Recommendation::new(
            "Leadership",
            &["System Design", "Architecture", "Team Leadership"],
            "Prepare for senior/lead roles",
            Priority::Medium,
        ),
    }];

    if has("JavaScript") && !has("TypeScript") {
        recommendations.push(Recommendation::new(
            "Skill Enhancement",
            &["TypeScript"],
            "TypeScript is becoming standard in modern development",
            Priority::Medium,
        ));
    }

    if has("Python") && !has("Machine Learning") {
        recommendations.push(Recommendation::new(
            "Career Growth",
            &["Machine Learning", "Data Science"],
            "AI/ML skills highly valued in Indian market",
            Priority::High,
        ));
    }

    recommendations
}
