//! Skill gap identification against the high-demand list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GapEntry {
    pub skill: String,
    pub priority: Priority,
    pub reason: String,
    pub learning_time: String,
    pub salary_impact: String,
}

pub const HIGH_DEMAND_SKILLS: &[&str] = &[
    "Machine Learning",
    "Data Science",
    "AWS",
    "DevOps",
    "Cybersecurity",
    "React",
    "Python",
    "Node.js",
    "Java",
    "Docker",
    "Kubernetes",
];

const HIGH_PRIORITY: &[&str] = &["Machine Learning", "Data Science", "AWS", "Cybersecurity"];
const MEDIUM_PRIORITY: &[&str] = &["DevOps", "Docker", "Kubernetes", "React"];

const GAP_REASONS: &[(&str, &str)] = &[
    ("Machine Learning", "AI/ML boom in Indian market, 45% growth"),
    ("Data Science", "High demand in Indian analytics companies"),
    ("AWS", "Cloud adoption growing rapidly in India"),
    ("DevOps", "Essential for modern software development"),
    ("Cybersecurity", "Critical need in digital transformation"),
    ("React", "Most popular frontend framework in Indian startups"),
    ("Python", "High demand in AI/ML and data science"),
    ("Docker", "Containerization essential for modern deployments"),
    ("Kubernetes", "Growing demand in cloud-native companies"),
    ("Java", "Essential for Indian enterprise software"),
];

const LEARNING_TIMES: &[(&str, &str)] = &[
    ("Machine Learning", "3-6 months"),
    ("Data Science", "4-8 months"),
    ("AWS", "2-4 months"),
    ("DevOps", "3-5 months"),
    ("Cybersecurity", "4-6 months"),
    ("React", "2-3 months"),
    ("Python", "2-4 months"),
    ("Docker", "1-2 months"),
    ("Kubernetes", "2-3 months"),
    ("Java", "3-5 months"),
];

const SALARY_IMPACTS: &[(&str, &str)] = &[
    ("Machine Learning", "25-40% increase"),
    ("Data Science", "20-35% increase"),
    ("AWS", "15-30% increase"),
    ("DevOps", "20-35% increase"),
    ("Cybersecurity", "30-45% increase"),
    ("React", "15-25% increase"),
    ("Python", "20-30% increase"),
    ("Docker", "15-25% increase"),
    ("Kubernetes", "20-30% increase"),
    ("Java", "15-25% increase"),
];

fn lookup(table: &[(&str, &'static str)], skill: &str, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

pub fn skill_priority(skill: &str) -> Priority {
    if HIGH_PRIORITY.contains(&skill) {
        Priority::High
    } else if MEDIUM_PRIORITY.contains(&skill) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

pub fn gap_reason(skill: &str) -> &'static str {
    lookup(GAP_REASONS, skill, "Growing demand in tech sector")
}

pub fn learning_time(skill: &str) -> &'static str {
    lookup(LEARNING_TIMES, skill, "2-4 months")
}

pub fn salary_impact(skill: &str) -> &'static str {
    lookup(SALARY_IMPACTS, skill, "15-25% increase")
}

/// High-demand skills not covered by `current_skills`. A high-demand skill
/// counts as covered when any current skill contains it, ignoring case.
pub fn identify_skill_gaps(current_skills: &[String]) -> Vec<GapEntry> {
    let current_lower: Vec<String> = current_skills.iter().map(|s| s.to_lowercase()).collect();

    HIGH_DEMAND_SKILLS
        .iter()
        .filter(|skill| {
            let skill_lower = skill.to_lowercase();
            !current_lower.iter().any(|c| c.contains(&skill_lower))
        })
        .map(|skill| GapEntry {
            skill: skill.to_string(),
            priority: skill_priority(skill),
            reason: gap_reason(skill).to_string(),
            learning_time: learning_time(skill).to_string(),
            salary_impact: salary_impact(skill).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_skills_every_high_demand_skill_is_a_gap() {
        let gaps = identify_skill_gaps(&[]);
        assert_eq!(gaps.len(), HIGH_DEMAND_SKILLS.len());
        assert_eq!(gaps[0].skill, "Machine Learning");
    }

    #[test]
    fn test_gaps_exclude_covered_skills() {
        let current = owned(&["React", "Python", "JavaScript"]);
        let gaps = identify_skill_gaps(&current);
        for gap in &gaps {
            let gap_lower = gap.skill.to_lowercase();
            assert!(
                !current.iter().any(|c| c.to_lowercase().contains(&gap_lower)),
                "{} should not be a gap",
                gap.skill
            );
        }
        // "JavaScript" contains "Java", so Java is covered.
        assert!(!gaps.iter().any(|g| g.skill == "Java"));
    }

    #[test]
    fn test_gap_annotations() {
        let gaps = identify_skill_gaps(&[]);
        let ml = gaps.iter().find(|g| g.skill == "Machine Learning").unwrap();
        assert_eq!(ml.priority, Priority::High);
        assert_eq!(ml.learning_time, "3-6 months");
        assert_eq!(ml.salary_impact, "25-40% increase");

        let node = gaps.iter().find(|g| g.skill == "Node.js").unwrap();
        assert_eq!(node.priority, Priority::Low);
        assert_eq!(node.reason, "Growing demand in tech sector");
        assert_eq!(node.learning_time, "2-4 months");
        assert_eq!(node.salary_impact, "15-25% increase");
    }

    #[test]
    fn test_priority_tiers() {
        assert_eq!(skill_priority("Cybersecurity"), Priority::High);
        assert_eq!(skill_priority("React"), Priority::Medium);
        assert_eq!(skill_priority("Java"), Priority::Low);
    }

    #[test]
    fn test_gap_entry_serializes_camel_case() {
        let gaps = identify_skill_gaps(&[]);
        let value = serde_json::to_value(&gaps[0]).unwrap();
        assert_eq!(value["learningTime"], "3-6 months");
        assert_eq!(value["priority"], "high");
    }
}
