//! Skill extraction and categorical skill analysis.
//!
//! Extraction is a plain case-insensitive substring scan against
//! [`SKILL_DICTIONARY`]. No tokenization: "Java" also hits on "JavaScript".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recognized technology names, in reporting order.
pub const SKILL_DICTIONARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "TypeScript",
    "HTML",
    "CSS",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Git",
    "Machine Learning",
    "Data Science",
    "AI",
    "TensorFlow",
    "PyTorch",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Laravel",
    "Ruby on Rails",
    "C++",
    "C#",
    "PHP",
    "Swift",
    "Kotlin",
    "Go",
    "Rust",
    "Scala",
];

/// Category membership lists. A skill lands in the first category that has
/// a member contained in the skill's name.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Frontend",
        &["React", "Angular", "Vue.js", "HTML", "CSS", "JavaScript", "TypeScript"],
    ),
    (
        "Backend",
        &["Node.js", "Python", "Java", "C#", "PHP", "Ruby", "Go"],
    ),
    (
        "Database",
        &["MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle", "SQL Server"],
    ),
    (
        "Cloud",
        &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform"],
    ),
    (
        "AI/ML",
        &["Machine Learning", "Python", "TensorFlow", "PyTorch", "Data Science"],
    ),
    (
        "DevOps",
        &["Jenkins", "GitLab CI", "Ansible", "Puppet", "Chef", "Docker"],
    ),
    (
        "Mobile",
        &["React Native", "Flutter", "iOS", "Android", "Swift", "Kotlin"],
    ),
];

const MARKET_DEMAND: &[(&str, u32)] = &[
    ("React", 95),
    ("Python", 92),
    ("Machine Learning", 88),
    ("Node.js", 85),
    ("Data Science", 90),
    ("AWS", 87),
    ("Java", 89),
    ("Angular", 78),
    ("DevOps", 86),
    ("Cybersecurity", 91),
];

const DEFAULT_MARKET_DEMAND: u32 = 70;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    pub total_skills: usize,
    pub categories: BTreeMap<String, Vec<String>>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub market_demand: BTreeMap<String, u32>,
}

/// Returns every dictionary skill whose name occurs anywhere in `text`,
/// ignoring case. Output follows dictionary order and holds no duplicates.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for skill in SKILL_DICTIONARY {
        if text_lower.contains(&skill.to_lowercase()) && !found.iter().any(|s| s == skill) {
            found.push(skill.to_string());
        }
    }

    found
}

/// Market demand score for a skill, 0–100.
pub fn market_demand(skill: &str) -> u32 {
    MARKET_DEMAND
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, demand)| *demand)
        .unwrap_or(DEFAULT_MARKET_DEMAND)
}

/// The category a skill belongs to, if any.
pub fn categorize_skill(skill: &str) -> Option<&'static str> {
    let skill_lower = skill.to_lowercase();
    SKILL_CATEGORIES
        .iter()
        .find(|(_, members)| {
            members
                .iter()
                .any(|m| skill_lower.contains(&m.to_lowercase()))
        })
        .map(|(category, _)| *category)
}

/// Buckets skills into categories and derives strengths (≥ 2 skills in a
/// category) and weaknesses.
///
/// Weaknesses walk every known category, not only the populated ones: a
/// walk over populated categories can never find an empty one, so
/// `weaknesses` would always be empty. Each category with no detected
/// skills is reported instead.
pub fn analyze_skills(skills: &[String]) -> SkillAnalysis {
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for skill in skills {
        if let Some(category) = categorize_skill(skill) {
            categories
                .entry(category.to_string())
                .or_default()
                .push(skill.clone());
        }
    }

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (category, _) in SKILL_CATEGORIES {
        let count = categories.get(*category).map_or(0, Vec::len);
        if count >= 2 {
            strengths.push(format!("{category}: {count} skills"));
        } else if count == 0 {
            weaknesses.push(format!("{category}: No skills"));
        }
    }

    let market_demand = skills
        .iter()
        .map(|s| (s.clone(), market_demand(s)))
        .collect();

    SkillAnalysis {
        total_skills: skills.len(),
        categories,
        strengths,
        weaknesses,
        market_demand,
    }
}
