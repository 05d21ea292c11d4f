//! Ranks the fixed posting pool against a candidate profile.
//!
//! Score for one posting with required skills R:
//! 1. matched = required skills contained (case-insensitive) in some candidate skill
//! 2. skill_pct = |matched| / |R| × 100
//! 3. bonus = 20 on equal level, 10 for a mid candidate on a senior posting, else 0
//! 4. match_score = round(min(100, skill_pct + bonus))
//!
//! Postings are stable-sorted by score, highest first, and cut to [`MAX_MATCHES`].

use serde::{Deserialize, Serialize};

use crate::analysis::experience::ExperienceLevel;

pub const MAX_MATCHES: usize = 10;

/// A posting in the match pool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub required_skills: &'static [&'static str],
    pub experience: ExperienceLevel,
}

pub const MATCH_POOL: &[Posting] = &[
    Posting {
        id: 1,
        title: "Senior React Developer",
        company: "TCS",
        location: "Mumbai, Maharashtra",
        salary: "₹12,00,000 - ₹15,00,000",
        required_skills: &["React", "TypeScript", "Node.js", "AWS"],
        experience: ExperienceLevel::Senior,
    },
    Posting {
        id: 2,
        title: "Full Stack Engineer",
        company: "Infosys",
        location: "Bangalore, Karnataka",
        salary: "₹10,00,000 - ₹13,00,000",
        required_skills: &["React", "Node.js", "MongoDB", "Express"],
        experience: ExperienceLevel::Mid,
    },
    Posting {
        id: 3,
        title: "Machine Learning Engineer",
        company: "Wipro",
        location: "Hyderabad, Telangana",
        salary: "₹13,00,000 - ₹16,00,000",
        required_skills: &["Python", "Machine Learning", "TensorFlow", "AWS"],
        experience: ExperienceLevel::Senior,
    },
    Posting {
        id: 4,
        title: "DevOps Engineer",
        company: "HCL",
        location: "Pune, Maharashtra",
        salary: "₹11,00,000 - ₹14,00,000",
        required_skills: &["Docker", "Kubernetes", "Jenkins", "AWS"],
        experience: ExperienceLevel::Mid,
    },
    Posting {
        id: 5,
        title: "Data Scientist",
        company: "Tech Mahindra",
        location: "Chennai, Tamil Nadu",
        salary: "₹12,00,000 - ₹15,00,000",
        required_skills: &["Python", "Data Science", "SQL", "Machine Learning"],
        experience: ExperienceLevel::Mid,
    },
    Posting {
        id: 6,
        title: "Java Developer",
        company: "Cognizant",
        location: "Delhi, NCR",
        salary: "₹9,00,000 - ₹12,00,000",
        required_skills: &["Java", "Spring Boot", "Hibernate", "MySQL"],
        experience: ExperienceLevel::Mid,
    },
    Posting {
        id: 7,
        title: "Frontend Developer",
        company: "Mindtree",
        location: "Bangalore, Karnataka",
        salary: "₹8,00,000 - ₹11,00,000",
        required_skills: &["React", "JavaScript", "HTML", "CSS"],
        experience: ExperienceLevel::Entry,
    },
    Posting {
        id: 8,
        title: "Backend Developer",
        company: "L&T Infotech",
        location: "Mumbai, Maharashtra",
        salary: "₹9,00,000 - ₹12,00,000",
        required_skills: &["Java", "Spring", "Hibernate", "PostgreSQL"],
        experience: ExperienceLevel::Mid,
    },
];

/// A posting scored against one candidate. Owns its data so it can be
/// persisted client-side and read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub required_skills: Vec<String>,
    pub experience: ExperienceLevel,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

pub fn experience_bonus(candidate: ExperienceLevel, job: ExperienceLevel) -> f64 {
    match (candidate, job) {
        (c, j) if c == j => 20.0,
        (ExperienceLevel::Mid, ExperienceLevel::Senior) => 10.0,
        _ => 0.0,
    }
}

pub fn score_job(skills: &[String], level: ExperienceLevel, posting: &Posting) -> ScoredJob {
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = posting
        .required_skills
        .iter()
        .map(|r| r.to_string())
        .partition(|required| {
            let required_lower = required.to_lowercase();
            skills_lower.iter().any(|s| s.contains(&required_lower))
        });

    let skill_pct = if posting.required_skills.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / posting.required_skills.len() as f64 * 100.0
    };
    let total = (skill_pct + experience_bonus(level, posting.experience)).min(100.0);

    ScoredJob {
        id: posting.id,
        title: posting.title.to_string(),
        company: posting.company.to_string(),
        location: posting.location.to_string(),
        salary: posting.salary.to_string(),
        required_skills: posting.required_skills.iter().map(|s| s.to_string()).collect(),
        experience: posting.experience,
        match_score: total.round() as u32,
        matched_skills,
        missing_skills,
    }
}

/// Scores every posting in `pool`, highest first (ties keep pool order),
/// at most [`MAX_MATCHES`] entries.
pub fn rank_jobs(skills: &[String], level: ExperienceLevel, pool: &[Posting]) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = pool.iter().map(|p| score_job(skills, level, p)).collect();
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_MATCHES);
    scored
}

/// Ranks the built-in [`MATCH_POOL`].
pub fn get_job_matches(skills: &[String], level: ExperienceLevel) -> Vec<ScoredJob> {
    rank_jobs(skills, level, MATCH_POOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn posting(id: u32, required: &'static [&'static str], experience: ExperienceLevel) -> Posting {
        Posting {
            id,
            title: "Engineer",
            company: "Acme",
            location: "Pune, Maharashtra",
            salary: "₹1",
            required_skills: required,
            experience,
        }
    }

    #[test]
    fn test_full_stack_example_scores_70() {
        let skills = owned(&["React", "Node.js"]);
        let matches = get_job_matches(&skills, ExperienceLevel::Mid);
        let full_stack = matches.iter().find(|j| j.id == 2).unwrap();
        assert_eq!(full_stack.match_score, 70);
        assert_eq!(full_stack.matched_skills, owned(&["React", "Node.js"]));
        assert_eq!(full_stack.missing_skills, owned(&["MongoDB", "Express"]));
    }

    #[test]
    fn test_express_js_covers_express_requirement() {
        let skills = owned(&["React", "Node.js", "MongoDB", "Express.js"]);
        let job = score_job(&skills, ExperienceLevel::Mid, &MATCH_POOL[1]);
        assert_eq!(job.match_score, 100);
        assert!(job.missing_skills.is_empty());
    }

    #[test]
    fn test_score_capped_at_100() {
        let skills = owned(&["React", "JavaScript", "HTML", "CSS"]);
        let job = score_job(&skills, ExperienceLevel::Entry, &MATCH_POOL[6]);
        assert_eq!(job.match_score, 100);
    }

    #[test]
    fn test_empty_skills_scores_equal_bonus() {
        for level in [
            ExperienceLevel::Entry,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
        ] {
            for job in get_job_matches(&[], level) {
                let expected = experience_bonus(level, job.experience) as u32;
                assert_eq!(job.match_score, expected, "job {} at {:?}", job.id, level);
                assert!(matches!(job.match_score, 0 | 10 | 20));
            }
        }
    }

    #[test]
    fn test_experience_bonus_table() {
        use ExperienceLevel::*;
        assert_eq!(experience_bonus(Senior, Senior), 20.0);
        assert_eq!(experience_bonus(Mid, Senior), 10.0);
        assert_eq!(experience_bonus(Senior, Mid), 0.0);
        assert_eq!(experience_bonus(Entry, Mid), 0.0);
    }

    #[test]
    fn test_sorted_non_increasing_and_bounded() {
        let skills = owned(&["Python", "AWS", "Docker", "Java", "React"]);
        let matches = get_job_matches(&skills, ExperienceLevel::Senior);
        assert!(matches.len() <= MAX_MATCHES);
        assert!(matches
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
        assert!(matches.iter().all(|j| j.match_score <= 100));
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let matches = get_job_matches(&[], ExperienceLevel::Entry);
        // Only the entry-level posting earns a bonus; the rest tie at 0.
        assert_eq!(matches[0].id, 7);
        let tail: Vec<u32> = matches[1..].iter().map(|j| j.id).collect();
        assert_eq!(tail, vec![1, 2, 3, 4, 5, 6, 8]);
    }

    #[test]
    fn test_large_pool_truncated_to_ten() {
        let pool: Vec<Posting> = (1..=15)
            .map(|id| posting(id, &["Rust"], ExperienceLevel::Mid))
            .collect();
        let matches = rank_jobs(&owned(&["Rust"]), ExperienceLevel::Mid, &pool);
        assert_eq!(matches.len(), MAX_MATCHES);
        assert_eq!(matches[0].id, 1);
    }

    #[test]
    fn test_empty_requirements_do_not_divide_by_zero() {
        let job = score_job(&[], ExperienceLevel::Mid, &posting(1, &[], ExperienceLevel::Mid));
        assert_eq!(job.match_score, 20);
    }

    #[test]
    fn test_partial_match_rounds() {
        let job = score_job(
            &owned(&["Rust"]),
            ExperienceLevel::Entry,
            &posting(1, &["Rust", "Go", "C"], ExperienceLevel::Senior),
        );
        // 33.33… rounds to 33
        assert_eq!(job.match_score, 33);
    }

    #[test]
    fn test_scored_job_serializes_camel_case() {
        let job = score_job(&[], ExperienceLevel::Mid, &MATCH_POOL[0]);
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("matchScore").is_some());
        assert!(value.get("requiredSkills").is_some());
        assert_eq!(value["experience"], "senior");
    }
}
