//! Skills catalog: demand, salary and related skills per technology.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extractors::AppQuery;
use crate::response::ApiResponse;

const DEFAULT_TOP_LIMIT: usize = 10;

const MAJOR_RECRUITERS: &[&str] = &["TCS", "Infosys", "Wipro", "HCL", "Tech Mahindra", "Cognizant"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: &'static str,
    pub category: &'static str,
    pub demand: u32,
    /// Average annual salary in INR.
    pub avg_salary: u64,
    pub related_skills: &'static [&'static str],
    pub job_count: u32,
    pub indian_companies: &'static [&'static str],
}

const fn record(
    name: &'static str,
    category: &'static str,
    demand: u32,
    avg_salary: u64,
    related_skills: &'static [&'static str],
    job_count: u32,
) -> SkillRecord {
    SkillRecord {
        name,
        category,
        demand,
        avg_salary,
        related_skills,
        job_count,
        indian_companies: MAJOR_RECRUITERS,
    }
}

pub const SKILLS_DATABASE: &[SkillRecord] = &[
    record("React", "Frontend", 95, 850_000, &["JavaScript", "TypeScript", "Redux", "Next.js"], 15_420),
    record("Python", "Backend", 92, 900_000, &["Django", "Flask", "Pandas", "NumPy"], 18_250),
    record("Machine Learning", "AI/ML", 88, 1_100_000, &["Python", "TensorFlow", "PyTorch", "Scikit-learn"], 8_950),
    record("Node.js", "Backend", 85, 820_000, &["JavaScript", "Express.js", "MongoDB", "REST API"], 12_340),
    record("Data Science", "Analytics", 90, 950_000, &["Python", "SQL", "Statistics", "Visualization"], 11_200),
    record("AWS", "Cloud", 87, 1_050_000, &["DevOps", "Docker", "Kubernetes", "Lambda"], 9_870),
    record("Java", "Backend", 89, 880_000, &["Spring Boot", "Hibernate", "Maven", "JUnit"], 15_600),
    record("Angular", "Frontend", 78, 780_000, &["TypeScript", "RxJS", "Angular Material", "NgRx"], 8_900),
    record("DevOps", "Infrastructure", 86, 980_000, &["Docker", "Kubernetes", "Jenkins", "GitLab CI"], 7_600),
    record(
        "Cybersecurity",
        "Security",
        91,
        1_200_000,
        &["Network Security", "Penetration Testing", "Security Auditing", "Compliance"],
        5_400,
    ),
];

pub fn find_skill(name: &str) -> Option<&'static SkillRecord> {
    SKILLS_DATABASE.iter().find(|s| s.name == name)
}

pub fn skills_in_category(category: &str) -> Vec<&'static SkillRecord> {
    SKILLS_DATABASE
        .iter()
        .filter(|s| s.category.eq_ignore_ascii_case(category))
        .collect()
}

pub fn top_by_demand(limit: usize) -> Vec<&'static SkillRecord> {
    let mut skills: Vec<_> = SKILLS_DATABASE.iter().collect();
    skills.sort_by(|a, b| b.demand.cmp(&a.demand));
    skills.truncate(limit);
    skills
}

/// Skills whose average salary lies in `[min, max]`, richest first.
pub fn skills_in_salary_range(min: u64, max: u64) -> Vec<&'static SkillRecord> {
    let mut skills: Vec<_> = SKILLS_DATABASE
        .iter()
        .filter(|s| (min..=max).contains(&s.avg_salary))
        .collect();
    skills.sort_by(|a, b| b.avg_salary.cmp(&a.avg_salary));
    skills
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

/// GET /api/skills/analysis
pub async fn handle_analysis() -> Json<ApiResponse<&'static [SkillRecord]>> {
    Json(ApiResponse::ok(SKILLS_DATABASE).stamped())
}

/// GET /api/skills/:skill_name
pub async fn handle_skill_detail(
    Path(skill_name): Path<String>,
) -> Result<Json<ApiResponse<&'static SkillRecord>>, AppError> {
    let skill =
        find_skill(&skill_name).ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;
    Ok(Json(ApiResponse::ok(skill)))
}

/// GET /api/skills/category/:category
pub async fn handle_category(
    Path(category): Path<String>,
) -> Json<ApiResponse<Vec<&'static SkillRecord>>> {
    let skills = skills_in_category(&category);
    Json(ApiResponse::ok(skills).with("category", category))
}

/// GET /api/skills/top/demand?limit=N
pub async fn handle_top_demand(
    AppQuery(query): AppQuery<TopQuery>,
) -> Json<ApiResponse<Vec<&'static SkillRecord>>> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    Json(ApiResponse::ok(top_by_demand(limit)).with("limit", limit))
}

/// GET /api/skills/salary/:min/:max
pub async fn handle_salary_range(
    Path((min, max)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<&'static SkillRecord>>>, AppError> {
    let parse = |raw: &str| {
        raw.trim()
            .parse::<u64>()
            .map_err(|_| AppError::Validation(format!("Invalid salary bound '{raw}'")))
    };
    let (min, max) = (parse(&min)?, parse(&max)?);

    let range = serde_json::to_value(SalaryRange { min, max })
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(
        ApiResponse::ok(skills_in_salary_range(min, max)).with("salaryRange", range),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_skill_is_exact() {
        assert!(find_skill("React").is_some());
        assert!(find_skill("react").is_none());
        assert!(find_skill("Haskell").is_none());
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let backend = skills_in_category("backend");
        let names: Vec<_> = backend.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Python", "Node.js", "Java"]);
    }

    #[test]
    fn test_top_by_demand_sorted() {
        let top = top_by_demand(3);
        let names: Vec<_> = top.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["React", "Python", "Cybersecurity"]);
    }

    #[test]
    fn test_top_limit_larger_than_catalog() {
        assert_eq!(top_by_demand(100).len(), SKILLS_DATABASE.len());
    }

    #[test]
    fn test_salary_range_inclusive_and_sorted() {
        let skills = skills_in_salary_range(900_000, 1_100_000);
        let names: Vec<_> = skills.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Machine Learning", "AWS", "DevOps", "Data Science", "Python"]
        );
    }

    #[test]
    fn test_inverted_salary_range_is_empty() {
        assert!(skills_in_salary_range(2_000_000, 100).is_empty());
    }
}
