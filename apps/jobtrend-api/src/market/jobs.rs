//! Job market trends and listings for the Indian market.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::response::ApiResponse;

pub const REGION: &str = "India";

const MAJOR_RECRUITERS: &[&str] = &["TCS", "Infosys", "Wipro", "HCL", "Tech Mahindra", "Cognizant"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTrend {
    pub skill: &'static str,
    pub demand: u32,
    pub growth: f64,
    /// Average annual salary in INR.
    pub avg_salary: u64,
    pub job_count: u32,
    pub indian_companies: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub required_skills: &'static [&'static str],
    pub description: &'static str,
    pub match_score: u32,
    pub application_url: &'static str,
    pub posted_date: &'static str,
    pub job_type: &'static str,
    pub experience: &'static str,
    pub is_active: bool,
}

const fn trend(skill: &'static str, demand: u32, growth: f64, avg_salary: u64, job_count: u32) -> JobTrend {
    JobTrend {
        skill,
        demand,
        growth,
        avg_salary,
        job_count,
        indian_companies: MAJOR_RECRUITERS,
    }
}

pub const JOB_TRENDS: &[JobTrend] = &[
    trend("React", 95, 12.5, 850_000, 15_420),
    trend("Python", 92, 15.2, 900_000, 18_250),
    trend("Machine Learning", 88, 18.7, 1_100_000, 8_950),
    trend("Node.js", 85, 10.3, 820_000, 12_340),
    trend("Data Science", 90, 16.8, 950_000, 11_200),
    trend("AWS", 87, 14.2, 1_050_000, 9_870),
    trend("Java", 89, 11.5, 880_000, 15_600),
    trend("Angular", 78, 8.9, 780_000, 8_900),
    trend("DevOps", 86, 13.7, 980_000, 7_600),
    trend("Cybersecurity", 91, 19.2, 1_200_000, 5_400),
];

pub const JOB_LISTINGS: &[JobListing] = &[
    JobListing {
        id: 1,
        title: "Senior React Developer",
        company: "TCS",
        location: "Mumbai, Maharashtra",
        salary: "₹12,00,000 - ₹15,00,000",
        required_skills: &["React", "TypeScript", "Node.js", "AWS"],
        description: "We are looking for an experienced React developer for our Mumbai office. You will be responsible for building scalable web applications and mentoring junior developers.",
        match_score: 95,
        application_url: "https://www.tcs.com/careers/india",
        posted_date: "2024-01-15",
        job_type: "Full-time",
        experience: "senior",
        is_active: true,
    },
    JobListing {
        id: 2,
        title: "Full Stack Engineer",
        company: "Infosys",
        location: "Bangalore, Karnataka",
        salary: "₹10,00,000 - ₹13,00,000",
        required_skills: &["React", "Node.js", "MongoDB", "Express"],
        description: "Join our team in Bangalore to build scalable web applications. Work with cutting-edge technologies and be part of innovative projects.",
        match_score: 88,
        application_url: "https://career.infosys.com/jobsearch/",
        posted_date: "2024-01-12",
        job_type: "Full-time",
        experience: "mid",
        is_active: true,
    },
    JobListing {
        id: 3,
        title: "Machine Learning Engineer",
        company: "Wipro",
        location: "Hyderabad, Telangana",
        salary: "₹13,00,000 - ₹16,00,000",
        required_skills: &["Python", "Machine Learning", "TensorFlow", "AWS"],
        description: "Develop cutting-edge ML solutions in our Hyderabad office. Work on AI/ML projects that impact millions of users worldwide.",
        match_score: 75,
        application_url: "https://careers.wipro.com/careers-home/",
        posted_date: "2024-01-10",
        job_type: "Full-time",
        experience: "senior",
        is_active: true,
    },
    JobListing {
        id: 4,
        title: "DevOps Engineer",
        company: "HCL",
        location: "Pune, Maharashtra",
        salary: "₹11,00,000 - ₹14,00,000",
        required_skills: &["Docker", "Kubernetes", "Jenkins", "AWS"],
        description: "Join our DevOps team in Pune to manage cloud infrastructure. Help us build and maintain robust CI/CD pipelines.",
        match_score: 82,
        application_url: "https://www.hcltech.com/careers",
        posted_date: "2024-01-08",
        job_type: "Full-time",
        experience: "mid",
        is_active: true,
    },
    JobListing {
        id: 5,
        title: "Data Scientist",
        company: "Tech Mahindra",
        location: "Chennai, Tamil Nadu",
        salary: "₹12,00,000 - ₹15,00,000",
        required_skills: &["Python", "Data Science", "SQL", "Machine Learning"],
        description: "Work with big data and analytics in our Chennai office. Transform data into actionable insights for business decisions.",
        match_score: 90,
        application_url: "https://careers.techmahindra.com/",
        posted_date: "2024-01-05",
        job_type: "Full-time",
        experience: "senior",
        is_active: true,
    },
    JobListing {
        id: 6,
        title: "Java Developer",
        company: "Cognizant",
        location: "Delhi, NCR",
        salary: "₹9,00,000 - ₹12,00,000",
        required_skills: &["Java", "Spring Boot", "Hibernate", "MySQL"],
        description: "Develop enterprise applications in our Delhi office. Work on large-scale projects for Fortune 500 companies.",
        match_score: 85,
        application_url: "https://careers.cognizant.com/global/en",
        posted_date: "2024-01-03",
        job_type: "Full-time",
        experience: "junior",
        is_active: true,
    },
    JobListing {
        id: 7,
        title: "Frontend Developer",
        company: "Accenture",
        location: "Gurgaon, Haryana",
        salary: "₹8,00,000 - ₹11,00,000",
        required_skills: &["React", "JavaScript", "HTML", "CSS"],
        description: "Create beautiful and responsive user interfaces. Work with modern frontend frameworks and tools.",
        match_score: 92,
        application_url: "https://careers.accenture.com/in/en",
        posted_date: "2024-01-14",
        job_type: "Full-time",
        experience: "junior",
        is_active: true,
    },
    JobListing {
        id: 8,
        title: "Backend Developer",
        company: "Capgemini",
        location: "Pune, Maharashtra",
        salary: "₹10,00,000 - ₹13,00,000",
        required_skills: &["Node.js", "Express", "MongoDB", "Redis"],
        description: "Build robust backend services and APIs. Work on microservices architecture and cloud deployment.",
        match_score: 87,
        application_url: "https://www.capgemini.com/in-en/careers/",
        posted_date: "2024-01-11",
        job_type: "Full-time",
        experience: "mid",
        is_active: true,
    },
    JobListing {
        id: 9,
        title: "Python Developer",
        company: "L&T Infotech",
        location: "Mumbai, Maharashtra",
        salary: "₹8,50,000 - ₹11,50,000",
        required_skills: &["Python", "Django", "PostgreSQL", "REST APIs"],
        description: "Develop scalable web applications using Python. Work on enterprise-level projects with modern frameworks.",
        match_score: 78,
        application_url: "https://www.lntinfotech.com/careers/",
        posted_date: "2024-01-09",
        job_type: "Full-time",
        experience: "junior",
        is_active: true,
    },
    JobListing {
        id: 10,
        title: "Cloud Solutions Architect",
        company: "Mindtree",
        location: "Bangalore, Karnataka",
        salary: "₹15,00,000 - ₹20,00,000",
        required_skills: &["AWS", "Azure", "Docker", "Kubernetes", "Terraform"],
        description: "Design and implement cloud solutions for enterprise clients. Lead cloud migration and optimization projects.",
        match_score: 70,
        application_url: "https://www.mindtree.com/careers",
        posted_date: "2024-01-07",
        job_type: "Full-time",
        experience: "senior",
        is_active: true,
    },
    JobListing {
        id: 11,
        title: "UI/UX Designer",
        company: "Zensar",
        location: "Pune, Maharashtra",
        salary: "₹7,00,000 - ₹10,00,000",
        required_skills: &["Figma", "Adobe XD", "Sketch", "Prototyping", "User Research"],
        description: "Create intuitive and beautiful user experiences. Work on digital transformation projects for global clients.",
        match_score: 65,
        application_url: "https://www.zensar.com/careers",
        posted_date: "2024-01-06",
        job_type: "Full-time",
        experience: "junior",
        is_active: true,
    },
    JobListing {
        id: 12,
        title: "Cybersecurity Analyst",
        company: "Mphasis",
        location: "Bangalore, Karnataka",
        salary: "₹9,00,000 - ₹12,00,000",
        required_skills: &["Cybersecurity", "SIEM", "Penetration Testing", "Network Security"],
        description: "Protect digital assets and infrastructure. Conduct security assessments and implement security measures.",
        match_score: 80,
        application_url: "https://careers.mphasis.com/",
        posted_date: "2024-01-04",
        job_type: "Full-time",
        experience: "mid",
        is_active: true,
    },
];

/// GET /api/jobs/trends
pub async fn handle_trends() -> Json<ApiResponse<&'static [JobTrend]>> {
    Json(ApiResponse::ok(JOB_TRENDS).stamped().region(REGION))
}

/// GET /api/jobs/listings
pub async fn handle_listings() -> Json<ApiResponse<&'static [JobListing]>> {
    Json(ApiResponse::ok(JOB_LISTINGS).stamped().region(REGION))
}

/// GET /api/jobs/match/:user_id
///
/// No user profiles exist server-side; every user sees the full listing.
pub async fn handle_match_for_user(
    Path(user_id): Path<String>,
) -> Json<ApiResponse<&'static [JobListing]>> {
    Json(
        ApiResponse::ok(JOB_LISTINGS)
            .with("userId", user_id)
            .stamped()
            .region(REGION),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_ids_unique_and_ordered() {
        let ids: Vec<u32> = JOB_LISTINGS.iter().map(|j| j.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_trend_demand_is_a_percentage() {
        assert!(JOB_TRENDS.iter().all(|t| t.demand <= 100));
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let value = serde_json::to_value(&JOB_LISTINGS[0]).unwrap();
        assert_eq!(value["applicationUrl"], "https://www.tcs.com/careers/india");
        assert_eq!(value["isActive"], true);
    }
}
