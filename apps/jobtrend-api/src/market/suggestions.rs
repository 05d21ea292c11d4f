//! Static learning plan returned by the skill suggestions endpoint.

use axum::{extract::Path, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::gaps::Priority;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct LearningPlatform {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedSkill {
    pub name: &'static str,
    pub reason: &'static str,
    pub priority: Priority,
    pub time_to_learn: &'static str,
    pub salary_impact: &'static str,
    pub learning_platforms: &'static [LearningPlatform],
}

#[derive(Debug, Serialize)]
pub struct SuggestionGroup {
    pub category: &'static str,
    pub skills: &'static [SuggestedSkill],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOutlook {
    pub top_growing_skills: &'static [&'static str],
    pub salary_impact: &'static str,
    pub learning_path: &'static str,
    pub immediate_actions: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestions {
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub suggestions: &'static [SuggestionGroup],
    pub market_insights: &'static MarketOutlook,
}

const fn platform(name: &'static str, url: &'static str) -> LearningPlatform {
    LearningPlatform { name, url }
}

const NPTEL: LearningPlatform = platform("NPTEL (Free)", "https://nptel.ac.in/courses/106/105/106105183/");

pub const SUGGESTION_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        category: "Core Programming Skills",
        skills: &[
            SuggestedSkill {
                name: "Python",
                reason: "Essential for AI/ML, web development, and automation. 95% of Indian tech companies require Python skills.",
                priority: Priority::High,
                time_to_learn: "2-3 months",
                salary_impact: "+₹2-3 LPA",
                learning_platforms: &[
                    NPTEL,
                    platform("Coursera", "https://www.coursera.org/learn/python"),
                    platform("Udemy", "https://www.udemy.com/course/complete-python-bootcamp/"),
                    platform("Great Learning", "https://www.greatlearning.in/python-for-machine-learning"),
                ],
            },
            SuggestedSkill {
                name: "JavaScript",
                reason: "Required for 90% of web development jobs in India. Essential for both frontend and backend.",
                priority: Priority::High,
                time_to_learn: "1-2 months",
                salary_impact: "+₹1.5-2.5 LPA",
                learning_platforms: &[
                    platform("freeCodeCamp (Free)", "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/"),
                    platform("Coursera", "https://www.coursera.org/learn/javascript"),
                    platform("Udemy", "https://www.udemy.com/course/javascript-the-complete-guide-2020-beginner-advanced/"),
                    platform("Simplilearn", "https://www.simplilearn.com/javascript-training-course"),
                ],
            },
            SuggestedSkill {
                name: "Java",
                reason: "Critical for enterprise applications. 80% of Indian IT companies use Java for backend development.",
                priority: Priority::High,
                time_to_learn: "3-4 months",
                salary_impact: "+₹2-4 LPA",
                learning_platforms: &[
                    NPTEL,
                    platform("Coursera", "https://www.coursera.org/learn/java-programming"),
                    platform("Udemy", "https://www.udemy.com/course/java-tutorial/"),
                    platform("Great Learning", "https://www.greatlearning.in/java-programming"),
                ],
            },
        ],
    },
    SuggestionGroup {
        category: "Web Development Framework",
        skills: &[
            SuggestedSkill {
                name: "React.js",
                reason: "Most in-demand frontend framework. 70% of Indian startups and MNCs use React for web applications.",
                priority: Priority::High,
                time_to_learn: "2-3 months",
                salary_impact: "+₹2-3.5 LPA",
                learning_platforms: &[
                    platform("React Official (Free)", "https://react.dev/learn"),
                    platform("Coursera", "https://www.coursera.org/learn/react"),
                    platform("Udemy", "https://www.udemy.com/course/react-the-complete-guide-incl-redux/"),
                    platform("freeCodeCamp (Free)", "https://www.freecodecamp.org/news/learn-react-js-in-this-crash-course/"),
                    platform("Simplilearn", "https://www.simplilearn.com/react-js-training-course"),
                ],
            },
            SuggestedSkill {
                name: "Node.js",
                reason: "Essential for full-stack development. 60% of Indian web companies use Node.js for backend.",
                priority: Priority::High,
                time_to_learn: "2-3 months",
                salary_impact: "+₹2-3 LPA",
                learning_platforms: &[
                    platform("Node.js Official (Free)", "https://nodejs.org/en/learn/"),
                    platform("Coursera", "https://www.coursera.org/learn/server-side-nodejs"),
                    platform("Udemy", "https://www.udemy.com/course/nodejs-the-complete-guide/"),
                    platform("freeCodeCamp (Free)", "https://www.freecodecamp.org/news/learn-node-js-completely-and-practice-with-examples/"),
                    platform("Great Learning", "https://www.greatlearning.in/node-js-course"),
                ],
            },
        ],
    },
    SuggestionGroup {
        category: "Cloud & DevOps",
        skills: &[
            SuggestedSkill {
                name: "AWS",
                reason: "Leading cloud platform in India. 75% of Indian companies use AWS. High demand for certified professionals.",
                priority: Priority::High,
                time_to_learn: "3-4 months",
                salary_impact: "+₹3-5 LPA",
                learning_platforms: &[
                    platform("AWS Training (Free)", "https://aws.amazon.com/training/"),
                    platform("Coursera", "https://www.coursera.org/specializations/aws-cloud"),
                    platform("Udemy", "https://www.udemy.com/course/aws-certified-solutions-architect-associate/"),
                    platform("Simplilearn", "https://www.simplilearn.com/aws-solutions-architect-training"),
                    platform("Great Learning", "https://www.greatlearning.in/aws-cloud-practitioner"),
                ],
            },
            SuggestedSkill {
                name: "Docker",
                reason: "Containerization is essential for modern development. 65% of Indian companies use Docker.",
                priority: Priority::Medium,
                time_to_learn: "1-2 months",
                salary_impact: "+₹1.5-2.5 LPA",
                learning_platforms: &[
                    platform("Docker Official (Free)", "https://docs.docker.com/get-started/"),
                    platform("Coursera", "https://www.coursera.org/learn/docker-kubernetes"),
                    platform("Udemy", "https://www.udemy.com/course/docker-mastery/"),
                    platform("Simplilearn", "https://www.simplilearn.com/docker-training-course"),
                ],
            },
        ],
    },
    SuggestionGroup {
        category: "Data & AI",
        skills: &[
            SuggestedSkill {
                name: "Machine Learning",
                reason: "AI/ML is booming in India. 85% of Indian tech companies are investing in AI/ML projects.",
                priority: Priority::High,
                time_to_learn: "4-6 months",
                salary_impact: "+₹4-6 LPA",
                learning_platforms: &[
                    NPTEL,
                    platform("Coursera", "https://www.coursera.org/learn/machine-learning"),
                    platform("edX", "https://www.edx.org/learn/machine-learning"),
                    platform("Great Learning", "https://www.greatlearning.in/machine-learning-course"),
                    platform("Simplilearn", "https://www.simplilearn.com/machine-learning-course"),
                ],
            },
            SuggestedSkill {
                name: "Data Science",
                reason: "High demand in Indian analytics companies. Every major Indian company has data science teams.",
                priority: Priority::High,
                time_to_learn: "4-6 months",
                salary_impact: "+₹3-5 LPA",
                learning_platforms: &[
                    NPTEL,
                    platform("Coursera", "https://www.coursera.org/specializations/jhu-data-science"),
                    platform("edX", "https://www.edx.org/learn/data-science"),
                    platform("Great Learning", "https://www.greatlearning.in/data-science-course"),
                    platform("Simplilearn", "https://www.simplilearn.com/data-science-course"),
                ],
            },
        ],
    },
    SuggestionGroup {
        category: "Database & Tools",
        skills: &[
            SuggestedSkill {
                name: "SQL",
                reason: "Essential for data management. 95% of Indian companies require SQL skills for data analysis.",
                priority: Priority::High,
                time_to_learn: "1-2 months",
                salary_impact: "+₹1-2 LPA",
                learning_platforms: &[
                    platform("freeCodeCamp (Free)", "https://www.freecodecamp.org/learn/relational-database/"),
                    platform("Coursera", "https://www.coursera.org/learn/sql-for-data-science"),
                    platform("Udemy", "https://www.udemy.com/course/sql-for-data-analysis/"),
                    platform("Simplilearn", "https://www.simplilearn.com/sql-training-course"),
                ],
            },
            SuggestedSkill {
                name: "Git & GitHub",
                reason: "Version control is mandatory for all development jobs. 100% of Indian tech companies use Git.",
                priority: Priority::High,
                time_to_learn: "2-4 weeks",
                salary_impact: "+₹0.5-1 LPA",
                learning_platforms: &[
                    platform("GitHub (Free)", "https://docs.github.com/en/get-started"),
                    platform("freeCodeCamp (Free)", "https://www.freecodecamp.org/news/git-and-github-for-beginners/"),
                    platform("Udemy", "https://www.udemy.com/course/git-complete/"),
                    platform("Simplilearn", "https://www.simplilearn.com/git-training-course"),
                ],
            },
        ],
    },
    SuggestionGroup {
        category: "Soft Skills",
        skills: &[
            SuggestedSkill {
                name: "Communication Skills",
                reason: "Critical for Indian IT sector. 90% of job interviews assess communication skills.",
                priority: Priority::High,
                time_to_learn: "Ongoing",
                salary_impact: "+₹1-2 LPA",
                learning_platforms: &[
                    platform("Coursera", "https://www.coursera.org/learn/communication-skills"),
                    platform("edX", "https://www.edx.org/learn/communication"),
                    platform("LinkedIn Learning", "https://www.linkedin.com/learning/topics/communication"),
                    platform("Simplilearn", "https://www.simplilearn.com/communication-skills-training"),
                ],
            },
            SuggestedSkill {
                name: "Problem Solving",
                reason: "Essential for technical interviews. 80% of Indian tech companies test problem-solving skills.",
                priority: Priority::High,
                time_to_learn: "Ongoing",
                salary_impact: "+₹1-3 LPA",
                learning_platforms: &[
                    platform("LeetCode (Free)", "https://leetcode.com/"),
                    platform("HackerRank (Free)", "https://www.hackerrank.com/"),
                    platform("GeeksforGeeks (Free)", "https://www.geeksforgeeks.org/"),
                    platform("Coursera", "https://www.coursera.org/learn/problem-solving"),
                ],
            },
        ],
    },
];

pub static MARKET_OUTLOOK: MarketOutlook = MarketOutlook {
    top_growing_skills: &[
        "AI/ML",
        "Cybersecurity",
        "Cloud Native",
        "Data Engineering",
        "Full Stack Development",
    ],
    salary_impact: "Skills in AI/ML can increase salary by 25-40% in Indian market",
    learning_path: "Focus on emerging technologies for career growth in Indian tech sector",
    immediate_actions: &[
        "Start with Python or JavaScript as foundation",
        "Learn React.js for frontend development",
        "Get AWS certification for cloud skills",
        "Practice coding on LeetCode/HackerRank",
        "Build portfolio projects on GitHub",
    ],
};

/// GET /api/skills/suggestions/:user_id
pub async fn handle_suggestions(
    Path(user_id): Path<String>,
) -> Json<ApiResponse<SkillSuggestions>> {
    Json(
        ApiResponse::ok(SkillSuggestions {
            user_id,
            timestamp: Utc::now(),
            suggestions: SUGGESTION_GROUPS,
            market_insights: &MARKET_OUTLOOK,
        })
        .message("Skill suggestions generated successfully"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_suggestion_links_a_platform() {
        for group in SUGGESTION_GROUPS {
            for skill in group.skills {
                assert!(
                    !skill.learning_platforms.is_empty(),
                    "{} has no learning platform",
                    skill.name
                );
                assert!(skill
                    .learning_platforms
                    .iter()
                    .all(|p| p.url.starts_with("https://")));
            }
        }
    }

    #[test]
    fn test_groups_cover_six_categories() {
        assert_eq!(SUGGESTION_GROUPS.len(), 6);
    }
}
